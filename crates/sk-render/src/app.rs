//! The demo callback surface and the headless runner.

use std::path::Path;

use log::info;
use sk_core::Result;

use crate::{Framebuffer, PointerEvent};

/// One drawable program: a redraw callback plus optional input and animation.
pub trait Demo {
    fn title(&self) -> &str;

    /// Initial window size in pixels.
    fn size(&self) -> (u32, u32);

    /// Draw a complete frame.
    fn render(&mut self, fb: &mut Framebuffer);

    /// Handle a pointer event. Returns whether a redraw is needed.
    fn pointer(&mut self, _event: PointerEvent) -> bool {
        false
    }

    /// Advance to `elapsed` seconds since start. Returns whether a redraw is
    /// needed.
    fn animate(&mut self, _elapsed: f64) -> bool {
        false
    }
}

/// Replay `events`, then render a single frame of the demo's size.
pub fn render_frame(demo: &mut dyn Demo, events: &[PointerEvent]) -> Framebuffer {
    for &event in events {
        demo.pointer(event);
    }
    demo.animate(0.0);
    let (width, height) = demo.size();
    let mut fb = Framebuffer::new(width, height);
    demo.render(&mut fb);
    fb
}

/// Render one frame without a window and write it to `output` as PPM.
pub fn run_headless(demo: &mut dyn Demo, events: &[PointerEvent], output: &Path) -> Result<()> {
    let fb = render_frame(demo, events);
    fb.save_ppm(output)?;
    info!("{}: wrote {}x{} frame to {}", demo.title(), fb.width(), fb.height(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    struct Dots {
        clicks: Vec<(i32, i32)>,
    }

    impl Demo for Dots {
        fn title(&self) -> &str {
            "dots"
        }

        fn size(&self) -> (u32, u32) {
            (8, 6)
        }

        fn render(&mut self, fb: &mut Framebuffer) {
            fb.clear(Color::BLACK);
            for &(x, y) in &self.clicks {
                fb.set_pixel(x, y, Color::WHITE);
            }
        }

        fn pointer(&mut self, event: PointerEvent) -> bool {
            if let PointerEvent::Pressed { x, y } = event {
                self.clicks.push((x, y));
                return true;
            }
            false
        }
    }

    #[test]
    fn test_render_frame_replays_events() {
        let mut demo = Dots { clicks: Vec::new() };
        let events = [
            PointerEvent::Pressed { x: 1, y: 2 },
            PointerEvent::Released { x: 1, y: 2 },
            PointerEvent::Pressed { x: 5, y: 5 },
        ];
        let fb = render_frame(&mut demo, &events);
        assert_eq!((fb.width(), fb.height()), (8, 6));
        assert_eq!(fb.pixel(1, 2), Some(0x00FF_FFFF));
        assert_eq!(fb.pixel(5, 5), Some(0x00FF_FFFF));
        assert_eq!(fb.pixel(0, 0), Some(0));
    }

    #[test]
    fn test_run_headless_writes_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        run_headless(&mut Dots { clicks: vec![] }, &[], &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n8 6\n255\n"));
        assert_eq!(bytes.len(), "P6\n8 6\n255\n".len() + 8 * 6 * 3);
    }
}
