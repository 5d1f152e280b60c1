//! Windowed runner on top of minifb.

use std::time::Instant;

use log::{debug, info};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};
use sk_core::{Result, SketchError};

use crate::{Demo, Framebuffer, PointerTracker};

const TARGET_FPS: usize = 60;

/// Open a window and drive the demo until it is closed or Escape is pressed.
///
/// Each frame polls the mouse, dispatches at most one pointer event, advances
/// the animation clock, and redraws only when something asked for it.
///
/// minifb exposes mouse buttons only as polled state, so a click released
/// within the same frame it was pressed is dropped (see [`PointerTracker`]).
pub fn run_windowed(demo: &mut dyn Demo) -> Result<()> {
    let (width, height) = demo.size();
    let mut window = Window::new(
        demo.title(),
        width as usize,
        height as usize,
        WindowOptions::default(),
    )
    .map_err(|e| SketchError::Window(format!("failed to create window: {}", e)))?;
    window.set_target_fps(TARGET_FPS);
    info!("{}: opened {}x{} window", demo.title(), width, height);

    let mut fb = Framebuffer::new(width, height);
    let mut tracker = PointerTracker::new();
    let started = Instant::now();
    let mut dirty = true;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let pos = window.get_mouse_pos(MouseMode::Discard);
        let down = window.get_mouse_down(MouseButton::Left);
        if let Some(event) = tracker.update(pos, down) {
            debug!("pointer {:?}", event);
            dirty |= demo.pointer(event);
        }
        dirty |= demo.animate(started.elapsed().as_secs_f64());

        if dirty {
            demo.render(&mut fb);
            window
                .update_with_buffer(fb.as_slice(), width as usize, height as usize)
                .map_err(|e| SketchError::Window(format!("failed to present frame: {}", e)))?;
            dirty = false;
        } else {
            window.update();
        }
    }

    info!("{}: window closed", demo.title());
    Ok(())
}
