use sk_geometry::curve::Line;
use sk_math::{Ortho2, Point2};
use sk_render::canvas::lift;
use sk_render::{Canvas, Color, Demo, Framebuffer, OrthoView};

/// A white segment from `(-0.5, 0)` to `(0.5, 0)` on black.
pub struct LineDemo {
    size: (u32, u32),
    line: Line<Point2>,
}

impl LineDemo {
    pub const DEFAULT_SIZE: (u32, u32) = (400, 400);

    pub fn new(size: (u32, u32)) -> Self {
        Self {
            size,
            line: Line::new(Point2::new(-0.5, 0.0), Point2::new(0.5, 0.0)),
        }
    }
}

impl Demo for LineDemo {
    fn title(&self) -> &str {
        "Line"
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        let view = OrthoView::planar(Ortho2::symmetric(1.0));
        let mut canvas = Canvas::new(fb, &view);
        canvas.clear(Color::BLACK);
        let ends = lift(&[self.line.start, self.line.end]);
        canvas.lines(&[(ends[0], ends[1])], 1, Color::WHITE);
    }
}
