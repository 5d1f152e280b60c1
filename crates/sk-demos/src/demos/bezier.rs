use sk_core::Result;
use sk_geometry::curve::{BezierCurve, Curve};
use sk_math::{Ortho2, Point2};
use sk_render::canvas::lift;
use sk_render::{Canvas, Color, Demo, Framebuffer, OrthoView};

/// The quadratic Bezier arch over `(-4, 0), (0, 4), (4, 0)`.
pub struct BezierDemo {
    size: (u32, u32),
    strip: Vec<Point2>,
}

impl BezierDemo {
    pub const DEFAULT_SIZE: (u32, u32) = (400, 400);
    pub const VERTICES: usize = 31;

    pub fn new(size: (u32, u32)) -> Result<Self> {
        let curve = BezierCurve::new(vec![
            Point2::new(-4.0, 0.0),
            Point2::new(0.0, 4.0),
            Point2::new(4.0, 0.0),
        ])?;
        Ok(Self {
            size,
            strip: curve.sample(Self::VERTICES)?,
        })
    }

    pub fn strip(&self) -> &[Point2] {
        &self.strip
    }
}

impl Demo for BezierDemo {
    fn title(&self) -> &str {
        "Quadratic Bezier Curve"
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        let view = OrthoView::planar(Ortho2::symmetric(5.0));
        let mut canvas = Canvas::new(fb, &view);
        canvas.clear(Color::BLACK);
        canvas.line_strip(&lift(&self.strip), 1, Color::WHITE);
    }
}
