use log::debug;
use sk_core::Result;
use sk_geometry::{sample_surface, SurfaceGrid};
use sk_math::{DVec3, Point3};
use sk_render::{Camera, Canvas, Color, Demo, Framebuffer};

/// A 3×3 saddle-shaped control grid sampled as a biquadratic tensor-product
/// surface, drawn as a wire mesh over the coordinate axes.
pub struct BSplineSurfaceDemo {
    size: (u32, u32),
    grid: SurfaceGrid,
}

impl BSplineSurfaceDemo {
    pub const DEFAULT_SIZE: (u32, u32) = (800, 600);
    pub const DEGREE: usize = 2;
    pub const DENSITY: usize = 50;
    pub const KNOTS: [f64; 6] = [-1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

    pub fn control_points() -> Vec<Vec<Point3>> {
        vec![
            vec![DVec3::new(-1.0, -1.0, 0.0), DVec3::new(-1.0, 0.0, 2.0), DVec3::new(-1.0, 1.0, 0.0)],
            vec![DVec3::new(0.0, -1.0, -2.0), DVec3::new(0.0, 0.0, 4.0), DVec3::new(0.0, 1.0, -2.0)],
            vec![DVec3::new(1.0, -1.0, 0.0), DVec3::new(1.0, 0.0, 2.0), DVec3::new(1.0, 1.0, 0.0)],
        ]
    }

    pub fn new(size: (u32, u32)) -> Result<Self> {
        let grid = sample_surface(
            &Self::control_points(),
            &Self::KNOTS,
            &Self::KNOTS,
            Self::DEGREE,
            Self::DENSITY,
            Self::DENSITY,
        )?;
        debug!("surface grid {}x{}", grid.u_count(), grid.v_count());
        Ok(Self { size, grid })
    }

    pub fn grid(&self) -> &SurfaceGrid {
        &self.grid
    }

    fn camera(&self) -> Camera {
        Camera::looking_down_z(5.0, self.size.0 as f64 / self.size.1 as f64)
    }
}

impl Demo for BSplineSurfaceDemo {
    fn title(&self) -> &str {
        "B-Spline Surface"
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        let camera = self.camera();
        let mut canvas = Canvas::new(fb, &camera).with_depth_test();
        canvas.clear(Color::BLACK);

        canvas.lines(&[(Point3::ZERO, DVec3::X)], 2, Color::RED);
        canvas.lines(&[(Point3::ZERO, DVec3::Y)], 2, Color::GREEN);
        canvas.lines(&[(Point3::ZERO, DVec3::Z)], 2, Color::BLUE);

        for line in self.grid.wire_lines() {
            canvas.line_strip(&line, 1, Color::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_spans_control_corners() {
        let demo = BSplineSurfaceDemo::new(BSplineSurfaceDemo::DEFAULT_SIZE).unwrap();
        let grid = demo.grid();
        assert_eq!((grid.u_count(), grid.v_count()), (50, 50));
        assert!((grid.get(0, 0) - DVec3::new(-1.0, -1.0, 0.0)).length() < 1e-12);
        assert!((grid.get(49, 49) - DVec3::new(1.0, 1.0, 0.0)).length() < 1e-12);
    }
}
