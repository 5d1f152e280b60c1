use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sk_geometry::ifs::Ifs;
use sk_math::{Ortho2, Point2, Point3};
use sk_render::{Canvas, Color, Demo, Framebuffer, OrthoView};

/// Barnsley's fern plotted by the chaos game.
pub struct FernDemo {
    size: (u32, u32),
    points: Vec<Point3>,
}

impl FernDemo {
    pub const DEFAULT_SIZE: (u32, u32) = (450, 450);
    pub const ITERATIONS: usize = 50_000;
    pub const COLOR: Color = Color::rgb(0.4, 0.8, 0.4);

    /// Run the IFS once up front. Without a seed the RNG is seeded from
    /// system entropy.
    pub fn new(size: (u32, u32), seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let points = Ifs::barnsley_fern()
            .iterate(&mut rng, Point2::ZERO, Self::ITERATIONS)
            .into_iter()
            .map(|p| Point3::new(p.x / 10.0, p.y / 10.0 - 0.3, 0.0))
            .collect();
        debug!("fern: {} points (seed {:?})", Self::ITERATIONS, seed);
        Self { size, points }
    }

    /// Plotted positions in `[-1, 1]²` view coordinates.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }
}

impl Demo for FernDemo {
    fn title(&self) -> &str {
        "Barnsley"
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        let view = OrthoView::planar(Ortho2::symmetric(1.0));
        let mut canvas = Canvas::new(fb, &view);
        canvas.clear(Color::BLACK);
        canvas.points(&self.points, 1, Self::COLOR);
    }
}
