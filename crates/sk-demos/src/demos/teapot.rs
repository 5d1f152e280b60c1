use std::f64::consts::PI;

use log::debug;
use sk_core::Result;
use sk_geometry::curve::{BSplineCurve, BezierCurve};
use sk_geometry::surface::{RevolvedSurface, Surface, ToroidalSection, TubeSurface};
use sk_geometry::tessellate::surface_to_grid;
use sk_math::{DVec3, Point2, Transform, Vector3};
use sk_mesh::TriangleMesh;
use sk_render::{Canvas, Color, Demo, DirectionalLight, Framebuffer, Material, OrthoView};

/// A teapot assembled from spline surfaces, lit by one directional light.
pub struct TeapotDemo {
    size: (u32, u32),
    mesh: TriangleMesh,
}

impl TeapotDemo {
    pub const DEFAULT_SIZE: (u32, u32) = (500, 500);
    pub const BACKGROUND: Color = Color::gray(0.75);
    pub const SCALE: f64 = 0.5;

    pub fn new(size: (u32, u32)) -> Result<Self> {
        let mesh = teapot_mesh(Self::SCALE)?;
        debug!(
            "teapot: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(Self { size, mesh })
    }

    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    pub fn material() -> Material {
        Material {
            ambient: Color::BLACK,
            diffuse: Color::gray(0.5),
            specular: Color::WHITE,
            shininess: 50.0,
        }
    }

    pub fn light() -> DirectionalLight {
        DirectionalLight::new(Vector3::new(1.0, 1.0, 1.0))
    }
}

/// Body and lid profiles as `(radius, height)`, bottom to top, in units where
/// the body is 2 wide at its belly and the knob tops out at 3.15.
const BODY_PROFILE: [(f64, f64); 7] = [
    (0.0, 0.0),
    (1.5, 0.0),
    (2.0, 0.15),
    (2.05, 0.9),
    (1.9, 1.8),
    (1.55, 2.25),
    (1.4, 2.4),
];

const LID_PROFILE: [(f64, f64); 7] = [
    (1.45, 2.4),
    (1.3, 2.55),
    (0.7, 2.7),
    (0.15, 2.8),
    (0.2, 2.95),
    (0.3, 3.1),
    (0.0, 3.15),
];

fn profile(points: &[(f64, f64)]) -> Result<BSplineCurve<Point2>> {
    BSplineCurve::clamped(3, points.iter().map(|&(r, y)| Point2::new(r, y)).collect())
}

fn mesh_of(surface: &dyn Surface, u_count: usize, v_count: usize) -> Result<TriangleMesh> {
    Ok(TriangleMesh::from_grid(&surface_to_grid(surface, u_count, v_count)?))
}

/// Tessellate the teapot, centered on the origin and scaled so `size` matches
/// the fixed-function teapot of the same size.
pub fn teapot_mesh(size: f64) -> Result<TriangleMesh> {
    let body = RevolvedSurface::new(profile(&BODY_PROFILE)?);
    let lid = RevolvedSurface::new(profile(&LID_PROFILE)?);
    let handle = ToroidalSection::new(DVec3::new(-2.0, 1.6, 0.0), DVec3::Z, 0.75, 0.15).with_major_range(0.0, PI);
    let spout_axis = BezierCurve::new(vec![
        DVec3::new(1.7, 0.9, 0.0),
        DVec3::new(2.6, 1.2, 0.0),
        DVec3::new(3.0, 2.4, 0.0),
    ])?;
    let spout = TubeSurface::new(spout_axis, 0.35, 0.12);

    let mut mesh = mesh_of(&body, 32, 48)?;
    mesh.merge(&mesh_of(&lid, 16, 48)?);
    mesh.merge(&mesh_of(&handle, 16, 12)?);
    mesh.merge(&mesh_of(&spout, 16, 16)?);

    let place = Transform::from_translation(Vector3::new(0.0, -1.5, 0.0)).then(&Transform::from_scale(0.5 * size));
    mesh.transform(&place);
    Ok(mesh)
}

impl Demo for TeapotDemo {
    fn title(&self) -> &str {
        "Teapot"
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        let view = OrthoView::cube(1.0);
        let mut canvas = Canvas::new(fb, &view).with_depth_test();
        canvas.clear(Self::BACKGROUND);
        canvas.shaded_mesh(&self.mesh, &Self::material(), &Self::light(), Vector3::Z);
    }
}
