//! Immediate-mode drawing of world-space primitives into a framebuffer.

use log::trace;
use sk_math::{Point2, Point3, Transform};
use sk_mesh::TriangleMesh;

use crate::raster::{draw_line, draw_point, fill_triangle, ScreenPoint};
use crate::{Color, DirectionalLight, Framebuffer, Material, Projector};

/// Lift 2D logical points onto the `z = 0` plane.
pub fn lift(points: &[Point2]) -> Vec<Point3> {
    points.iter().map(|p| p.extend(0.0)).collect()
}

/// Draws through a [`Projector`] into a borrowed framebuffer.
pub struct Canvas<'a> {
    fb: &'a mut Framebuffer,
    projector: &'a dyn Projector,
    depth_test: bool,
}

impl<'a> Canvas<'a> {
    pub fn new(fb: &'a mut Framebuffer, projector: &'a dyn Projector) -> Self {
        Self {
            fb,
            projector,
            depth_test: false,
        }
    }

    /// Enable depth testing for everything drawn afterwards.
    pub fn with_depth_test(mut self) -> Self {
        self.depth_test = true;
        self
    }

    pub fn clear(&mut self, color: Color) {
        self.fb.clear(color);
    }

    fn project(&self, p: Point3) -> Option<ScreenPoint> {
        self.projector.project(p, self.fb.width(), self.fb.height())
    }

    pub fn points(&mut self, points: &[Point3], size: u32, color: Color) {
        for &p in points {
            if let Some(s) = self.project(p) {
                draw_point(self.fb, s, size, self.depth_test, color);
            }
        }
    }

    /// Independent segments, like `GL_LINES`.
    pub fn lines(&mut self, segments: &[(Point3, Point3)], width: u32, color: Color) {
        for &(a, b) in segments {
            self.segment(a, b, width, color);
        }
    }

    /// Connected segments through consecutive points, like `GL_LINE_STRIP`.
    pub fn line_strip(&mut self, points: &[Point3], width: u32, color: Color) {
        for pair in points.windows(2) {
            self.segment(pair[0], pair[1], width, color);
        }
    }

    fn segment(&mut self, a: Point3, b: Point3, width: u32, color: Color) {
        // Segments with an end outside the clip volume are dropped whole.
        if let (Some(sa), Some(sb)) = (self.project(a), self.project(b)) {
            draw_line(self.fb, sa, sb, width, self.depth_test, color);
        }
    }

    /// Flat-colored triangles.
    pub fn triangles(&mut self, triangles: &[[Point3; 3]], color: Color) {
        for tri in triangles {
            if let [Some(a), Some(b), Some(c)] = tri.map(|p| self.project(p)) {
                fill_triangle(self.fb, [a, b, c], [color; 3], self.depth_test);
            }
        }
    }

    /// Gouraud-shaded mesh under one directional light.
    ///
    /// `view_dir` points from the scene towards the viewer. Missing normals
    /// are computed on a copy of the mesh.
    pub fn shaded_mesh(
        &mut self,
        mesh: &TriangleMesh,
        material: &Material,
        light: &DirectionalLight,
        view_dir: sk_math::Vector3,
    ) {
        let owned;
        let mesh = if mesh.normals.len() == mesh.positions.len() {
            mesh
        } else {
            let mut copy = mesh.clone();
            copy.compute_normals();
            owned = copy;
            &owned
        };

        let lit: Vec<(Option<ScreenPoint>, Color)> = mesh
            .positions
            .iter()
            .zip(&mesh.normals)
            .map(|(&p, &n)| (self.project(p), light.shade(material, n, view_dir)))
            .collect();

        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [lit[tri[0] as usize], lit[tri[1] as usize], lit[tri[2] as usize]];
            if let (Some(pa), Some(pb), Some(pc)) = (a.0, b.0, c.0) {
                fill_triangle(self.fb, [pa, pb, pc], [a.1, b.1, c.1], self.depth_test);
            }
        }
        trace!("shaded {} triangles", mesh.triangle_count());
    }

    /// Every unique mesh edge, after applying `model`.
    pub fn wireframe(&mut self, mesh: &TriangleMesh, model: &Transform, width: u32, color: Color) {
        let projected: Vec<Option<ScreenPoint>> = mesh
            .positions
            .iter()
            .map(|&p| self.project(model.transform_point(p)))
            .collect();
        for (a, b) in mesh.edges() {
            if let (Some(sa), Some(sb)) = (projected[a as usize], projected[b as usize]) {
                draw_line(self.fb, sa, sb, width, self.depth_test, color);
            }
        }
        trace!("drew wireframe of {} vertices", mesh.vertex_count());
    }
}
