//! World-to-pixel projection.

use sk_math::{DMat4, DVec4, Ortho2, Point2, Point3};

pub use crate::raster::ScreenPoint;

/// Maps world points to pixels in a `width × height` viewport.
pub trait Projector {
    /// Combined view-projection matrix producing OpenGL clip coordinates.
    fn clip_matrix(&self) -> DMat4;

    /// Project a point, or `None` when it falls outside the clip volume.
    fn project(&self, p: Point3, width: u32, height: u32) -> Option<ScreenPoint> {
        clip_to_screen(self.clip_matrix() * p.extend(1.0), width, height)
    }
}

/// Perspective divide and viewport mapping. Points behind the eye, beyond
/// the near/far planes, or not representable as finite pixels are rejected.
///
/// Points left or right of the viewport are kept; the rasterizer clips what
/// is drawn between them.
pub fn clip_to_screen(clip: DVec4, width: u32, height: u32) -> Option<ScreenPoint> {
    if clip.w <= f64::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !(-1.0..=1.0).contains(&ndc.z) {
        return None;
    }
    let p = ScreenPoint::new(
        (ndc.x + 1.0) * 0.5 * width as f64,
        (1.0 - ndc.y) * 0.5 * height as f64,
        ndc.z as f32,
    );
    (p.x.is_finite() && p.y.is_finite()).then_some(p)
}

/// Orthographic projection of an `Ortho2` rectangle and a depth range,
/// like `glOrtho`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoView {
    pub bounds: Ortho2,
    pub near: f64,
    pub far: f64,
}

impl OrthoView {
    /// 2D view with the `gluOrtho2D` depth range `[-1, 1]`.
    pub fn planar(bounds: Ortho2) -> Self {
        Self {
            bounds,
            near: -1.0,
            far: 1.0,
        }
    }

    /// The cube `[-half, half]³`.
    pub fn cube(half: f64) -> Self {
        Self {
            bounds: Ortho2::symmetric(half),
            near: -half,
            far: half,
        }
    }

    /// Pixel to logical coordinates within this view's rectangle.
    pub fn unproject(&self, x: i32, y: i32, width: u32, height: u32) -> Point2 {
        self.bounds.pixel_to_logical(x, y, width, height)
    }
}

impl Projector for OrthoView {
    fn clip_matrix(&self) -> DMat4 {
        let b = &self.bounds;
        DMat4::orthographic_rh_gl(b.left, b.right, b.bottom, b.top, self.near, self.far)
    }
}
