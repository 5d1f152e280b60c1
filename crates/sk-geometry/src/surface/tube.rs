//! Tubes swept along a 3D spine curve.

use std::f64::consts::TAU;

use sk_math::{DVec3, Point3, Vector3};

use super::Surface;
use crate::curve::Curve;

/// A circular tube around `spine` whose radius blends linearly from
/// `start_radius` to `end_radius` over the spine's domain.
#[derive(Debug, Clone)]
pub struct TubeSurface<C> {
    spine: C,
    start_radius: f64,
    end_radius: f64,
}

impl<C: Curve<Point = Point3>> TubeSurface<C> {
    pub fn new(spine: C, start_radius: f64, end_radius: f64) -> Self {
        Self {
            spine,
            start_radius,
            end_radius,
        }
    }

    /// Unit tangent by central difference over the spine domain.
    fn tangent(&self, u: f64) -> Vector3 {
        let (t0, t1) = self.spine.domain();
        let h = (t1 - t0) * 1e-4;
        let a = self.spine.point_at((u - h).max(t0));
        let b = self.spine.point_at((u + h).min(t1));
        (b - a).normalize_or_zero()
    }

    fn radius(&self, u: f64) -> f64 {
        let (t0, t1) = self.spine.domain();
        let s = (u - t0) / (t1 - t0);
        self.start_radius + (self.end_radius - self.start_radius) * s
    }
}

impl<C: Curve<Point = Point3>> Surface for TubeSurface<C> {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let center = self.spine.point_at(u);
        let tangent = self.tangent(u);
        let reference = if tangent.z.abs() < 0.9 { DVec3::Z } else { DVec3::X };
        let side = tangent.cross(reference).normalize_or_zero();
        let up = side.cross(tangent);
        center + self.radius(u) * (v.cos() * side + v.sin() * up)
    }

    fn domain_u(&self) -> (f64, f64) {
        self.spine.domain()
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}
