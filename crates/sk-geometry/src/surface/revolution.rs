//! Surfaces of revolution about the +Y axis.

use std::f64::consts::TAU;

use sk_math::{Point2, Point3};

use super::Surface;
use crate::curve::Curve;

/// A planar profile `(radius, height)` swept a full turn around +Y.
///
/// `u` runs along the profile's own domain, `v` is the sweep angle in
/// `[0, 2π]` measured from +X towards +Z. Profiles drawn bottom to top give
/// outward-facing grid triangles.
#[derive(Debug, Clone)]
pub struct RevolvedSurface<C> {
    profile: C,
}

impl<C: Curve<Point = Point2>> RevolvedSurface<C> {
    pub fn new(profile: C) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &C {
        &self.profile
    }
}

impl<C: Curve<Point = Point2>> Surface for RevolvedSurface<C> {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let p = self.profile.point_at(u);
        Point3::new(p.x * v.cos(), p.y, p.x * v.sin())
    }

    fn domain_u(&self) -> (f64, f64) {
        self.profile.domain()
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}
