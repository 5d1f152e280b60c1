//! Toroidal surface sections.

use std::f64::consts::TAU;

use sk_math::{DVec3, Point3, Vector3};

use super::Surface;

/// A piece of a torus, parameterized by `u` (major angle) in
/// `[major_start, major_end]` and `v` (minor angle) in `[0, 2π]`.
///
/// The torus is centered at `center` with its axis of symmetry along `axis`.
/// `major_radius` is the distance from center to the tube center.
/// `minor_radius` is the radius of the tube.
#[derive(Debug, Clone)]
pub struct ToroidalSection {
    pub center: Point3,
    pub axis: Vector3,
    pub major_radius: f64,
    pub minor_radius: f64,
    pub major_start: f64,
    pub major_end: f64,
}

impl ToroidalSection {
    pub fn new(center: Point3, axis: Vector3, major_radius: f64, minor_radius: f64) -> Self {
        Self {
            center,
            axis: axis.normalize(),
            major_radius,
            minor_radius,
            major_start: 0.0,
            major_end: TAU,
        }
    }

    /// Restrict the major angle to `[start, end]`.
    pub fn with_major_range(mut self, start: f64, end: f64) -> Self {
        self.major_start = start;
        self.major_end = end;
        self
    }

    fn local_frame(&self) -> (DVec3, DVec3) {
        let n = self.axis;
        let ref_vec = if n.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
        let u = n.cross(ref_vec).normalize();
        let v = n.cross(u).normalize();
        (u, v)
    }
}

impl Surface for ToroidalSection {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (x_dir, y_dir) = self.local_frame();
        let radial = u.cos() * x_dir + u.sin() * y_dir;
        let tube_center = self.center + self.major_radius * radial;
        tube_center + self.minor_radius * (v.cos() * radial + v.sin() * self.axis)
    }

    fn domain_u(&self) -> (f64, f64) {
        (self.major_start, self.major_end)
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_points_on_tube() {
        let torus = ToroidalSection::new(DVec3::ZERO, DVec3::Z, 3.0, 1.0);
        for k in 0..6 {
            let u = k as f64;
            for m in 0..6 {
                let v = m as f64;
                let p = torus.point_at(u, v);
                let ring = (p.x * p.x + p.y * p.y).sqrt();
                let d = ((ring - 3.0).powi(2) + p.z * p.z).sqrt();
                assert!((d - 1.0).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_major_range() {
        let section = ToroidalSection::new(DVec3::ZERO, DVec3::Z, 2.0, 0.5)
            .with_major_range(-PI / 2.0, PI / 2.0);
        assert_eq!(section.domain_u(), (-PI / 2.0, PI / 2.0));
    }
}
