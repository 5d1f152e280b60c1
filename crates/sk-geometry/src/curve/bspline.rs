//! B-spline curves.

use serde::{Deserialize, Serialize};
use sk_core::traits::Validate;
use sk_core::Result;

use super::Curve;
use crate::nurbs::{basis, deboor, KnotVector};
use crate::point::ControlPoint;

/// A B-spline curve defined by degree, knot vector, and control points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BSplineCurve<P> {
    degree: usize,
    knots: KnotVector,
    control_points: Vec<P>,
}

impl<P: ControlPoint> BSplineCurve<P> {
    /// Build a curve, checking that `knots.len() == control_points.len() + degree + 1`.
    pub fn new(degree: usize, knots: KnotVector, control_points: Vec<P>) -> Result<Self> {
        let curve = Self {
            degree,
            knots,
            control_points,
        };
        curve.validate()?;
        Ok(curve)
    }

    /// Clamped curve with uniform interior knots over `[0, 1]`.
    ///
    /// Interpolates the first and last control points.
    pub fn clamped(degree: usize, control_points: Vec<P>) -> Result<Self> {
        let knots = KnotVector::clamped_uniform(control_points.len(), degree)?;
        Self::new(degree, knots, control_points)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    /// Evaluate by summing every control point against its Cox–de Boor basis.
    ///
    /// Slower than [`Curve::point_at`] but follows the recursive definition
    /// term by term.
    pub fn point_at_recursive(&self, t: f64) -> P {
        let knots = self.knots.as_slice();
        self.control_points
            .iter()
            .enumerate()
            .fold(P::default(), |acc, (i, &cp)| {
                acc + cp * basis(t, i, self.degree, knots)
            })
    }
}

impl<P: ControlPoint> Validate for BSplineCurve<P> {
    fn validate(&self) -> Result<()> {
        self.knots.validate()?;
        self.knots.check_fits(self.control_points.len(), self.degree)
    }
}

impl<P: ControlPoint> Curve for BSplineCurve<P> {
    type Point = P;

    fn point_at(&self, t: f64) -> P {
        let (lo, hi) = self.domain();
        deboor::curve_point(
            self.degree,
            self.knots.as_slice(),
            &self.control_points,
            t.clamp(lo, hi),
        )
    }

    fn domain(&self) -> (f64, f64) {
        self.knots.domain(self.degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sk_core::SketchError;
    use sk_math::{DVec2, DVec3};

    #[test]
    fn test_linear_two_points() {
        let curve = BSplineCurve::new(
            1,
            KnotVector::new(vec![0.0, 0.0, 1.0, 1.0]).unwrap(),
            vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0)],
        )
        .unwrap();

        let p = curve.point_at_recursive(0.25);
        assert_abs_diff_eq!(p.x, 0.25);
        assert_abs_diff_eq!(p.y, 0.25);

        let q = curve.point_at(0.25);
        assert_abs_diff_eq!(q.x, 0.25);
        assert_abs_diff_eq!(q.y, 0.25);
    }

    #[test]
    fn test_clamped_cubic_interpolates_ends() {
        let cps = vec![
            DVec2::new(100.0, 100.0),
            DVec2::new(200.0, 400.0),
            DVec2::new(400.0, 450.0),
            DVec2::new(600.0, 200.0),
            DVec2::new(700.0, 300.0),
        ];
        let curve = BSplineCurve::clamped(3, cps.clone()).unwrap();
        assert_eq!(curve.domain(), (0.0, 1.0));

        for p in [curve.point_at(0.0), curve.point_at_recursive(0.0)] {
            assert!((p - cps[0]).length() < 1e-9);
        }
        for p in [curve.point_at(1.0), curve.point_at_recursive(1.0)] {
            assert!((p - cps[4]).length() < 1e-9);
        }
    }

    #[test]
    fn test_recursive_agrees_with_deboor() {
        let cps = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 2.0, 0.0),
            DVec3::new(2.0, -1.0, 1.0),
            DVec3::new(3.0, 0.5, 2.0),
            DVec3::new(4.0, 1.0, 0.0),
            DVec3::new(5.0, 0.0, -1.0),
        ];
        let curve = BSplineCurve::clamped(3, cps).unwrap();
        for k in 0..=50 {
            let t = k as f64 / 50.0;
            let a = curve.point_at(t);
            let b = curve.point_at_recursive(t);
            assert!((a - b).length() < 1e-12, "t={} deboor={:?} recursive={:?}", t, a, b);
        }
    }

    #[test]
    fn test_too_few_points_for_degree() {
        let err = BSplineCurve::clamped(3, vec![DVec2::ZERO, DVec2::X, DVec2::Y]).unwrap_err();
        assert!(matches!(err, SketchError::InvalidParameterization(_)));
    }

    #[test]
    fn test_knot_length_mismatch() {
        let knots = KnotVector::new(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
        let err = BSplineCurve::new(2, knots, vec![DVec2::ZERO, DVec2::X]).unwrap_err();
        assert!(matches!(err, SketchError::InvalidParameterization(_)));
    }
}
