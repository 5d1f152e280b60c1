//! Bezier curves evaluated with de Casteljau's algorithm.

use serde::{Deserialize, Serialize};
use sk_core::{Result, SketchError};

use super::Curve;
use crate::point::ControlPoint;

/// A Bezier curve of degree `control_points.len() - 1` over `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierCurve<P> {
    control_points: Vec<P>,
}

impl<P: ControlPoint> BezierCurve<P> {
    pub fn new(control_points: Vec<P>) -> Result<Self> {
        if control_points.len() < 2 {
            return Err(SketchError::invalid(format!(
                "Bezier curve needs at least 2 control points, got {}",
                control_points.len()
            )));
        }
        Ok(Self { control_points })
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }
}

impl<P: ControlPoint> Curve for BezierCurve<P> {
    type Point = P;

    fn point_at(&self, t: f64) -> P {
        let mut pts = self.control_points.clone();
        for level in (1..pts.len()).rev() {
            for i in 0..level {
                pts[i] = pts[i] * (1.0 - t) + pts[i + 1] * t;
            }
        }
        pts[0]
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sk_math::DVec2;

    fn quadratic() -> BezierCurve<DVec2> {
        BezierCurve::new(vec![
            DVec2::new(-4.0, 0.0),
            DVec2::new(0.0, 4.0),
            DVec2::new(4.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_quadratic_matches_bernstein() {
        let curve = quadratic();
        assert_eq!(curve.degree(), 2);
        for k in 0..=10 {
            let t = k as f64 / 10.0;
            let cp = curve.control_points();
            let expected =
                cp[0] * ((1.0 - t) * (1.0 - t)) + cp[1] * (2.0 * t * (1.0 - t)) + cp[2] * (t * t);
            let p = curve.point_at(t);
            assert_abs_diff_eq!(p.x, expected.x, epsilon = 1e-12);
            assert_abs_diff_eq!(p.y, expected.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_apex() {
        let p = quadratic().point_at(0.5);
        assert_abs_diff_eq!(p.x, 0.0);
        assert_abs_diff_eq!(p.y, 2.0);
    }

    #[test]
    fn test_too_few_points() {
        assert!(BezierCurve::new(vec![DVec2::ZERO]).is_err());
    }
}
