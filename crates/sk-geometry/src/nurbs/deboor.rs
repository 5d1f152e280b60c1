//! De Boor evaluation of B-spline curve and surface points.
//!
//! These only touch the `degree + 1` non-vanishing basis functions per
//! direction, so they stay cheap at any degree. Callers validate knot/control
//! point counts before evaluating.

use sk_math::{DVec3, Point3};

use super::knot::{basis_functions, find_span};
use crate::point::ControlPoint;

/// Evaluate a B-spline curve point at parameter `t`.
pub fn curve_point<P: ControlPoint>(degree: usize, knots: &[f64], control_points: &[P], t: f64) -> P {
    let n = control_points.len() - 1;
    let span = find_span(degree, knots, n, t);
    let basis = basis_functions(degree, knots, span, t);

    basis
        .iter()
        .enumerate()
        .fold(P::default(), |acc, (j, &b)| {
            acc + control_points[span - degree + j] * b
        })
}

/// Evaluate a B-spline surface point at parameters `(u, v)`.
///
/// `control_points[k][l]` is indexed by `k` along u and `l` along v.
#[allow(clippy::needless_range_loop)]
pub fn surface_point(
    degree_u: usize,
    degree_v: usize,
    knots_u: &[f64],
    knots_v: &[f64],
    control_points: &[Vec<Point3>],
    u: f64,
    v: f64,
) -> Point3 {
    let n_u = control_points.len() - 1;
    let span_u = find_span(degree_u, knots_u, n_u, u);
    let basis_u = basis_functions(degree_u, knots_u, span_u, u);

    let n_v = control_points[0].len() - 1;
    let span_v = find_span(degree_v, knots_v, n_v, v);
    let basis_v = basis_functions(degree_v, knots_v, span_v, v);

    let mut point = DVec3::ZERO;
    for i in 0..=degree_u {
        let u_idx = span_u - degree_u + i;
        for j in 0..=degree_v {
            let v_idx = span_v - degree_v + j;
            point += basis_u[i] * basis_v[j] * control_points[u_idx][v_idx];
        }
    }

    point
}

#[cfg(test)]
mod tests {
    use super::*;
    use sk_math::DVec2;

    #[test]
    fn test_curve_point_linear() {
        let knots = vec![0.0, 0.0, 1.0, 2.0, 2.0];
        let cps = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
        ];

        let p = curve_point(1, &knots, &cps, 0.5);
        assert!((p - DVec2::new(0.5, 0.0)).length() < 1e-10);

        let p = curve_point(1, &knots, &cps, 1.5);
        assert!((p - DVec2::new(1.0, 0.5)).length() < 1e-10);
    }

    #[test]
    fn test_curve_point_quadratic_bezier() {
        let knots = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        let cps = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.5, 1.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
        ];

        assert!((curve_point(2, &knots, &cps, 0.0) - cps[0]).length() < 1e-10);
        assert!((curve_point(2, &knots, &cps, 1.0) - cps[2]).length() < 1e-10);

        // 0.25*P0 + 0.5*P1 + 0.25*P2
        let p = curve_point(2, &knots, &cps, 0.5);
        assert!((p - DVec3::new(0.5, 0.5, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_surface_point_bilinear() {
        let knots = vec![0.0, 0.0, 1.0, 1.0];
        let cps = vec![
            vec![DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0)],
            vec![DVec3::new(0.0, 1.0, 0.0), DVec3::new(1.0, 1.0, 0.0)],
        ];

        let p = surface_point(1, 1, &knots, &knots, &cps, 0.5, 0.5);
        assert!((p - DVec3::new(0.5, 0.5, 0.0)).length() < 1e-10);

        let corner = surface_point(1, 1, &knots, &knots, &cps, 1.0, 0.0);
        assert!((corner - DVec3::new(0.0, 1.0, 0.0)).length() < 1e-10);
    }
}
