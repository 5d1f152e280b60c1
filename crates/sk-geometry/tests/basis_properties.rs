// Property and scenario tests for basis evaluation and surface sampling

use proptest::prelude::*;
use sk_core::SketchError;
use sk_geometry::curve::{BSplineCurve, Curve};
use sk_geometry::nurbs::{basis, BasisTable, KnotVector};
use sk_geometry::sample_surface;
use sk_math::{DVec2, DVec3, Point3};

const EPSILON: f64 = 1e-9;

/// Clamped knot vector over `[offset, offset + scale]` with random (sorted)
/// interior knots given in unit coordinates.
fn clamped_knots(degree: usize, interior: &[f64], offset: f64, scale: f64) -> Vec<f64> {
    let mut inner: Vec<f64> = interior.to_vec();
    inner.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mut knots = vec![0.0; degree + 1];
    knots.extend(inner);
    knots.extend(vec![1.0; degree + 1]);
    knots.into_iter().map(|x| offset + scale * x).collect()
}

/// `(offset, scale)` pairs from 1e-13 up to 1e6 in width, shifted by up to
/// a hundred widths either side of zero.
fn knot_frame() -> impl Strategy<Value = (f64, f64)> {
    (-13i32..=6, -100.0f64..100.0).prop_map(|(exp, shift)| {
        let scale = 10f64.powi(exp);
        (shift * scale, scale)
    })
}

proptest! {
    #[test]
    fn partition_of_unity(
        degree in 1usize..=4,
        interior in prop::collection::vec(0.0f64..1.0, 0..6),
        (offset, scale) in knot_frame(),
        tu in 0.0f64..=1.0,
    ) {
        let knots = clamped_knots(degree, &interior, offset, scale);
        let t = offset + scale * tu;
        let count = knots.len() - degree - 1;
        let sum: f64 = (0..count).map(|i| basis(t, i, degree, &knots)).sum();
        prop_assert!((sum - 1.0).abs() < EPSILON, "sum = {} at t = {}", sum, t);
    }

    #[test]
    fn repeated_knots_never_nan(
        degree in 0usize..=4,
        interior in prop::collection::vec(prop::sample::select(vec![0.25, 0.5, 0.75]), 0..8),
        (offset, scale) in knot_frame(),
        tu in 0.0f64..=1.0,
    ) {
        let knots = clamped_knots(degree, &interior, offset, scale);
        let t = offset + scale * tu;
        let table = BasisTable::evaluate(&knots, degree, t);
        for i in 0..knots.len() - degree - 1 {
            let v = basis(t, i, degree, &knots);
            prop_assert!(v.is_finite());
            prop_assert!(v >= -EPSILON && v <= 1.0 + EPSILON);
            prop_assert!((table.get(i) - v).abs() < EPSILON);
        }
    }

    #[test]
    fn scaled_knots_sample_flat_grid(
        (offset, scale) in knot_frame(),
        x in -10.0f64..10.0,
    ) {
        let point = DVec3::new(x, 1.0, -x);
        let ctrl = vec![vec![point; 3]; 3];
        let knots = clamped_knots(2, &[], offset, scale);
        let grid = sample_surface(&ctrl, &knots, &knots, 2, 4, 4).unwrap();
        for p in grid.points() {
            prop_assert!((*p - point).length() < 1e-9, "{:?} for knots {:?}", p, knots);
        }
    }

    #[test]
    fn flat_grid_reproduces_point(
        rows in 2usize..5,
        cols in 2usize..5,
        x in -10.0f64..10.0,
        y in -10.0f64..10.0,
        z in -10.0f64..10.0,
    ) {
        let degree = 1;
        let point = DVec3::new(x, y, z);
        let ctrl = vec![vec![point; cols]; rows];
        let knots_u = KnotVector::clamped_uniform(rows, degree).unwrap();
        let knots_v = KnotVector::clamped_uniform(cols, degree).unwrap();
        let grid = sample_surface(&ctrl, knots_u.as_slice(), knots_v.as_slice(), degree, 6, 5).unwrap();
        for p in grid.points() {
            prop_assert!((*p - point).length() < 1e-9);
        }
    }
}

#[test]
fn degree_zero_indicator_for_every_span() {
    let knots = [0.0, 0.5, 0.5, 1.0, 2.0];
    for i in 0..knots.len() - 1 {
        for k in 0..=40 {
            let t = -0.25 + k as f64 * 0.0625;
            let inside = knots[i] <= t && t < knots[i + 1];
            let at_end = t == 2.0 && i == 3;
            let expected = if inside || at_end { 1.0 } else { 0.0 };
            assert_eq!(basis(t, i, 0, &knots), expected, "i={} t={}", i, t);
        }
    }
}

#[test]
fn linear_two_point_scenario() {
    let curve = BSplineCurve::new(
        1,
        KnotVector::new(vec![0.0, 0.0, 1.0, 1.0]).unwrap(),
        vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0)],
    )
    .unwrap();
    let p = curve.point_at_recursive(0.25);
    assert!((p - DVec2::new(0.25, 0.25)).length() < 1e-12);
    assert!((curve.point_at(0.25) - p).length() < 1e-12);
}

#[test]
fn flat_3x3_grid_stays_in_plane() {
    let ctrl: Vec<Vec<Point3>> = (0..3)
        .map(|k| {
            (0..3)
                .map(|l| DVec3::new(k as f64 - 1.0, l as f64 - 1.0, 0.0))
                .collect()
        })
        .collect();
    let u = [-1.0, -1.0, -1.0, 0.0, 1.0, 1.0, 1.0];
    let v = [0.0, 0.0, 0.0, 2.0, 2.0, 2.0];
    let err = sample_surface(&ctrl, &u, &v, 2, 11, 9).unwrap_err();
    assert!(matches!(err, SketchError::InvalidParameterization(_)));

    let u = [-1.0, -1.0, -1.0, 1.0, 1.0, 1.0];
    let grid = sample_surface(&ctrl, &u, &v, 2, 11, 9).unwrap();
    assert_eq!((grid.u_count(), grid.v_count()), (11, 9));
    assert!(grid.points().iter().all(|p| p.z == 0.0));
}

#[test]
fn clamped_curve_samples_cover_domain() {
    let points = vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 3.0),
        DVec2::new(3.0, 3.0),
        DVec2::new(4.0, 0.0),
    ];
    let curve = BSplineCurve::clamped(3, points.clone()).unwrap();
    let samples = curve.sample(101).unwrap();
    assert_eq!(samples.len(), 101);
    assert!((samples[0] - points[0]).length() < 1e-12);
    assert!((samples[100] - points[3]).length() < 1e-12);
}
