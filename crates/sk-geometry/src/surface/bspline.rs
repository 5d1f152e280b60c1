//! Tensor-product B-spline surfaces and the uniform grid sampler.

use log::debug;
use serde::{Deserialize, Serialize};
use sk_core::traits::Validate;
use sk_core::{Result, SketchError, Tolerance};
use sk_math::{DVec3, Point3};

use super::{Surface, SurfaceGrid};
use crate::nurbs::{deboor, BasisTable, KnotVector};

/// Sample a tensor-product B-spline surface on a uniform `v_num × u_num` grid.
///
/// Sample `(i, j)` sits at `u = U.front + i * (U.back - U.front) / (u_num - 1)`
/// and the matching `v`; its value is
/// `Σ_k Σ_l N_{k,p}(u; U) · N_{l,p}(v; V) · ctrl[k][l]`.
///
/// Fails with `InvalidParameterization` for an empty or ragged control grid,
/// a knot vector whose length is not `count + degree + 1`, decreasing knots,
/// an empty parameter range, or fewer than 2 samples in either direction.
pub fn sample_surface(
    control_points: &[Vec<Point3>],
    knots_u: &[f64],
    knots_v: &[f64],
    degree: usize,
    u_num: usize,
    v_num: usize,
) -> Result<SurfaceGrid> {
    if u_num < 2 || v_num < 2 {
        return Err(SketchError::invalid(format!(
            "sample counts must be >= 2, got u_num={} v_num={}",
            u_num, v_num
        )));
    }
    let (rows, cols) = grid_shape(control_points)?;
    let knots_u = checked_knots("U", knots_u, rows, degree)?;
    let knots_v = checked_knots("V", knots_v, cols, degree)?;

    let u_table = tabulate(&knots_u, degree, u_num);
    let v_table = tabulate(&knots_v, degree, v_num);

    let mut points = Vec::with_capacity(u_num * v_num);
    for bv in &v_table {
        for bu in &u_table {
            let mut point = DVec3::ZERO;
            for (k, row) in control_points.iter().enumerate() {
                let wu = bu.get(k);
                if wu == 0.0 {
                    continue;
                }
                for (l, &cp) in row.iter().enumerate() {
                    point += wu * bv.get(l) * cp;
                }
            }
            points.push(point);
        }
    }

    debug!(
        "sampled {}x{} surface from {}x{} control grid (degree {})",
        u_num, v_num, rows, cols, degree
    );
    SurfaceGrid::from_points(u_num, v_num, points)
}

/// Rows and columns of a rectangular, non-empty control grid.
fn grid_shape(control_points: &[Vec<Point3>]) -> Result<(usize, usize)> {
    let rows = control_points.len();
    let cols = control_points.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return Err(SketchError::invalid("control grid is empty"));
    }
    if let Some(k) = control_points.iter().position(|r| r.len() != cols) {
        return Err(SketchError::invalid(format!(
            "control grid is ragged: row {} has {} points, expected {}",
            k,
            control_points[k].len(),
            cols
        )));
    }
    Ok((rows, cols))
}

fn checked_knots(name: &str, knots: &[f64], count: usize, degree: usize) -> Result<KnotVector> {
    let kv = KnotVector::new(knots.to_vec())
        .map_err(|e| SketchError::invalid(format!("knot vector {}: {}", name, e)))?;
    if count < degree + 1 {
        return Err(SketchError::invalid(format!(
            "degree {} needs at least {} control points along {}, got {}",
            degree,
            degree + 1,
            name,
            count
        )));
    }
    if kv.len() != count + degree + 1 {
        return Err(SketchError::invalid(format!(
            "knot vector {} must have {} knots for {} control points of degree {}, got {}",
            name,
            count + degree + 1,
            count,
            degree,
            kv.len()
        )));
    }
    if kv.first() >= kv.last() || Tolerance::default().is_degenerate_span(kv.last() - kv.first()) {
        return Err(SketchError::invalid(format!(
            "knot vector {} spans an empty range [{}, {}]",
            name,
            kv.first(),
            kv.last()
        )));
    }
    Ok(kv)
}

/// Basis tables at `samples` uniform parameters over `[first, last]` knot.
fn tabulate(knots: &KnotVector, degree: usize, samples: usize) -> Vec<BasisTable> {
    let (lo, hi) = (knots.first(), knots.last());
    let step = (hi - lo) / (samples - 1) as f64;
    (0..samples)
        .map(|i| {
            let t = if i == samples - 1 { hi } else { lo + step * i as f64 };
            BasisTable::evaluate(knots.as_slice(), degree, t)
        })
        .collect()
}

/// A B-spline surface defined by degrees, knot vectors, and a 2D grid of control points.
///
/// `control_points[k][l]` is the control point at row `k` (u-direction) and column `l` (v-direction).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BSplineSurface {
    degree_u: usize,
    degree_v: usize,
    knots_u: KnotVector,
    knots_v: KnotVector,
    control_points: Vec<Vec<Point3>>,
}

impl BSplineSurface {
    pub fn new(
        degree_u: usize,
        degree_v: usize,
        knots_u: KnotVector,
        knots_v: KnotVector,
        control_points: Vec<Vec<Point3>>,
    ) -> Result<Self> {
        let surface = Self {
            degree_u,
            degree_v,
            knots_u,
            knots_v,
            control_points,
        };
        surface.validate()?;
        Ok(surface)
    }

    /// Clamped surface with uniform interior knots in both directions.
    pub fn clamped(degree_u: usize, degree_v: usize, control_points: Vec<Vec<Point3>>) -> Result<Self> {
        let (rows, cols) = grid_shape(&control_points)?;
        let knots_u = KnotVector::clamped_uniform(rows, degree_u)?;
        let knots_v = KnotVector::clamped_uniform(cols, degree_v)?;
        Self::new(degree_u, degree_v, knots_u, knots_v, control_points)
    }

    pub fn control_points(&self) -> &[Vec<Point3>] {
        &self.control_points
    }
}

impl Validate for BSplineSurface {
    fn validate(&self) -> Result<()> {
        let (rows, cols) = grid_shape(&self.control_points)?;
        self.knots_u.check_fits(rows, self.degree_u)?;
        self.knots_v.check_fits(cols, self.degree_v)
    }
}

impl Surface for BSplineSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (u0, u1) = self.domain_u();
        let (v0, v1) = self.domain_v();
        deboor::surface_point(
            self.degree_u,
            self.degree_v,
            self.knots_u.as_slice(),
            self.knots_v.as_slice(),
            &self.control_points,
            u.clamp(u0, u1),
            v.clamp(v0, v1),
        )
    }

    fn domain_u(&self) -> (f64, f64) {
        self.knots_u.domain(self.degree_u)
    }

    fn domain_v(&self) -> (f64, f64) {
        self.knots_v.domain(self.degree_v)
    }
}
