//! Cox–de Boor recursive basis evaluation.
//!
//! `basis` is the direct recursive definition. `BasisTable` evaluates every
//! basis function of every degree up to `p` at one parameter bottom-up, so each
//! `(i, q)` sub-result is computed once instead of once per recursive path.

use sk_core::Tolerance;

/// Evaluate the `i`-th B-spline basis function of degree `p` at `t`.
///
/// Zero-width knot spans contribute nothing (the 0/0 convention). When `t`
/// equals the final knot, the last non-degenerate span still counts as
/// containing it, so the basis does not vanish at the right end of a clamped
/// domain.
///
/// # Panics
/// Panics if `knots.len() < i + p + 2`. Use [`KnotVector::basis`] for a
/// checked call.
///
/// [`KnotVector::basis`]: super::KnotVector::basis
pub fn basis(t: f64, i: usize, p: usize, knots: &[f64]) -> f64 {
    basis_with_tolerance(t, i, p, knots, Tolerance::default())
}

/// [`basis`] with an explicit tolerance for degenerate knot spans.
pub fn basis_with_tolerance(t: f64, i: usize, p: usize, knots: &[f64], tol: Tolerance) -> f64 {
    if p == 0 {
        return step(t, i, knots, tol);
    }

    let a = ratio(t - knots[i], knots[i + p] - knots[i], tol);
    let b = ratio(knots[i + p + 1] - t, knots[i + p + 1] - knots[i + 1], tol);

    let mut value = 0.0;
    if a != 0.0 {
        value += a * basis_with_tolerance(t, i, p - 1, knots, tol);
    }
    if b != 0.0 {
        value += b * basis_with_tolerance(t, i + 1, p - 1, knots, tol);
    }
    value
}

/// Degree-0 basis: the indicator of `[knots[i], knots[i+1])`.
fn step(t: f64, i: usize, knots: &[f64], tol: Tolerance) -> f64 {
    let lo = knots[i];
    let hi = knots[i + 1];
    if lo <= t && t < hi {
        return 1.0;
    }
    // Right end of the domain belongs to the last non-degenerate span.
    let last = knots[knots.len() - 1];
    if t == last && hi == last && !tol.is_degenerate_span(hi - lo) {
        return 1.0;
    }
    0.0
}

/// `num / den`, or 0 when `den` spans a degenerate interval.
fn ratio(num: f64, den: f64, tol: Tolerance) -> f64 {
    if tol.is_degenerate_span(den) {
        0.0
    } else {
        num / den
    }
}

/// All basis functions of one degree evaluated at a single parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisTable {
    degree: usize,
    values: Vec<f64>,
}

impl BasisTable {
    /// Evaluate `N_{i,p}(t)` for every `i` the knot vector supports.
    ///
    /// Builds the triangle of lower-degree values in place: after step `q`,
    /// `values[i]` holds `N_{i,q}(t)`.
    pub fn evaluate(knots: &[f64], degree: usize, t: f64) -> Self {
        Self::evaluate_with_tolerance(knots, degree, t, Tolerance::default())
    }

    pub fn evaluate_with_tolerance(knots: &[f64], degree: usize, t: f64, tol: Tolerance) -> Self {
        let spans = knots.len().saturating_sub(1);
        if spans <= degree {
            return Self {
                degree,
                values: Vec::new(),
            };
        }

        let mut values: Vec<f64> = (0..spans).map(|i| step(t, i, knots, tol)).collect();

        for q in 1..=degree {
            for i in 0..spans - q {
                let a = ratio(t - knots[i], knots[i + q] - knots[i], tol);
                let b = ratio(knots[i + q + 1] - t, knots[i + q + 1] - knots[i + 1], tol);
                values[i] = a * values[i] + b * values[i + 1];
            }
            values.truncate(spans - q);
        }

        Self { degree, values }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// `N_{i,p}(t)`, zero for indices the knot vector does not support.
    pub fn get(&self, i: usize) -> f64 {
        self.values.get(i).copied().unwrap_or(0.0)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
