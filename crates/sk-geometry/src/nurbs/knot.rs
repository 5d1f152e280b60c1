//! Knot vectors and the iterative (triangular table) basis evaluation.

use serde::{Deserialize, Serialize};
use sk_core::traits::Validate;
use sk_core::{Result, SketchError};

use super::basis::basis;

/// A non-decreasing sequence of knots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnotVector {
    knots: Vec<f64>,
}

impl KnotVector {
    /// Wrap `knots`, rejecting non-finite or decreasing sequences.
    pub fn new(knots: Vec<f64>) -> Result<Self> {
        let kv = Self { knots };
        kv.validate()?;
        Ok(kv)
    }

    /// Clamped knot vector over `[0, 1]` for `count` control points.
    ///
    /// The first and last knots repeat `degree + 1` times; interior knots are
    /// uniformly spaced.
    pub fn clamped_uniform(count: usize, degree: usize) -> Result<Self> {
        if count < degree + 1 {
            return Err(SketchError::invalid(format!(
                "degree {} needs at least {} control points, got {}",
                degree,
                degree + 1,
                count
            )));
        }

        let segments = count - degree;
        let mut knots = Vec::with_capacity(count + degree + 1);
        knots.extend(std::iter::repeat(0.0).take(degree + 1));
        knots.extend((1..segments).map(|j| j as f64 / segments as f64));
        knots.extend(std::iter::repeat(1.0).take(degree + 1));

        Ok(Self { knots })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.knots
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    pub fn first(&self) -> f64 {
        self.knots[0]
    }

    pub fn last(&self) -> f64 {
        self.knots[self.knots.len() - 1]
    }

    /// Valid parameter range `[U[p], U[len - p - 1]]` for degree `p`.
    pub fn domain(&self, degree: usize) -> (f64, f64) {
        (self.knots[degree], self.knots[self.knots.len() - degree - 1])
    }

    /// Check that this vector fits `count` control points of `degree`.
    pub fn check_fits(&self, count: usize, degree: usize) -> Result<()> {
        if count < degree + 1 {
            return Err(SketchError::invalid(format!(
                "degree {} needs at least {} control points, got {}",
                degree,
                degree + 1,
                count
            )));
        }
        let expected = count + degree + 1;
        if self.knots.len() != expected {
            return Err(SketchError::invalid(format!(
                "knot vector length must be n + p + 1 = {}, got {}",
                expected,
                self.knots.len()
            )));
        }
        let (lo, hi) = self.domain(degree);
        if lo >= hi {
            return Err(SketchError::invalid(format!(
                "empty parameter domain [{}, {}]",
                lo, hi
            )));
        }
        Ok(())
    }

    /// Checked Cox–de Boor evaluation of `N_{i,p}(t)`.
    pub fn basis(&self, t: f64, i: usize, p: usize) -> Result<f64> {
        if self.knots.len() < i + p + 2 {
            return Err(SketchError::invalid(format!(
                "basis N_{{{},{}}} needs {} knots, have {}",
                i,
                p,
                i + p + 2,
                self.knots.len()
            )));
        }
        Ok(basis(t, i, p, &self.knots))
    }
}

impl Validate for KnotVector {
    fn validate(&self) -> Result<()> {
        if self.knots.len() < 2 {
            return Err(SketchError::invalid(format!(
                "knot vector needs at least 2 knots, got {}",
                self.knots.len()
            )));
        }
        if let Some(bad) = self.knots.iter().find(|k| !k.is_finite()) {
            return Err(SketchError::invalid(format!("non-finite knot {}", bad)));
        }
        if let Some(w) = self.knots.windows(2).position(|w| w[1] < w[0]) {
            return Err(SketchError::invalid(format!(
                "knots must be non-decreasing: U[{}] = {} > U[{}] = {}",
                w,
                self.knots[w],
                w + 1,
                self.knots[w + 1]
            )));
        }
        Ok(())
    }
}

impl AsRef<[f64]> for KnotVector {
    fn as_ref(&self) -> &[f64] {
        &self.knots
    }
}

/// Find the knot span index for parameter `t` in the knot vector.
///
/// Returns the index `i` such that `knots[i] <= t < knots[i+1]`,
/// with special handling for the upper boundary.
///
/// # Arguments
/// * `degree` - Degree of the B-spline
/// * `knots` - The knot vector
/// * `n` - Number of control points minus 1
/// * `t` - Parameter value
pub fn find_span(degree: usize, knots: &[f64], n: usize, t: f64) -> usize {
    if t >= knots[n + 1] {
        return n;
    }
    if t <= knots[degree] {
        return degree;
    }

    let mut low = degree;
    let mut high = n + 1;
    let mut mid = (low + high) / 2;

    while t < knots[mid] || t >= knots[mid + 1] {
        if t < knots[mid] {
            high = mid;
        } else {
            low = mid;
        }
        mid = (low + high) / 2;
    }

    mid
}

/// Compute the non-vanishing basis functions at parameter `t`.
///
/// Returns `degree + 1` values `N_{span-degree,degree}(t)` through
/// `N_{span,degree}(t)`, built with the triangular scheme that reuses each
/// lower-degree value once.
pub fn basis_functions(degree: usize, knots: &[f64], span: usize, t: f64) -> Vec<f64> {
    let mut n = vec![0.0; degree + 1];
    let mut left = vec![0.0; degree + 1];
    let mut right = vec![0.0; degree + 1];

    n[0] = 1.0;

    for j in 1..=degree {
        left[j] = t - knots[span + 1 - j];
        right[j] = knots[span + j] - t;
        let mut saved = 0.0;

        for r in 0..j {
            let den = right[r + 1] + left[j - r];
            let temp = if den == 0.0 { 0.0 } else { n[r] / den };
            n[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }

        n[j] = saved;
    }

    n
}
