//! Curve trait and implementations.

mod bezier;
mod bspline;
mod line;

use sk_core::{Result, SketchError};

use crate::point::ControlPoint;

pub use bezier::BezierCurve;
pub use bspline::BSplineCurve;
pub use line::Line;

/// A parametric curve in 2D or 3D space.
pub trait Curve: Send + Sync {
    type Point: ControlPoint;

    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Self::Point;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }

    /// `count` points at uniform parameter steps, both domain ends included.
    fn sample(&self, count: usize) -> Result<Vec<Self::Point>> {
        if count < 2 {
            return Err(SketchError::invalid(format!(
                "curve sample count must be >= 2, got {}",
                count
            )));
        }
        let (t0, t1) = self.domain();
        let step = (t1 - t0) / (count - 1) as f64;
        Ok((0..count)
            .map(|i| {
                // Pin the last sample so accumulated error never leaves the domain.
                let t = if i == count - 1 { t1 } else { t0 + step * i as f64 };
                self.point_at(t)
            })
            .collect())
    }
}
