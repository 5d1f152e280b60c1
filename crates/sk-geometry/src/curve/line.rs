//! Line segment curve.

use serde::{Deserialize, Serialize};

use super::Curve;
use crate::point::ControlPoint;

/// A line segment from `start` to `end`, parameterized over `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line<P> {
    pub start: P,
    pub end: P,
}

impl<P: ControlPoint> Line<P> {
    pub fn new(start: P, end: P) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl<P: ControlPoint> Curve for Line<P> {
    type Point = P;

    fn point_at(&self, t: f64) -> P {
        self.start + (self.end - self.start) * t
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
