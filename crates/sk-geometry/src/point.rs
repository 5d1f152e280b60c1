use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use sk_math::{DVec2, DVec3};

/// A point type that can be blended by basis weights.
pub trait ControlPoint:
    Copy
    + Debug
    + Default
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
{
    fn distance(self, other: Self) -> f64;
}

impl ControlPoint for DVec2 {
    fn distance(self, other: Self) -> f64 {
        DVec2::distance(self, other)
    }
}

impl ControlPoint for DVec3 {
    fn distance(self, other: Self) -> f64 {
        DVec3::distance(self, other)
    }
}
