//! Orthographic 2D projection between window pixels and logical coordinates.

use crate::Point2;
use serde::{Deserialize, Serialize};

/// An orthographic view volume in the style of `gluOrtho2D(left, right, bottom, top)`.
///
/// Window pixels have their origin at the top-left corner with y growing
/// downwards; logical coordinates have y growing upwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ortho2 {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Ortho2 {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Logical space equal to pixel space with y flipped: `(0, w) x (0, h)`.
    pub fn pixel_space(width: u32, height: u32) -> Self {
        Self::new(0.0, width as f64, 0.0, height as f64)
    }

    /// `[-half, half]` on both axes.
    pub fn symmetric(half: f64) -> Self {
        Self::new(-half, half, -half, half)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Map an integer window pixel to logical coordinates.
    pub fn pixel_to_logical(&self, x: i32, y: i32, width: u32, height: u32) -> Point2 {
        let fx = x as f64 / width.max(1) as f64;
        let fy = y as f64 / height.max(1) as f64;
        Point2::new(
            self.left + fx * self.width(),
            self.top - fy * self.height(),
        )
    }

    /// Map logical coordinates to (sub)pixel window coordinates.
    pub fn logical_to_pixel(&self, p: Point2, width: u32, height: u32) -> Point2 {
        let fx = (p.x - self.left) / self.width();
        let fy = (self.top - p.y) / self.height();
        Point2::new(fx * width as f64, fy * height as f64)
    }
}

impl Default for Ortho2 {
    /// The fixed-function default projection, `[-1, 1]` on both axes.
    fn default() -> Self {
        Self::symmetric(1.0)
    }
}
