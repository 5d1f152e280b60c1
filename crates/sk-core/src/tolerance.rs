/// Tolerances for geometric comparisons.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Knot spacing at or below which an interval counts as degenerate.
    /// Zero by default: repeated knots subtract to exactly 0, and any
    /// positive width is a real span whatever the scale of the vector.
    pub knot: f64,
}

impl Tolerance {
    pub const DEFAULT_KNOT: f64 = 0.0;

    pub fn new(knot: f64) -> Self {
        Self { knot }
    }

    /// Check if a knot difference is a zero-width interval
    pub fn is_degenerate_span(self, width: f64) -> bool {
        width.abs() <= self.knot
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KNOT)
    }
}
