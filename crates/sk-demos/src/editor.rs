//! Mouse-driven accumulation of B-spline control points.

use log::debug;
use sk_core::Result;
use sk_geometry::curve::{BSplineCurve, Curve};
use sk_math::{Ortho2, Point2};
use sk_render::PointerEvent;

/// Whether the left button is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Dragging,
}

/// Clamped cubic B-spline through points appended by pressing and dragging.
///
/// Each appended point rebuilds the knot vector and resamples the whole
/// curve once. Fewer than `DEGREE + 1` points yield an empty curve.
#[derive(Debug, Clone)]
pub struct CurveEditor {
    state: EditorState,
    view: Ortho2,
    width: u32,
    height: u32,
    control_points: Vec<Point2>,
    samples: Vec<Point2>,
    recomputes: usize,
}

impl CurveEditor {
    pub const DEGREE: usize = 3;
    pub const SAMPLES: usize = 101;

    /// Editor whose logical space is the window's pixel space, y up.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: EditorState::Idle,
            view: Ortho2::pixel_space(width, height),
            width,
            height,
            control_points: Vec::new(),
            samples: Vec::new(),
            recomputes: 0,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn view(&self) -> Ortho2 {
        self.view
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    /// The current curve samples, empty while the curve is undefined.
    pub fn samples(&self) -> &[Point2] {
        &self.samples
    }

    /// How many times the curve has been resampled.
    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }

    /// Apply a pointer event. Returns whether the curve changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match (self.state, event) {
            (_, PointerEvent::Pressed { x, y }) => {
                self.state = EditorState::Dragging;
                self.append(x, y);
                true
            }
            (EditorState::Dragging, PointerEvent::Moved { x, y }) => {
                self.append(x, y);
                true
            }
            (_, PointerEvent::Released { .. }) => {
                self.state = EditorState::Idle;
                false
            }
            (EditorState::Idle, PointerEvent::Moved { .. }) => false,
        }
    }

    fn append(&mut self, x: i32, y: i32) {
        let p = self.view.pixel_to_logical(x, y, self.width, self.height);
        self.control_points.push(p);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.recomputes += 1;
        match sample_curve(&self.control_points) {
            Ok(samples) => self.samples = samples,
            Err(e) => {
                debug!("curve undefined with {} points: {}", self.control_points.len(), e);
                self.samples.clear();
            }
        }
    }
}

/// Sample the clamped cubic through `points` at [`CurveEditor::SAMPLES`]
/// parameters spanning `[0, 1]`.
pub fn sample_curve(points: &[Point2]) -> Result<Vec<Point2>> {
    BSplineCurve::clamped(CurveEditor::DEGREE, points.to_vec())?.sample(CurveEditor::SAMPLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_appends_and_drags() {
        let mut ed = CurveEditor::new(800, 600);
        assert!(ed.handle(PointerEvent::Pressed { x: 100, y: 500 }));
        assert_eq!(ed.state(), EditorState::Dragging);
        assert_eq!(ed.control_points().len(), 1);
        assert!((ed.control_points()[0] - Point2::new(100.0, 100.0)).length() < 1e-9);

        assert!(ed.handle(PointerEvent::Moved { x: 120, y: 480 }));
        assert_eq!(ed.control_points().len(), 2);

        assert!(!ed.handle(PointerEvent::Released { x: 120, y: 480 }));
        assert_eq!(ed.state(), EditorState::Idle);
        assert!(!ed.handle(PointerEvent::Moved { x: 300, y: 300 }));
        assert_eq!(ed.control_points().len(), 2);
    }

    #[test]
    fn test_undefined_below_four_points() {
        let mut ed = CurveEditor::new(800, 600);
        for k in 0..3 {
            ed.handle(PointerEvent::Pressed { x: 100 * k, y: 300 });
            ed.handle(PointerEvent::Released { x: 100 * k, y: 300 });
            assert!(ed.samples().is_empty());
        }
        ed.handle(PointerEvent::Pressed { x: 400, y: 100 });
        assert_eq!(ed.samples().len(), CurveEditor::SAMPLES);
        assert_eq!(ed.recompute_count(), 4);
    }

    #[test]
    fn test_curve_interpolates_first_and_last() {
        let pts = [
            Point2::new(100.0, 100.0),
            Point2::new(200.0, 400.0),
            Point2::new(400.0, 450.0),
            Point2::new(600.0, 200.0),
            Point2::new(700.0, 300.0),
        ];
        let samples = sample_curve(&pts).unwrap();
        assert!((samples[0] - pts[0]).length() < 1e-9);
        assert!((samples[100] - pts[4]).length() < 1e-9);
    }
}
