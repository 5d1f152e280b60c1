//! Left-button pointer events derived from polled mouse state.

/// A pointer event in integer window pixels (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Pressed { x: i32, y: i32 },
    Moved { x: i32, y: i32 },
    Released { x: i32, y: i32 },
}

impl PointerEvent {
    pub fn position(&self) -> (i32, i32) {
        match *self {
            PointerEvent::Pressed { x, y } | PointerEvent::Moved { x, y } | PointerEvent::Released { x, y } => {
                (x, y)
            }
        }
    }
}

/// Turns per-frame `(position, button down)` samples into edge events.
///
/// Motion is reported only while the button is held. Only the button state at
/// each sample is seen, so a press and release that both fall between two
/// samples produce no event; at the windowed 60 Hz poll that is a click
/// shorter than one frame.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    down: bool,
    last: Option<(i32, i32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Feed one sample. `position` is `None` when the cursor is outside the
    /// window; a release is still reported at the last known position.
    pub fn update(&mut self, position: Option<(f32, f32)>, down: bool) -> Option<PointerEvent> {
        let pos = position.map(|(x, y)| (x.floor() as i32, y.floor() as i32));
        let event = match (self.down, down, pos) {
            (false, true, Some((x, y))) => Some(PointerEvent::Pressed { x, y }),
            (true, true, Some((x, y))) if self.last != Some((x, y)) => Some(PointerEvent::Moved { x, y }),
            (true, false, _) => pos
                .or(self.last)
                .map(|(x, y)| PointerEvent::Released { x, y }),
            _ => None,
        };
        // A press outside the window is not a press.
        self.down = down && (self.down || pos.is_some());
        if pos.is_some() {
            self.last = pos;
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_move_release() {
        let mut t = PointerTracker::new();
        assert_eq!(t.update(Some((5.0, 5.0)), false), None);
        assert_eq!(t.update(Some((10.4, 20.9)), true), Some(PointerEvent::Pressed { x: 10, y: 20 }));
        assert!(t.is_down());
        assert_eq!(t.update(Some((10.0, 20.0)), true), None);
        assert_eq!(t.update(Some((12.0, 21.0)), true), Some(PointerEvent::Moved { x: 12, y: 21 }));
        assert_eq!(t.update(Some((12.0, 21.0)), false), Some(PointerEvent::Released { x: 12, y: 21 }));
        assert!(!t.is_down());
    }

    #[test]
    fn test_hover_is_ignored() {
        let mut t = PointerTracker::new();
        for k in 0..5 {
            assert_eq!(t.update(Some((k as f32, 0.0)), false), None);
        }
    }

    #[test]
    fn test_release_outside_window() {
        let mut t = PointerTracker::new();
        t.update(Some((3.0, 4.0)), true);
        assert_eq!(t.update(None, true), None);
        assert_eq!(t.update(None, false), Some(PointerEvent::Released { x: 3, y: 4 }));
    }

    #[test]
    fn test_click_between_samples_is_not_seen() {
        let mut t = PointerTracker::new();
        assert_eq!(t.update(Some((2.0, 2.0)), false), None);
        // Button went down and up again before this sample.
        assert_eq!(t.update(Some((2.0, 2.0)), false), None);
        assert!(!t.is_down());
        assert_eq!(t.update(Some((2.0, 2.0)), true), Some(PointerEvent::Pressed { x: 2, y: 2 }));
    }

    #[test]
    fn test_press_outside_window_ignored() {
        let mut t = PointerTracker::new();
        assert_eq!(t.update(None, true), None);
        assert!(!t.is_down());
        assert_eq!(t.update(Some((1.0, 1.0)), true), Some(PointerEvent::Pressed { x: 1, y: 1 }));
    }
}
