//! Horizontal drag gestures
//!
//! Engines consume `GestureEvent`s. Where those come from is up to the host:
//! a platform swipe recognizer can emit them directly, or raw pointer samples
//! can be fed through `GestureTracker`, which treats touch and mouse input the
//! same way.

use serde::{Deserialize, Serialize};

/// Kind of pointer driving a gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Touch,
    Mouse,
}

/// Direction a released swipe travelled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Pointer moved left, revealing the next slide
    Left,
    /// Pointer moved right, revealing the previous slide
    Right,
}

impl SwipeDirection {
    /// Direction implied by a signed horizontal travel
    pub fn from_delta(delta_x: f32) -> Self {
        if delta_x < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    }

    /// +1 for `Left`, -1 for `Right`
    pub fn sign(&self) -> f32 {
        match self {
            SwipeDirection::Left => 1.0,
            SwipeDirection::Right => -1.0,
        }
    }

    /// Travel measured along this direction
    ///
    /// Positive when the pointer actually moved this way.
    pub fn net_travel(&self, delta_x: f32) -> f32 {
        -delta_x * self.sign()
    }
}

/// A drag update delivered to an engine
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GestureEvent {
    /// Pointer moved while pressed
    Move {
        /// Signed travel since the gesture began (positive = rightward)
        delta_x: f32,
        /// Width of the element being dragged
        element_width: f32,
    },
    /// Pointer lifted after a drag
    Release {
        delta_x: f32,
        element_width: f32,
        direction: SwipeDirection,
    },
}

impl GestureEvent {
    pub fn delta_x(&self) -> f32 {
        match *self {
            GestureEvent::Move { delta_x, .. } | GestureEvent::Release { delta_x, .. } => delta_x,
        }
    }

    pub fn element_width(&self) -> f32 {
        match *self {
            GestureEvent::Move { element_width, .. }
            | GestureEvent::Release { element_width, .. } => element_width,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ActiveDrag {
    origin_x: f32,
    element_width: f32,
    kind: PointerKind,
    /// Set once travel exceeds the minimum distance
    swiping: bool,
}

/// Turns raw pointer samples into `GestureEvent`s
#[derive(Clone, Debug)]
pub struct GestureTracker {
    /// Travel before a press counts as a swipe
    pub min_travel: f32,
    pub track_touch: bool,
    pub track_mouse: bool,
    active: Option<ActiveDrag>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self {
            min_travel: 10.0,
            track_touch: true,
            track_mouse: true,
            active: None,
        }
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum travel before a press counts as a swipe
    pub fn min_travel(mut self, min_travel: f32) -> Self {
        self.min_travel = min_travel.max(0.0);
        self
    }

    fn tracks(&self, kind: PointerKind) -> bool {
        match kind {
            PointerKind::Touch => self.track_touch,
            PointerKind::Mouse => self.track_mouse,
        }
    }

    /// Check whether a press is being tracked
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Pointer went down at `x` over an element `element_width` wide
    pub fn press(&mut self, x: f32, element_width: f32, kind: PointerKind) {
        if !self.tracks(kind) {
            return;
        }
        self.active = Some(ActiveDrag {
            origin_x: x,
            element_width,
            kind,
            swiping: false,
        });
    }

    /// Pointer moved to `x`
    ///
    /// Returns a `Move` once the drag has travelled at least `min_travel`.
    pub fn motion(&mut self, x: f32) -> Option<GestureEvent> {
        let min_travel = self.min_travel;
        let drag = self.active.as_mut()?;
        let delta_x = x - drag.origin_x;

        if !drag.swiping && delta_x.abs() < min_travel {
            return None;
        }
        drag.swiping = true;

        tracing::trace!("{:?} drag delta_x={:.1}", drag.kind, delta_x);
        Some(GestureEvent::Move {
            delta_x,
            element_width: drag.element_width,
        })
    }

    /// Pointer lifted at `x`
    ///
    /// Returns a `Release` only if the press turned into a swipe.
    pub fn lift(&mut self, x: f32) -> Option<GestureEvent> {
        let drag = self.active.take()?;
        let delta_x = x - drag.origin_x;

        if !drag.swiping && delta_x.abs() < self.min_travel {
            return None;
        }

        Some(GestureEvent::Release {
            delta_x,
            element_width: drag.element_width,
            direction: SwipeDirection::from_delta(delta_x),
        })
    }

    /// Drop the current press without emitting anything
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_signs() {
        assert_eq!(SwipeDirection::Left.sign(), 1.0);
        assert_eq!(SwipeDirection::Right.sign(), -1.0);
        assert_eq!(SwipeDirection::from_delta(-40.0), SwipeDirection::Left);
        assert_eq!(SwipeDirection::from_delta(40.0), SwipeDirection::Right);
    }

    #[test]
    fn test_net_travel_follows_direction() {
        assert_eq!(SwipeDirection::Left.net_travel(-120.0), 120.0);
        assert_eq!(SwipeDirection::Right.net_travel(90.0), 90.0);
        // Pointer moved against the reported direction
        assert_eq!(SwipeDirection::Left.net_travel(30.0), -30.0);
    }

    #[test]
    fn test_tracker_ignores_small_motion() {
        let mut tracker = GestureTracker::new();
        tracker.press(200.0, 300.0, PointerKind::Touch);

        assert_eq!(tracker.motion(195.0), None);
        assert_eq!(tracker.lift(196.0), None);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_tracker_emits_moves_and_release() {
        let mut tracker = GestureTracker::new();
        tracker.press(200.0, 300.0, PointerKind::Mouse);

        assert_eq!(
            tracker.motion(150.0),
            Some(GestureEvent::Move {
                delta_x: -50.0,
                element_width: 300.0
            })
        );
        // Once swiping, small deltas still report
        assert_eq!(tracker.motion(198.0).map(|e| e.delta_x()), Some(-2.0));

        assert_eq!(
            tracker.lift(100.0),
            Some(GestureEvent::Release {
                delta_x: -100.0,
                element_width: 300.0,
                direction: SwipeDirection::Left,
            })
        );
    }

    #[test]
    fn test_touch_and_mouse_are_uniform() {
        let run = |kind| {
            let mut tracker = GestureTracker::new();
            tracker.press(0.0, 100.0, kind);
            let moved = tracker.motion(60.0);
            let released = tracker.lift(80.0);
            (moved, released)
        };
        assert_eq!(run(PointerKind::Touch), run(PointerKind::Mouse));
    }

    #[test]
    fn test_untracked_pointer_kind() {
        let mut tracker = GestureTracker::new();
        tracker.track_mouse = false;
        tracker.press(0.0, 100.0, PointerKind::Mouse);

        assert!(!tracker.is_active());
        assert_eq!(tracker.motion(80.0), None);
    }
}
