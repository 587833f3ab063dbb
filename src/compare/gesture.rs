// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition for the comparison widget.
//!
//! Raw pointer, touch and wheel input is turned into the high-level gestures
//! the view state understands: divider drags, pans, pinches and double taps.
//! The recognizer is pure; timestamps are passed in so tests can drive it
//! deterministically.

use crate::config::{
    DIVIDER_HIT_SLOP, DOUBLE_TAP_THRESHOLD_MS, TAP_MOVEMENT_THRESHOLD, WHEEL_GESTURE_IDLE_MS,
    WHEEL_ZOOM_FACTOR,
};
use iced::{Point, Vector};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Time threshold for double-tap detection.
const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(DOUBLE_TAP_THRESHOLD_MS);

/// A wheel zoom gesture ends after this long without wheel input.
const WHEEL_GESTURE_IDLE: Duration = Duration::from_millis(WHEEL_GESTURE_IDLE_MS);

/// Input events in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// Primary mouse button pressed inside the widget.
    CursorPressed(Point),
    /// Cursor moved while a button is held.
    CursorMoved(Point),
    CursorReleased,
    /// Cursor left the window.
    CursorLeft,
    FingerPressed { id: u64, position: Point },
    FingerMoved { id: u64, position: Point },
    FingerLifted { id: u64 },
    /// Vertical scroll in lines; positive zooms in.
    Wheel { lines: f32 },
}

/// Recognized gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Divider follows the pointer at `x` (widget-local).
    DividerDragged { x: f32 },
    /// Cumulative translation since the pan started.
    PanChanged(Vector),
    PanEnded,
    /// Cumulative magnification since the pinch started.
    PinchChanged(f32),
    PinchEnded,
    DoubleTapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Tracking {
    #[default]
    Idle,
    Divider,
    Pan {
        origin: Point,
    },
    Pinch {
        initial_distance: f32,
    },
}

/// A press that may still turn out to be a tap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingTap {
    at: Instant,
    position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct WheelGesture {
    multiplier: f32,
    last_event: Instant,
}

/// Stateful recognizer for one widget.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    tracking: Tracking,
    /// Current press, while it has not moved far enough to be a drag.
    pending_tap: Option<PendingTap>,
    /// Press time of the last completed tap.
    last_tap: Option<Instant>,
    fingers: BTreeMap<u64, Point>,
    wheel: Option<WheelGesture>,
}

impl GestureRecognizer {
    /// Feeds one input event and returns the gestures it produces.
    ///
    /// `divider_x` is the current divider location in widget-local pixels,
    /// used to decide whether a press grabs the divider or starts a pan.
    pub fn feed(&mut self, input: RawInput, divider_x: f32, now: Instant) -> Vec<Gesture> {
        match input {
            RawInput::CursorPressed(position) => self.press(position, divider_x, now),
            RawInput::CursorMoved(position) => self.motion(position),
            RawInput::CursorReleased => {
                self.complete_tap();
                self.release()
            }
            RawInput::CursorLeft => {
                self.cancel_tap();
                self.release()
            }
            RawInput::FingerPressed { id, position } => {
                self.fingers.insert(id, position);
                match self.fingers.len() {
                    1 => self.press(position, divider_x, now),
                    2 => self.begin_pinch(),
                    _ => Vec::new(),
                }
            }
            RawInput::FingerMoved { id, position } => {
                if !self.fingers.contains_key(&id) {
                    return Vec::new();
                }
                self.fingers.insert(id, position);
                match self.tracking {
                    Tracking::Pinch { initial_distance } => self
                        .finger_distance()
                        .map(|distance| vec![Gesture::PinchChanged(distance / initial_distance)])
                        .unwrap_or_default(),
                    _ if self.fingers.len() == 1 => self.motion(position),
                    _ => Vec::new(),
                }
            }
            RawInput::FingerLifted { id } => {
                if self.fingers.remove(&id).is_none() {
                    return Vec::new();
                }
                match self.tracking {
                    Tracking::Pinch { .. } => {
                        self.tracking = Tracking::Idle;
                        vec![Gesture::PinchEnded]
                    }
                    _ if self.fingers.is_empty() => {
                        self.complete_tap();
                        self.release()
                    }
                    _ => Vec::new(),
                }
            }
            RawInput::Wheel { lines } => self.wheel(lines, now),
        }
    }

    /// Ends a wheel zoom gesture that has been idle long enough.
    pub fn poll_idle(&mut self, now: Instant) -> Option<Gesture> {
        let wheel = self.wheel?;
        if now.saturating_duration_since(wheel.last_event) >= WHEEL_GESTURE_IDLE {
            self.wheel = None;
            Some(Gesture::PinchEnded)
        } else {
            None
        }
    }

    /// Whether a wheel zoom gesture is waiting to be ended.
    #[must_use]
    pub fn wheel_active(&self) -> bool {
        self.wheel.is_some()
    }

    /// Whether a drag, pan or pinch is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking != Tracking::Idle
    }

    /// Forgets any gesture in progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn press(&mut self, position: Point, divider_x: f32, now: Instant) -> Vec<Gesture> {
        let mut gestures = Vec::new();

        let is_double_tap = self
            .last_tap
            .is_some_and(|t| now.saturating_duration_since(t) < DOUBLE_TAP_THRESHOLD);
        if is_double_tap {
            // Reset to avoid triple-tap
            self.last_tap = None;
            self.pending_tap = None;
            gestures.push(Gesture::DoubleTapped);
        } else {
            self.pending_tap = Some(PendingTap { at: now, position });
        }

        if (position.x - divider_x).abs() <= DIVIDER_HIT_SLOP {
            self.tracking = Tracking::Divider;
            gestures.push(Gesture::DividerDragged { x: position.x });
        } else {
            self.tracking = Tracking::Pan { origin: position };
        }

        gestures
    }

    fn motion(&mut self, position: Point) -> Vec<Gesture> {
        let dragged = self
            .pending_tap
            .is_some_and(|tap| tap.position.distance(position) >= TAP_MOVEMENT_THRESHOLD);
        if dragged {
            self.cancel_tap();
        }

        match self.tracking {
            Tracking::Divider => vec![Gesture::DividerDragged { x: position.x }],
            Tracking::Pan { origin } => vec![Gesture::PanChanged(position - origin)],
            Tracking::Idle | Tracking::Pinch { .. } => Vec::new(),
        }
    }

    fn release(&mut self) -> Vec<Gesture> {
        let previous = std::mem::take(&mut self.tracking);
        self.fingers.clear();
        match previous {
            Tracking::Pan { .. } => vec![Gesture::PanEnded],
            Tracking::Pinch { .. } => vec![Gesture::PinchEnded],
            Tracking::Idle | Tracking::Divider => Vec::new(),
        }
    }

    /// A release that ends an unmoved press arms the double-tap window.
    fn complete_tap(&mut self) {
        if let Some(tap) = self.pending_tap.take() {
            self.last_tap = Some(tap.at);
        }
    }

    fn cancel_tap(&mut self) {
        self.pending_tap = None;
        self.last_tap = None;
    }

    fn begin_pinch(&mut self) -> Vec<Gesture> {
        self.cancel_tap();
        let mut gestures = Vec::new();
        if let Tracking::Pan { .. } = self.tracking {
            gestures.push(Gesture::PanEnded);
        }
        // Fingers placed on top of each other still need a usable baseline.
        let initial_distance = self.finger_distance().unwrap_or(1.0).max(1.0);
        self.tracking = Tracking::Pinch { initial_distance };
        gestures
    }

    fn finger_distance(&self) -> Option<f32> {
        let mut points = self.fingers.values();
        let first = points.next()?;
        let second = points.next()?;
        Some(first.distance(*second))
    }

    fn wheel(&mut self, lines: f32, now: Instant) -> Vec<Gesture> {
        if !lines.is_finite() || lines == 0.0 {
            return Vec::new();
        }
        let previous = self.wheel.map_or(1.0, |wheel| wheel.multiplier);
        let multiplier = previous * WHEEL_ZOOM_FACTOR.powf(lines);
        self.wheel = Some(WheelGesture {
            multiplier,
            last_event: now,
        });
        vec![Gesture::PinchChanged(multiplier)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const DIVIDER_X: f32 = 200.0;

    fn feed(recognizer: &mut GestureRecognizer, input: RawInput, now: Instant) -> Vec<Gesture> {
        recognizer.feed(input, DIVIDER_X, now)
    }

    #[test]
    fn press_near_divider_starts_divider_drag() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();

        let gestures = feed(
            &mut recognizer,
            RawInput::CursorPressed(Point::new(210.0, 50.0)),
            now,
        );
        assert_eq!(gestures, vec![Gesture::DividerDragged { x: 210.0 }]);

        let gestures = feed(
            &mut recognizer,
            RawInput::CursorMoved(Point::new(320.0, 60.0)),
            now,
        );
        assert_eq!(gestures, vec![Gesture::DividerDragged { x: 320.0 }]);

        let gestures = feed(&mut recognizer, RawInput::CursorReleased, now);
        assert!(gestures.is_empty());
        assert!(!recognizer.is_tracking());
    }

    #[test]
    fn press_away_from_divider_pans() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();

        let gestures = feed(
            &mut recognizer,
            RawInput::CursorPressed(Point::new(20.0, 20.0)),
            now,
        );
        assert!(gestures.is_empty());

        let gestures = feed(
            &mut recognizer,
            RawInput::CursorMoved(Point::new(35.0, 10.0)),
            now,
        );
        assert_eq!(gestures, vec![Gesture::PanChanged(Vector::new(15.0, -10.0))]);

        let gestures = feed(&mut recognizer, RawInput::CursorReleased, now);
        assert_eq!(gestures, vec![Gesture::PanEnded]);
    }

    #[test]
    fn cursor_leaving_window_ends_pan() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();
        feed(
            &mut recognizer,
            RawInput::CursorPressed(Point::new(20.0, 20.0)),
            now,
        );

        let gestures = feed(&mut recognizer, RawInput::CursorLeft, now);
        assert_eq!(gestures, vec![Gesture::PanEnded]);
    }

    #[test]
    fn motion_without_press_is_ignored() {
        let mut recognizer = GestureRecognizer::default();
        let gestures = feed(
            &mut recognizer,
            RawInput::CursorMoved(Point::new(10.0, 10.0)),
            Instant::now(),
        );
        assert!(gestures.is_empty());
    }

    #[test]
    fn two_quick_presses_are_a_double_tap() {
        let mut recognizer = GestureRecognizer::default();
        let start = Instant::now();
        let point = Point::new(20.0, 20.0);

        feed(&mut recognizer, RawInput::CursorPressed(point), start);
        feed(&mut recognizer, RawInput::CursorReleased, start);
        let gestures = feed(
            &mut recognizer,
            RawInput::CursorPressed(point),
            start + Duration::from_millis(200),
        );

        assert_eq!(gestures, vec![Gesture::DoubleTapped]);
    }

    #[test]
    fn slow_presses_are_not_a_double_tap() {
        let mut recognizer = GestureRecognizer::default();
        let start = Instant::now();
        let point = Point::new(20.0, 20.0);

        feed(&mut recognizer, RawInput::CursorPressed(point), start);
        feed(&mut recognizer, RawInput::CursorReleased, start);
        let gestures = feed(
            &mut recognizer,
            RawInput::CursorPressed(point),
            start + Duration::from_millis(500),
        );

        assert!(gestures.is_empty());
    }

    #[test]
    fn triple_press_yields_single_double_tap() {
        let mut recognizer = GestureRecognizer::default();
        let start = Instant::now();
        let point = Point::new(20.0, 20.0);
        let mut taps = 0;

        for i in 0..3 {
            let gestures = feed(
                &mut recognizer,
                RawInput::CursorPressed(point),
                start + Duration::from_millis(100 * i),
            );
            taps += gestures
                .iter()
                .filter(|g| **g == Gesture::DoubleTapped)
                .count();
            feed(&mut recognizer, RawInput::CursorReleased, start);
        }

        assert_eq!(taps, 1);
    }

    #[test]
    fn pan_then_quick_press_is_not_a_double_tap() {
        let mut recognizer = GestureRecognizer::default();
        let start = Instant::now();

        feed(
            &mut recognizer,
            RawInput::CursorPressed(Point::new(20.0, 20.0)),
            start,
        );
        feed(
            &mut recognizer,
            RawInput::CursorMoved(Point::new(80.0, 20.0)),
            start,
        );
        feed(&mut recognizer, RawInput::CursorReleased, start);
        let gestures = feed(
            &mut recognizer,
            RawInput::CursorPressed(Point::new(80.0, 20.0)),
            start + Duration::from_millis(100),
        );

        assert!(gestures.is_empty());
        assert!(recognizer.is_tracking());
    }

    #[test]
    fn divider_drags_in_quick_succession_are_not_a_double_tap() {
        let mut recognizer = GestureRecognizer::default();
        let start = Instant::now();

        for i in 0..2 {
            let gestures = feed(
                &mut recognizer,
                RawInput::CursorPressed(Point::new(DIVIDER_X, 50.0)),
                start + Duration::from_millis(100 * i),
            );
            assert!(!gestures.contains(&Gesture::DoubleTapped));
            feed(
                &mut recognizer,
                RawInput::CursorMoved(Point::new(DIVIDER_X + 40.0, 50.0)),
                start,
            );
            feed(&mut recognizer, RawInput::CursorReleased, start);
        }
    }

    #[test]
    fn small_jitter_still_counts_as_tap() {
        let mut recognizer = GestureRecognizer::default();
        let start = Instant::now();
        let point = Point::new(20.0, 20.0);

        feed(&mut recognizer, RawInput::CursorPressed(point), start);
        feed(
            &mut recognizer,
            RawInput::CursorMoved(Point::new(23.0, 21.0)),
            start,
        );
        feed(&mut recognizer, RawInput::CursorReleased, start);
        let gestures = feed(
            &mut recognizer,
            RawInput::CursorPressed(point),
            start + Duration::from_millis(150),
        );

        assert_eq!(gestures, vec![Gesture::DoubleTapped]);
    }

    #[test]
    fn press_left_unreleased_does_not_arm_double_tap() {
        let mut recognizer = GestureRecognizer::default();
        let start = Instant::now();
        let point = Point::new(20.0, 20.0);

        feed(&mut recognizer, RawInput::CursorPressed(point), start);
        feed(&mut recognizer, RawInput::CursorLeft, start);
        let gestures = feed(
            &mut recognizer,
            RawInput::CursorPressed(point),
            start + Duration::from_millis(100),
        );

        assert!(gestures.is_empty());
    }

    #[test]
    fn second_finger_turns_pan_into_pinch() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();

        feed(
            &mut recognizer,
            RawInput::FingerPressed {
                id: 1,
                position: Point::new(10.0, 100.0),
            },
            now,
        );
        let gestures = feed(
            &mut recognizer,
            RawInput::FingerPressed {
                id: 2,
                position: Point::new(110.0, 100.0),
            },
            now,
        );
        assert_eq!(gestures, vec![Gesture::PanEnded]);

        let gestures = feed(
            &mut recognizer,
            RawInput::FingerMoved {
                id: 2,
                position: Point::new(160.0, 100.0),
            },
            now,
        );
        assert_eq!(gestures.len(), 1);
        match gestures[0] {
            Gesture::PinchChanged(multiplier) => assert_abs_diff_eq!(multiplier, 1.5),
            other => panic!("expected pinch, got {other:?}"),
        }

        let gestures = feed(&mut recognizer, RawInput::FingerLifted { id: 1 }, now);
        assert_eq!(gestures, vec![Gesture::PinchEnded]);

        // The remaining finger does not resume a pan.
        let gestures = feed(
            &mut recognizer,
            RawInput::FingerMoved {
                id: 2,
                position: Point::new(170.0, 100.0),
            },
            now,
        );
        assert!(gestures.is_empty());
    }

    #[test]
    fn single_finger_behaves_like_cursor() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();

        feed(
            &mut recognizer,
            RawInput::FingerPressed {
                id: 7,
                position: Point::new(20.0, 20.0),
            },
            now,
        );
        let gestures = feed(
            &mut recognizer,
            RawInput::FingerMoved {
                id: 7,
                position: Point::new(25.0, 30.0),
            },
            now,
        );
        assert_eq!(gestures, vec![Gesture::PanChanged(Vector::new(5.0, 10.0))]);

        let gestures = feed(&mut recognizer, RawInput::FingerLifted { id: 7 }, now);
        assert_eq!(gestures, vec![Gesture::PanEnded]);
    }

    #[test]
    fn wheel_accumulates_and_ends_when_idle() {
        let mut recognizer = GestureRecognizer::default();
        let start = Instant::now();

        let first = feed(&mut recognizer, RawInput::Wheel { lines: 1.0 }, start);
        let second = feed(&mut recognizer, RawInput::Wheel { lines: 1.0 }, start);
        assert_eq!(first, vec![Gesture::PinchChanged(WHEEL_ZOOM_FACTOR)]);
        match second[0] {
            Gesture::PinchChanged(multiplier) => {
                assert_abs_diff_eq!(multiplier, WHEEL_ZOOM_FACTOR * WHEEL_ZOOM_FACTOR);
            }
            other => panic!("expected pinch, got {other:?}"),
        }

        assert!(recognizer.wheel_active());
        assert_eq!(
            recognizer.poll_idle(start + Duration::from_millis(100)),
            None
        );
        assert_eq!(
            recognizer.poll_idle(start + Duration::from_millis(300)),
            Some(Gesture::PinchEnded)
        );
        assert!(!recognizer.wheel_active());
        assert_eq!(
            recognizer.poll_idle(start + Duration::from_millis(600)),
            None
        );
    }

    #[test]
    fn zero_wheel_delta_is_ignored() {
        let mut recognizer = GestureRecognizer::default();
        let gestures = feed(
            &mut recognizer,
            RawInput::Wheel { lines: 0.0 },
            Instant::now(),
        );
        assert!(gestures.is_empty());
        assert!(!recognizer.wheel_active());
    }

    #[test]
    fn reset_forgets_gesture() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();
        feed(
            &mut recognizer,
            RawInput::CursorPressed(Point::new(20.0, 20.0)),
            now,
        );
        feed(&mut recognizer, RawInput::Wheel { lines: 2.0 }, now);

        recognizer.reset();

        assert!(!recognizer.is_tracking());
        assert!(!recognizer.wheel_active());
        assert!(feed(&mut recognizer, RawInput::CursorReleased, now).is_empty());
    }
}
