// SPDX-License-Identifier: MPL-2.0
//! Comparison view state and its reducers.
//!
//! [`ViewState`] is owned by one widget instance and mutated only through the
//! `on_*` reducers below, each of which maps one input event onto the state
//! while enforcing every clamp. None of them can fail: out-of-range input is
//! clamped or ignored, never rejected.

use super::sweep::SweepDirection;
use crate::config::{
    SweepBounds, DEFAULT_DIVIDER_POSITION, DOUBLE_TAP_ZOOM_SCALE, MAX_DIVIDER_POSITION,
    MAX_ZOOM_SCALE, MIN_DIVIDER_POSITION, MIN_ZOOM_SCALE, PINCH_SNAP_BACK_SCALE,
};
use iced::{Size, Vector};

/// Interaction state of a comparison widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Divider position as a fraction of the widget width.
    pub divider_position: f32,

    /// Current magnification (1 = un-zoomed).
    pub zoom_scale: f32,

    /// Pixel translation applied to both images while zoomed.
    pub pan_offset: Vector,

    /// Pan offset at the end of the previous pan gesture.
    pub last_committed_pan: Vector,

    /// Previous pinch multiplier sample of the gesture in progress.
    pub last_pinch_sample: f32,

    pub sweep_direction: SweepDirection,

    /// Whether the sweep ticker should be running.
    pub animation_active: bool,

    /// Largest natural size reported by either image.
    pub max_content_size: Size,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ViewState {
    /// Creates the initial state. `animated` comes from the widget configuration.
    #[must_use]
    pub fn new(animated: bool) -> Self {
        Self {
            divider_position: DEFAULT_DIVIDER_POSITION,
            zoom_scale: MIN_ZOOM_SCALE,
            pan_offset: Vector::ZERO,
            last_committed_pan: Vector::ZERO,
            last_pinch_sample: 1.0,
            sweep_direction: SweepDirection::Forward,
            animation_active: animated,
            max_content_size: Size::ZERO,
        }
    }

    /// Moves the divider under the pointer, keeping it within [0.1, 0.9].
    pub fn on_divider_drag(&mut self, pointer_x: f32, view_width: f32) {
        if view_width.is_nan() || view_width <= 0.0 {
            return;
        }
        let ratio = pointer_x / view_width;
        if ratio.is_nan() {
            return;
        }
        self.divider_position = ratio.clamp(MIN_DIVIDER_POSITION, MAX_DIVIDER_POSITION);
    }

    /// Applies an in-progress pan of `translation` relative to the last
    /// committed offset. Each axis is clamped so the zoomed content never
    /// reveals its edge.
    pub fn on_pan_changed(&mut self, translation: Vector, view_size: Size, zoom_scale: f32) {
        let candidate = self.last_committed_pan + translation;
        let horizontal = pan_bound(view_size.width, zoom_scale);
        let vertical = pan_bound(view_size.height, zoom_scale);

        self.pan_offset = Vector::new(
            clamp_axis(candidate.x, horizontal),
            clamp_axis(candidate.y, vertical),
        );
    }

    /// Commits the current pan offset at the end of a pan gesture.
    pub fn on_pan_ended(&mut self) {
        self.last_committed_pan = self.pan_offset;
    }

    /// Applies a cumulative pinch multiplier sample.
    ///
    /// Scales above the maximum are clamped to it. Scales that would drop
    /// below 1 are ignored mid-gesture (the zoom stays put) while the sample
    /// still advances; the gesture end is what snaps small zooms back.
    pub fn on_pinch_changed(&mut self, multiplier: f32) {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return;
        }
        let new_scale = self.zoom_scale * multiplier / self.last_pinch_sample;

        if (MIN_ZOOM_SCALE..=MAX_ZOOM_SCALE).contains(&new_scale) {
            self.zoom_scale = new_scale;
        } else if new_scale > MAX_ZOOM_SCALE {
            self.zoom_scale = MAX_ZOOM_SCALE;
        }

        self.last_pinch_sample = multiplier;
    }

    /// Settles the zoom at the end of a pinch: below 2x it snaps back to the
    /// un-zoomed state and drops any pan.
    pub fn on_pinch_ended(&mut self) {
        if self.zoom_scale < PINCH_SNAP_BACK_SCALE {
            self.reset_zoom();
        } else if self.zoom_scale > MAX_ZOOM_SCALE {
            self.zoom_scale = MAX_ZOOM_SCALE;
        }
        self.last_pinch_sample = 1.0;
    }

    /// Toggles between un-zoomed and 2x.
    pub fn on_double_tap(&mut self) {
        if self.zoom_scale == MIN_ZOOM_SCALE {
            self.zoom_scale = DOUBLE_TAP_ZOOM_SCALE;
        } else {
            self.reset_zoom();
        }
    }

    /// Advances the auto-sweep by one step.
    pub fn on_tick(&mut self, bounds: SweepBounds) {
        self.sweep_direction = self.sweep_direction.next(self.divider_position, bounds);
        self.divider_position += self.sweep_direction.step();
    }

    /// Records the natural size of a loaded image.
    pub fn measure_content(&mut self, observed: Size) {
        self.max_content_size = Size::new(
            self.max_content_size.width.max(observed.width),
            self.max_content_size.height.max(observed.height),
        );
    }

    /// Stops the sweep ticker.
    pub fn stop_animation(&mut self) {
        self.animation_active = false;
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom_scale > MIN_ZOOM_SCALE
    }

    fn reset_zoom(&mut self) {
        self.zoom_scale = MIN_ZOOM_SCALE;
        self.pan_offset = Vector::ZERO;
        self.last_committed_pan = Vector::ZERO;
    }
}

/// Largest pan distance along one axis of length `dimension` at `zoom_scale`.
#[must_use]
pub fn pan_bound(dimension: f32, zoom_scale: f32) -> f32 {
    ((dimension * zoom_scale - dimension) / 2.0).max(0.0)
}

fn clamp_axis(value: f32, bound: f32) -> f32 {
    if value.abs() > bound {
        bound.copysign(value)
    } else {
        value
    }
}
