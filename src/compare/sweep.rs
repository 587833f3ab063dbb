// SPDX-License-Identifier: MPL-2.0
//! Auto-sweep direction state machine.
//!
//! The sweep moves the divider back and forth between the configured bounds.
//! Direction changes are decided on the divider position rounded to
//! [`SWEEP_ROUNDING_DECIMALS`] places, so accumulated float error from the
//! fixed step never keeps the divider from registering a bound.

use crate::config::{SweepBounds, SWEEP_ROUNDING_DECIMALS, SWEEP_STEP};

/// Direction of the divider auto-sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepDirection {
    /// Divider moves right (position increases).
    #[default]
    Forward,
    /// Divider moves left (position decreases).
    Backward,
}

impl SweepDirection {
    /// Signed increment applied per tick in this direction.
    #[must_use]
    pub fn step(self) -> f32 {
        match self {
            SweepDirection::Forward => SWEEP_STEP,
            SweepDirection::Backward => -SWEEP_STEP,
        }
    }

    /// Returns the direction to use for the next step from `position`.
    ///
    /// At (or past) the start bound the sweep turns forward; at (or past) the
    /// end bound it turns backward; in between the current direction is kept.
    /// The start bound is checked first.
    ///
    /// Bounds are compared with `<=`/`>=` rather than equality so that bounds
    /// which are not a whole number of steps apart still turn the sweep
    /// around instead of letting the divider run past them. For bounds on the
    /// step grid (the defaults) both rules give the same sequence.
    #[must_use]
    pub fn next(self, position: f32, bounds: SweepBounds) -> Self {
        let rounded = round_to(position, SWEEP_ROUNDING_DECIMALS);
        let start = round_to(bounds.start(), SWEEP_ROUNDING_DECIMALS);
        let end = round_to(bounds.end(), SWEEP_ROUNDING_DECIMALS);

        if rounded <= start {
            SweepDirection::Forward
        } else if rounded >= end {
            SweepDirection::Backward
        } else {
            self
        }
    }
}

/// Rounds `value` to the given number of decimal places.
#[must_use]
pub fn round_to(value: f32, decimals: i32) -> f32 {
    let multiplier = 10_f32.powi(decimals);
    (value * multiplier).round() / multiplier
}
