// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Divider**: Divider position bounds, thickness and knob geometry
//! - **Zoom**: Zoom scale bounds and gesture thresholds
//! - **Sweep**: Auto-animation bounds, step and cadence
//! - **Gestures**: Hit slop, double-tap window, wheel emulation
//! - **Loading**: Download and cache limits

// ==========================================================================
// Divider Defaults
// ==========================================================================

/// Divider position when the widget is created (fraction of width).
pub const DEFAULT_DIVIDER_POSITION: f32 = 0.5;

/// Lowest divider position reachable by dragging.
pub const MIN_DIVIDER_POSITION: f32 = 0.1;

/// Highest divider position reachable by dragging.
pub const MAX_DIVIDER_POSITION: f32 = 0.9;

/// Default divider bar thickness in logical pixels.
pub const DEFAULT_DIVIDER_THICKNESS: f32 = 2.0;

/// Minimum divider thickness.
pub const MIN_DIVIDER_THICKNESS: f32 = 0.5;

/// Maximum divider thickness.
pub const MAX_DIVIDER_THICKNESS: f32 = 32.0;

/// Diameter of the drag knob drawn on the divider.
pub const KNOB_DIAMETER: f32 = 37.0;

/// Default image corner radius.
pub const DEFAULT_CORNER_RADIUS: f32 = 0.0;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Un-zoomed scale.
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Maximum magnification.
pub const MAX_ZOOM_SCALE: f32 = 3.0;

/// Scale reached by a double tap from the un-zoomed state.
pub const DOUBLE_TAP_ZOOM_SCALE: f32 = 2.0;

/// A pinch that ends below this scale snaps back to un-zoomed.
pub const PINCH_SNAP_BACK_SCALE: f32 = 2.0;

// ==========================================================================
// Sweep (Auto-Animation) Defaults
// ==========================================================================

/// Default sweep start bound (fraction of width).
pub const DEFAULT_SWEEP_START: f32 = 0.05;

/// Default sweep end bound (fraction of width).
pub const DEFAULT_SWEEP_END: f32 = 0.95;

/// Divider increment applied on every sweep tick.
pub const SWEEP_STEP: f32 = 0.005;

/// Decimal places used when comparing the divider to the sweep bounds.
pub const SWEEP_ROUNDING_DECIMALS: i32 = 2;

/// Fixed cadence of the sweep ticker in milliseconds.
pub const SWEEP_TICK_INTERVAL_MS: u64 = 10;

/// Default animation duration in seconds. Carried in the configuration; the
/// sweep itself ticks at [`SWEEP_TICK_INTERVAL_MS`].
pub const DEFAULT_ANIMATION_DURATION_SECS: f64 = 2.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal distance from the divider within which a press grabs it.
pub const DIVIDER_HIT_SLOP: f32 = 24.0;

/// Two taps whose presses are closer than this are a double tap.
pub const DOUBLE_TAP_THRESHOLD_MS: u64 = 350;

/// Pointer travel beyond which a press is a drag rather than a tap.
pub const TAP_MOVEMENT_THRESHOLD: f32 = 10.0;

/// Zoom multiplier applied per wheel line.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;

/// Pixel-precise scroll deltas are converted to lines with this divisor.
pub const WHEEL_PIXELS_PER_LINE: f32 = 50.0;

/// A wheel zoom gesture ends after this long without wheel input.
pub const WHEEL_GESTURE_IDLE_MS: u64 = 250;

/// Polling cadence used to detect the end of a wheel gesture.
pub const WHEEL_IDLE_POLL_MS: u64 = 50;

/// Loading spinner animation cadence.
pub const SPINNER_TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Largest remote body accepted by the loader (64 MB).
pub const MAX_DOWNLOAD_BYTES: u64 = 64 * 1024 * 1024;

/// Maximum redirects followed when fetching a remote image.
pub const MAX_REDIRECTS: usize = 10;

/// Default decoded-image cache budget in bytes (128 MB).
pub const DEFAULT_IMAGE_CACHE_BYTES: usize = 128 * 1024 * 1024;

/// Default maximum number of cached images.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Divider validation
    assert!(MIN_DIVIDER_POSITION > 0.0);
    assert!(MAX_DIVIDER_POSITION < 1.0);
    assert!(MIN_DIVIDER_POSITION < DEFAULT_DIVIDER_POSITION);
    assert!(DEFAULT_DIVIDER_POSITION < MAX_DIVIDER_POSITION);
    assert!(MIN_DIVIDER_THICKNESS > 0.0);
    assert!(DEFAULT_DIVIDER_THICKNESS >= MIN_DIVIDER_THICKNESS);
    assert!(DEFAULT_DIVIDER_THICKNESS <= MAX_DIVIDER_THICKNESS);

    // Zoom validation
    assert!(MIN_ZOOM_SCALE == 1.0);
    assert!(MAX_ZOOM_SCALE > DOUBLE_TAP_ZOOM_SCALE);
    assert!(PINCH_SNAP_BACK_SCALE > MIN_ZOOM_SCALE);
    assert!(PINCH_SNAP_BACK_SCALE <= MAX_ZOOM_SCALE);

    // Sweep validation
    assert!(DEFAULT_SWEEP_START >= 0.0);
    assert!(DEFAULT_SWEEP_END <= 1.0);
    assert!(DEFAULT_SWEEP_START < DEFAULT_SWEEP_END);
    assert!(SWEEP_STEP > 0.0);
    assert!(SWEEP_TICK_INTERVAL_MS > 0);

    // Gesture validation
    assert!(WHEEL_ZOOM_FACTOR > 1.0);
    assert!(WHEEL_IDLE_POLL_MS < WHEEL_GESTURE_IDLE_MS);
    assert!(TAP_MOVEMENT_THRESHOLD > 0.0);

    // Loading validation
    assert!(DEFAULT_IMAGE_CACHE_ENTRIES > 0);
    assert!(DEFAULT_IMAGE_CACHE_BYTES > 0);
};
