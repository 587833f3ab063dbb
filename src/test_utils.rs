// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's absolute-difference assertion,
//! which handles floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::compare::LoadedImage;

/// Tolerance for values produced by repeated sweep steps.
pub const SWEEP_EPSILON: f32 = 1e-4;

/// Builds a solid-color in-memory image of the given size.
#[must_use]
pub fn solid_image(width: u32, height: u32) -> LoadedImage {
    let pixels = vec![128_u8; (width as usize) * (height as usize) * 4];
    LoadedImage::from_rgba(width, height, pixels)
}
