// SPDX-License-Identifier: MPL-2.0
//! Shared visual building blocks.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and widget color scheme
//! - [`widgets`] - Canvas helpers (loading spinner)

pub mod design_tokens;
pub mod theming;
pub mod widgets;
