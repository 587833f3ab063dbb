// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Localized strings (the comparison labels, window title and status texts)
//! come from Fluent `.ftl` files embedded at build time.
//!
//! # Features
//!
//! - Locale resolved from CLI, config, or system settings
//! - Runtime language switching
//! - Fallback to the default locale when a translation is missing

pub mod fluent;

pub use fluent::I18n;
