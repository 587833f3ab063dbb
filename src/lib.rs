// SPDX-License-Identifier: MPL-2.0
//! `compare_lens` is a before/after image comparison widget built with the
//! Iced GUI framework.
//!
//! Two images are stacked and split by a draggable divider. The widget
//! supports pinch, wheel and double-click zoom, panning while zoomed and an
//! automatic sweep of the divider. A small demo application shows it with
//! localized labels and persisted settings.

pub mod app;
pub mod compare;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
mod test_utils;
