// SPDX-License-Identifier: MPL-2.0
//! Before/after image comparison widget.
//!
//! Two images are stacked; the "before" image is revealed left of a
//! draggable vertical divider. Users can zoom with a pinch, the mouse wheel
//! or a double click, and pan while zoomed. When animated, the divider sweeps
//! back and forth on its own and interactive gestures are disabled.
//!
//! # Modules
//!
//! - [`state`] - Interaction state and its reducers
//! - [`sweep`] - Auto-sweep direction state machine
//! - [`gesture`] - Raw input to gesture recognition
//! - [`source`] - Image sources and the asynchronous loader
//! - [`cache`] - Shared decoded-image cache
//! - [`component`] - Message/effect component tying everything together
//! - [`canvas`] - Rendering and input capture

pub mod cache;
pub mod canvas;
pub mod component;
pub mod gesture;
pub mod source;
pub mod state;
pub mod sweep;

pub use cache::{CacheConfig, CacheStats, ImageCache, SharedImageCache};
pub use component::{Effect, Message, Side, Slot, State, ViewContext};
pub use gesture::{Gesture, GestureRecognizer, RawInput};
pub use source::{ImageSource, LoadedImage};
pub use state::ViewState;
pub use sweep::SweepDirection;
