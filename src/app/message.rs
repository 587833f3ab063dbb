// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::compare;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Compare(compare::Message),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `COMPARE_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// "Before" image location (URL or file path).
    pub before: String,
    /// "After" image location (URL or file path).
    pub after: String,
    /// Forces the interactive mode regardless of the settings file.
    pub interactive: bool,
    /// Hides the "Before"/"After" labels regardless of the settings file.
    pub hide_labels: bool,
}
