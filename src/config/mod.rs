// SPDX-License-Identifier: MPL-2.0
//! Widget construction settings and the demo's persisted `settings.toml`.
//!
//! [`SliderConfig`] is the immutable construction contract of the comparison
//! widget. [`Config`] is the on-disk file read by the demo application; its
//! `[slider]` section maps onto a `SliderConfig`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[slider]` - Comparison widget behavior (fit, sweep bounds, labels...)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `COMPARE_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use compare_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Turn the auto-sweep off
//! config.slider.animated = Some(false);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing settings file cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Widget Configuration
// =============================================================================

/// How each image is fitted into the widget frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContentFit {
    /// Scale to fit entirely inside the frame, preserving aspect ratio.
    #[default]
    Fit,
    /// Scale to cover the whole frame, preserving aspect ratio.
    Fill,
}

/// Sweep bounds as fractions of the widget width, guaranteed to satisfy
/// `0 <= start <= end <= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepBounds {
    start: f32,
    end: f32,
}

impl SweepBounds {
    /// Creates sweep bounds, clamping both ends into `[0, 1]` and swapping
    /// them if given in reverse order.
    #[must_use]
    pub fn new(start: f32, end: f32) -> Self {
        let start = start.clamp(0.0, 1.0);
        let end = end.clamp(0.0, 1.0);
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    #[must_use]
    pub fn start(self) -> f32 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f32 {
        self.end
    }
}

impl Default for SweepBounds {
    fn default() -> Self {
        Self {
            start: DEFAULT_SWEEP_START,
            end: DEFAULT_SWEEP_END,
        }
    }
}

/// Divider bar thickness, guaranteed to be within valid range (0.5–32 px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerThickness(f32);

impl DividerThickness {
    /// Creates a new thickness, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(MIN_DIVIDER_THICKNESS, MAX_DIVIDER_THICKNESS))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for DividerThickness {
    fn default() -> Self {
        Self(DEFAULT_DIVIDER_THICKNESS)
    }
}

/// Immutable configuration supplied when the comparison widget is created.
///
/// Colors left as `None` follow the active theme: the divider uses the text
/// color and the knob chevrons use the background color.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub content_fit: ContentFit,
    pub divider_thickness: DividerThickness,
    pub sweep: SweepBounds,
    pub divider_color: Option<Color>,
    /// Auto-sweep the divider. Interactive gestures are disabled while set.
    pub animated: bool,
    /// Nominal sweep duration. The ticker runs at a fixed cadence regardless.
    pub animation_duration: Duration,
    pub indicator_color: Option<Color>,
    pub labels_visible: bool,
    pub corner_radius: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            content_fit: ContentFit::default(),
            divider_thickness: DividerThickness::default(),
            sweep: SweepBounds::default(),
            divider_color: None,
            animated: true,
            animation_duration: Duration::from_secs_f64(DEFAULT_ANIMATION_DURATION_SECS),
            indicator_color: None,
            labels_visible: true,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl SliderConfig {
    /// Returns an interactive (non-animated) configuration.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            animated: false,
            ..Self::default()
        }
    }

    /// Whether the knob and labels should be drawn.
    #[must_use]
    pub fn shows_controls(&self) -> bool {
        !self.animated
    }

    /// Whether the "Before"/"After" labels should be drawn.
    #[must_use]
    pub fn shows_labels(&self) -> bool {
        !self.animated && self.labels_visible
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Persisted comparison widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_fit: Option<ContentFit>,

    #[serde(
        default = "default_divider_thickness",
        skip_serializing_if = "Option::is_none"
    )]
    pub divider_thickness: Option<f32>,

    #[serde(default = "default_sweep_start", skip_serializing_if = "Option::is_none")]
    pub sweep_start: Option<f32>,

    #[serde(default = "default_sweep_end", skip_serializing_if = "Option::is_none")]
    pub sweep_end: Option<f32>,

    #[serde(default = "default_animated", skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,

    #[serde(
        default = "default_animation_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_duration_secs: Option<f64>,

    #[serde(default = "default_labels_visible", skip_serializing_if = "Option::is_none")]
    pub labels_visible: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            content_fit: Some(ContentFit::default()),
            divider_thickness: default_divider_thickness(),
            sweep_start: default_sweep_start(),
            sweep_end: default_sweep_end(),
            animated: default_animated(),
            animation_duration_secs: default_animation_duration_secs(),
            labels_visible: default_labels_visible(),
            corner_radius: Some(DEFAULT_CORNER_RADIUS),
        }
    }
}

impl SliderSettings {
    /// Builds the widget configuration, filling unset fields with defaults
    /// and clamping out-of-range values.
    #[must_use]
    pub fn to_slider_config(&self) -> SliderConfig {
        let defaults = SliderConfig::default();
        let duration = self
            .animation_duration_secs
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .map_or(defaults.animation_duration, Duration::from_secs_f64);

        SliderConfig {
            content_fit: self.content_fit.unwrap_or_default(),
            divider_thickness: self
                .divider_thickness
                .map_or(defaults.divider_thickness, DividerThickness::new),
            sweep: SweepBounds::new(
                self.sweep_start.unwrap_or(DEFAULT_SWEEP_START),
                self.sweep_end.unwrap_or(DEFAULT_SWEEP_END),
            ),
            animated: self.animated.unwrap_or(defaults.animated),
            animation_duration: duration,
            labels_visible: self.labels_visible.unwrap_or(defaults.labels_visible),
            corner_radius: self
                .corner_radius
                .unwrap_or(DEFAULT_CORNER_RADIUS)
                .max(0.0),
            ..defaults
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub slider: SliderSettings,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_divider_thickness() -> Option<f32> {
    Some(DEFAULT_DIVIDER_THICKNESS)
}

fn default_sweep_start() -> Option<f32> {
    Some(DEFAULT_SWEEP_START)
}

fn default_sweep_end() -> Option<f32> {
    Some(DEFAULT_SWEEP_END)
}

fn default_animated() -> Option<bool> {
    Some(true)
}

fn default_animation_duration_secs() -> Option<f64> {
    Some(DEFAULT_ANIMATION_DURATION_SECS)
}

fn default_labels_visible() -> Option<bool> {
    Some(true)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
