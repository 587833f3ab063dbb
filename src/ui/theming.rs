// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the color scheme used by the comparison widget.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used when drawing the comparison widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Divider bar and knob fill (the "label" color of the theme).
    pub divider: Color,
    /// Knob chevrons (the "background" color of the theme).
    pub indicator: Color,
    pub label_text: Color,
    pub label_background: Color,
    /// Spinner color while an image is loading.
    pub placeholder: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            divider: palette::BLACK,
            indicator: palette::WHITE,
            label_text: palette::BLACK,
            label_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::GRAY_100
            },
            placeholder: palette::PRIMARY_500,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            divider: palette::WHITE,
            indicator: palette::BLACK,
            label_text: palette::WHITE,
            label_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::GRAY_900
            },
            placeholder: palette::PRIMARY_400,
        }
    }

    /// Picks the scheme matching an iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Resolves the iced theme for this mode.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divider_contrasts_with_indicator() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert_ne!(scheme.divider, scheme.indicator);
        }
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert_eq!(ColorScheme::for_theme(&Theme::Dark), ColorScheme::dark());
        assert_eq!(ColorScheme::for_theme(&Theme::Light), ColorScheme::light());
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"dark\"").expect("valid toml");
        assert_eq!(parsed.mode, ThemeMode::Dark);
    }
}
