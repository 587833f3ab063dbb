// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single comparison widget.
//!
//! The `App` struct wires the comparison component to localization, the
//! settings file and the window lifecycle: the sweep is stopped before the
//! window closes.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::compare::{self, CacheConfig, Effect, ImageCache, SharedImageCache};
use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    comparison: compare::State,
    cache: SharedImageCache,
    /// Last user-facing problem (config warning or load failure).
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("loading", &self.comparison.is_loading())
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings. Close requests are routed through `update`
/// so the sweep ticker is stopped before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings from disk and starts loading both images.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        Self::with_config(flags, &config, warning)
    }

    /// Builds the application from an already-loaded configuration.
    pub fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);

        let mut slider = config.slider.to_slider_config();
        if flags.interactive {
            slider.animated = false;
        }
        if flags.hide_labels {
            slider.labels_visible = false;
        }
        tracing::info!(
            before = %flags.before,
            after = %flags.after,
            animated = slider.animated,
            "starting comparison"
        );

        let comparison = compare::State::new(flags.before, flags.after, slider);
        let cache = ImageCache::shared(CacheConfig::default());
        let task = comparison
            .load_task(Some(cache.clone()))
            .map(Message::Compare);

        let app = Self {
            status: config_warning.map(|key| i18n.tr(&key)),
            i18n,
            theme_mode: config.general.theme_mode,
            comparison,
            cache,
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_compare_subscription(&self.comparison),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Compare(compare_message) => {
                match self.comparison.handle(compare_message) {
                    Effect::LoadFailed { side, message } => {
                        self.status = Some(format!("{side}: {message}"));
                    }
                    Effect::ContentMeasured(size) => {
                        tracing::debug!(width = size.width, height = size.height, "content measured");
                        if !self.comparison.is_loading() {
                            if let Ok(cache) = self.cache.lock() {
                                let stats = cache.stats();
                                tracing::debug!(
                                    images = stats.image_count,
                                    bytes = stats.total_bytes,
                                    "image cache"
                                );
                            }
                        }
                    }
                    Effect::ViewChanged | Effect::None => {}
                }
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.comparison.stop_animation();
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            comparison: &self.comparison,
            status: self.status.as_deref(),
        })
    }

    #[must_use]
    pub fn comparison(&self) -> &compare::State {
        &self.comparison
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Side;
    use crate::error::Error;
    use crate::test_utils::solid_image;

    fn flags() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            before: "before.png".to_string(),
            after: "after.png".to_string(),
            ..Flags::default()
        }
    }

    #[test]
    fn title_is_localized() {
        let (app, _) = App::with_config(flags(), &Config::default(), None);
        assert_eq!(app.title(), "CompareLens");
    }

    #[test]
    fn settings_drive_widget_configuration() {
        let mut config = Config::default();
        config.slider.animated = Some(false);
        config.slider.sweep_start = Some(0.2);

        let (app, _) = App::with_config(flags(), &config, None);
        let slider = app.comparison().config();
        assert!(!slider.animated);
        assert_eq!(slider.sweep.start(), 0.2);
    }

    #[test]
    fn cli_flags_override_settings() {
        let flags = Flags {
            interactive: true,
            hide_labels: true,
            ..flags()
        };
        let (app, _) = App::with_config(flags, &Config::default(), None);
        let slider = app.comparison().config();
        assert!(!slider.animated);
        assert!(!slider.labels_visible);
    }

    #[test]
    fn config_warning_is_shown_translated() {
        let (app, _) = App::with_config(
            flags(),
            &Config::default(),
            Some(config::CONFIG_LOAD_WARNING_KEY.to_string()),
        );
        let status = app.status().expect("warning should be shown");
        assert!(!status.starts_with("MISSING"));
    }

    #[test]
    fn load_failure_sets_status() {
        let (mut app, _) = App::with_config(flags(), &Config::default(), None);
        let _ = app.update(Message::Compare(compare::Message::Loaded {
            side: Side::Before,
            result: Err(Error::Io("No such file".into())),
        }));

        let status = app.status().expect("failure should be shown");
        assert!(status.starts_with("before:"));
        assert!(status.contains("No such file"));
    }

    #[test]
    fn loaded_images_clear_loading_state() {
        let (mut app, _) = App::with_config(flags(), &Config::default(), None);
        for side in [Side::Before, Side::After] {
            let _ = app.update(Message::Compare(compare::Message::Loaded {
                side,
                result: Ok(solid_image(8, 8)),
            }));
        }
        assert!(!app.comparison().is_loading());
        assert!(app.status().is_none());
    }
}
