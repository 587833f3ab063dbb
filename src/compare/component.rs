// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison component.
//!
//! Owns the widget configuration, the interaction state, the two image slots
//! and the gesture recognizer. The embedding application forwards
//! [`Message`]s to [`State::handle`] and reacts to the returned [`Effect`].

use super::cache::SharedImageCache;
use super::canvas::ComparisonCanvas;
use super::gesture::{Gesture, GestureRecognizer, RawInput};
use super::source::{self, ImageSource, LoadedImage};
use super::state::ViewState;
use crate::config::{
    SliderConfig, SPINNER_TICK_INTERVAL_MS, SWEEP_TICK_INTERVAL_MS, WHEEL_IDLE_POLL_MS,
};
use crate::error::Error;
use crate::i18n::I18n;
use crate::ui::widgets::animated_spinner;
use iced::widget::{container, Canvas};
use iced::{Element, Length, Size, Subscription, Task, Vector};
use std::time::{Duration, Instant};

/// One side of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Revealed left of the divider.
    Before,
    /// Shown right of the divider.
    After,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Before => write!(f, "before"),
            Side::After => write!(f, "after"),
        }
    }
}

/// Loading status of one side.
#[derive(Debug, Clone, Default)]
pub enum Slot {
    #[default]
    Loading,
    Ready(LoadedImage),
    /// The load failed; the placeholder stays up.
    Failed(String),
}

impl Slot {
    #[must_use]
    pub fn image(&self) -> Option<&LoadedImage> {
        match self {
            Slot::Ready(image) => Some(image),
            Slot::Loading | Slot::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Slot::Loading)
    }
}

/// Messages handled by the comparison component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Divider dragged to `x` within a view `width` pixels wide.
    DividerDragged { x: f32, width: f32 },
    PanChanged { translation: Vector, view_size: Size },
    PanEnded,
    /// Cumulative pinch multiplier for the gesture in progress.
    PinchChanged(f32),
    PinchEnded,
    DoubleTapped,
    /// Sweep ticker fired.
    Tick(Instant),
    SpinnerTick,
    /// Poll for the end of a wheel zoom gesture.
    WheelIdle(Instant),
    Loaded {
        side: Side,
        result: Result<LoadedImage, Error>,
    },
    /// Raw input reported by the canvas, with the canvas size at that moment.
    Canvas { input: RawInput, view_size: Size },
}

/// Effects produced by the comparison component.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Interaction state changed; the view needs a redraw.
    ViewChanged,
    /// An image finished loading; carries the new maximum content size.
    ContentMeasured(Size),
    LoadFailed { side: Side, message: String },
}

/// Borrowed collaborators needed to render the component.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Comparison component state.
#[derive(Debug, Clone)]
pub struct State {
    config: SliderConfig,
    view: ViewState,
    gestures: GestureRecognizer,
    before_source: ImageSource,
    after_source: ImageSource,
    before: Slot,
    after: Slot,
    spinner_rotation: f32,
}

impl State {
    /// Creates a component for two sources. Already-decoded sources are
    /// ready immediately; the others wait for [`State::load_task`].
    #[must_use]
    pub fn new(
        before: impl Into<ImageSource>,
        after: impl Into<ImageSource>,
        config: SliderConfig,
    ) -> Self {
        let mut state = Self {
            view: ViewState::new(config.animated),
            config,
            gestures: GestureRecognizer::default(),
            before_source: before.into(),
            after_source: after.into(),
            before: Slot::Loading,
            after: Slot::Loading,
            spinner_rotation: 0.0,
        };

        for side in [Side::Before, Side::After] {
            let source = state.source(side).clone();
            if let ImageSource::Decoded(image) = source {
                state.set_ready(side, image);
            }
        }

        state
    }

    /// Returns a task loading every side that is still waiting.
    pub fn load_task(&self, cache: Option<SharedImageCache>) -> Task<Message> {
        let tasks = [Side::Before, Side::After]
            .into_iter()
            .filter(|side| self.slot(*side).is_loading())
            .map(|side| {
                let source = self.source(side).clone();
                let cache = cache.clone();
                Task::perform(source::load(source, cache), move |result| {
                    Message::Loaded { side, result }
                })
            });
        Task::batch(tasks)
    }

    /// Handle a comparison message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Tick(_) => {
                if self.view.animation_active {
                    self.view.on_tick(self.config.sweep);
                    Effect::ViewChanged
                } else {
                    Effect::None
                }
            }
            Message::SpinnerTick => {
                if self.is_loading() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                    Effect::ViewChanged
                } else {
                    Effect::None
                }
            }
            Message::Loaded { side, result } => match result {
                Ok(image) => {
                    self.set_ready(side, image);
                    Effect::ContentMeasured(self.view.max_content_size)
                }
                Err(err) => {
                    tracing::warn!(%side, error = %err, "image failed to load");
                    let message = err.to_string();
                    *self.slot_mut(side) = Slot::Failed(message.clone());
                    Effect::LoadFailed { side, message }
                }
            },
            // Interactive gestures are disabled while the sweep owns the divider.
            _ if self.config.animated => Effect::None,
            Message::DividerDragged { x, width } => {
                self.view.on_divider_drag(x, width);
                Effect::ViewChanged
            }
            Message::PanChanged {
                translation,
                view_size,
            } => {
                self.view
                    .on_pan_changed(translation, view_size, self.view.zoom_scale);
                Effect::ViewChanged
            }
            Message::PanEnded => {
                self.view.on_pan_ended();
                Effect::None
            }
            Message::PinchChanged(multiplier) => {
                self.view.on_pinch_changed(multiplier);
                Effect::ViewChanged
            }
            Message::PinchEnded => {
                self.view.on_pinch_ended();
                Effect::ViewChanged
            }
            Message::DoubleTapped => {
                self.view.on_double_tap();
                Effect::ViewChanged
            }
            Message::WheelIdle(now) => match self.gestures.poll_idle(now) {
                Some(gesture) => self.apply(gesture, Size::ZERO),
                None => Effect::None,
            },
            Message::Canvas { input, view_size } => {
                let divider_x = self.view.divider_position * view_size.width;
                let gestures = self.gestures.feed(input, divider_x, Instant::now());
                gestures
                    .into_iter()
                    .map(|gesture| self.apply(gesture, view_size))
                    .fold(Effect::None, |acc, effect| {
                        if effect == Effect::None {
                            acc
                        } else {
                            effect
                        }
                    })
            }
        }
    }

    fn apply(&mut self, gesture: Gesture, view_size: Size) -> Effect {
        let msg = match gesture {
            Gesture::DividerDragged { x } => Message::DividerDragged {
                x,
                width: view_size.width,
            },
            Gesture::PanChanged(translation) => Message::PanChanged {
                translation,
                view_size,
            },
            Gesture::PanEnded => Message::PanEnded,
            Gesture::PinchChanged(multiplier) => Message::PinchChanged(multiplier),
            Gesture::PinchEnded => Message::PinchEnded,
            Gesture::DoubleTapped => Message::DoubleTapped,
        };
        self.handle(msg)
    }

    /// Timers needed by the current state: the sweep ticker while animating,
    /// the spinner while a side is loading and the wheel-gesture idle poll.
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if self.view.animation_active {
            subscriptions.push(
                iced::time::every(Duration::from_millis(SWEEP_TICK_INTERVAL_MS))
                    .map(Message::Tick),
            );
        }
        if self.is_loading() {
            subscriptions.push(
                iced::time::every(Duration::from_millis(SPINNER_TICK_INTERVAL_MS))
                    .map(|_| Message::SpinnerTick),
            );
        }
        if self.gestures.wheel_active() {
            subscriptions.push(
                iced::time::every(Duration::from_millis(WHEEL_IDLE_POLL_MS))
                    .map(Message::WheelIdle),
            );
        }

        Subscription::batch(subscriptions)
    }

    /// Stops the sweep ticker. Call when the widget is torn down.
    pub fn stop_animation(&mut self) {
        self.view.stop_animation();
        self.gestures.reset();
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'_>) -> Element<'a, Message> {
        let program = ComparisonCanvas {
            config: &self.config,
            view: &self.view,
            before: self.before.image(),
            after: self.after.image(),
            spinner_rotation: self.spinner_rotation,
            before_label: ctx.i18n.tr("label-before"),
            after_label: ctx.i18n.tr("label-after"),
        };

        let canvas = Canvas::new(program)
            .width(Length::Fill)
            .height(Length::Fill);

        let frame = container(canvas).width(Length::Fill).height(Length::Fill);
        let max = self.view.max_content_size;
        if max.width > 0.0 && max.height > 0.0 {
            frame.max_width(max.width).max_height(max.height).into()
        } else {
            frame.into()
        }
    }

    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn slot(&self, side: Side) -> &Slot {
        match side {
            Side::Before => &self.before,
            Side::After => &self.after,
        }
    }

    #[must_use]
    pub fn source(&self, side: Side) -> &ImageSource {
        match side {
            Side::Before => &self.before_source,
            Side::After => &self.after_source,
        }
    }

    /// Whether either side is still loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.before.is_loading() || self.after.is_loading()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    fn slot_mut(&mut self, side: Side) -> &mut Slot {
        match side {
            Side::Before => &mut self.before,
            Side::After => &mut self.after,
        }
    }

    fn set_ready(&mut self, side: Side, image: LoadedImage) {
        self.view.measure_content(image.natural_size());
        *self.slot_mut(side) = Slot::Ready(image);
    }
}
