// SPDX-License-Identifier: MPL-2.0
//! Canvas program rendering the comparison and reporting raw input.
//!
//! Drawing order: the "after" image over the whole frame, the "before"
//! image clipped to the left of the divider, the divider bar, then (when
//! interactive) the knob and the two labels. Corner rounding is painted
//! last as a mask in the theme background color.

use super::component::Message;
use super::gesture::RawInput;
use super::source::LoadedImage;
use super::state::ViewState;
use crate::config::{
    ContentFit, SliderConfig, DIVIDER_HIT_SLOP, KNOB_DIAMETER, WHEEL_PIXELS_PER_LINE,
};
use crate::ui::design_tokens::{sizing, spacing, stroke, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::canvas::{self, path, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{font, mouse, touch, Color, Font, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::collections::BTreeSet;

/// Renders one comparison widget. Built fresh on every view.
pub struct ComparisonCanvas<'a> {
    pub config: &'a SliderConfig,
    pub view: &'a ViewState,
    pub before: Option<&'a LoadedImage>,
    pub after: Option<&'a LoadedImage>,
    pub spinner_rotation: f32,
    pub before_label: String,
    pub after_label: String,
}

/// Per-widget canvas state.
#[derive(Debug, Default)]
pub struct PointerState {
    /// Left button went down inside the canvas and has not been released.
    pointer_down: bool,
    /// Touch fingers that went down inside the canvas.
    fingers: BTreeSet<u64>,
}

impl canvas::Program<Message> for ComparisonCanvas<'_> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if self.config.animated {
            return None;
        }

        let input = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.pointer_down = true;
                RawInput::CursorPressed(position)
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if !state.pointer_down {
                    return None;
                }
                RawInput::CursorMoved(to_local(*position, bounds))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if !std::mem::take(&mut state.pointer_down) {
                    return None;
                }
                RawInput::CursorReleased
            }
            // If cursor leaves the window, end any drag operation
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if !std::mem::take(&mut state.pointer_down) {
                    return None;
                }
                RawInput::CursorLeft
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if !cursor.is_over(bounds) {
                    return None;
                }
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / WHEEL_PIXELS_PER_LINE,
                };
                RawInput::Wheel { lines }
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                state.fingers.insert(id.0);
                RawInput::FingerPressed {
                    id: id.0,
                    position: to_local(*position, bounds),
                }
            }
            // Fingers that went down elsewhere belong to other widgets.
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if !state.fingers.contains(&id.0) {
                    return None;
                }
                RawInput::FingerMoved {
                    id: id.0,
                    position: to_local(*position, bounds),
                }
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => {
                if !state.fingers.remove(&id.0) {
                    return None;
                }
                RawInput::FingerLifted { id: id.0 }
            }
            _ => return None,
        };

        Some(
            Action::publish(Message::Canvas {
                input,
                view_size: bounds.size(),
            })
            .and_capture(),
        )
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        let colors = ColorScheme::for_theme(theme);
        let divider_color = self.config.divider_color.unwrap_or(colors.divider);
        let indicator_color = self.config.indicator_color.unwrap_or(colors.indicator);
        let divider_x = size.width * self.view.divider_position;

        frame.with_clip(Rectangle::with_size(size), |frame| {
            let after_region = Rectangle::new(
                Point::new(divider_x, 0.0),
                Size::new(size.width - divider_x, size.height),
            );
            self.draw_side(frame, self.after, size, after_region, colors.placeholder);
        });

        frame.with_clip(
            Rectangle::with_size(Size::new(divider_x, size.height)),
            |frame| {
                let before_region = Rectangle::with_size(Size::new(divider_x, size.height));
                self.draw_side(frame, self.before, size, before_region, colors.placeholder);
            },
        );

        let thickness = self.config.divider_thickness.value();
        frame.fill_rectangle(
            Point::new(divider_x - thickness / 2.0, 0.0),
            Size::new(thickness, size.height),
            divider_color,
        );

        if self.config.shows_controls() {
            draw_knob(&mut frame, knob_center(size, divider_x), divider_color, indicator_color);
        }

        if self.config.shows_labels() {
            let before_width = label_width(&self.before_label);
            let after_width = label_width(&self.after_label);
            draw_label(
                &mut frame,
                &self.before_label,
                Point::new(spacing::MD, spacing::MD),
                before_width,
                colors,
            );
            draw_label(
                &mut frame,
                &self.after_label,
                Point::new(size.width - spacing::MD - after_width, spacing::MD),
                after_width,
                colors,
            );
        }

        if self.config.corner_radius > 0.0 {
            draw_corner_mask(
                &mut frame,
                size,
                self.config.corner_radius,
                theme.palette().background,
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.config.animated {
            return mouse::Interaction::default();
        }
        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };

        let divider_x = bounds.width * self.view.divider_position;
        if (position.x - divider_x).abs() <= DIVIDER_HIT_SLOP {
            mouse::Interaction::ResizingHorizontally
        } else if self.view.is_zoomed() {
            if state.pointer_down {
                mouse::Interaction::Grabbing
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

impl ComparisonCanvas<'_> {
    /// Draws one side's image, or a spinner centered in its visible region.
    fn draw_side(
        &self,
        frame: &mut Frame,
        image: Option<&LoadedImage>,
        size: Size,
        visible: Rectangle,
        placeholder: Color,
    ) {
        match image {
            Some(image) => {
                let target = image_rect(
                    image.natural_size(),
                    size,
                    self.config.content_fit,
                    self.view.zoom_scale,
                    self.view.pan_offset,
                );
                frame.draw_image(target, canvas::Image::new(image.handle.clone()));
            }
            None => {
                AnimatedSpinner::new(placeholder, self.spinner_rotation)
                    .fit_within(visible.width.min(visible.height))
                    .draw(frame, visible.center());
            }
        }
    }
}

fn to_local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

/// Where an image of `natural` size lands in a frame of `frame` size:
/// fitted (or filled) and centered, then scaled about the frame center and
/// shifted by `pan`.
#[must_use]
pub fn image_rect(
    natural: Size,
    frame: Size,
    fit: ContentFit,
    zoom_scale: f32,
    pan: Vector,
) -> Rectangle {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return Rectangle::with_size(Size::ZERO);
    }

    let horizontal = frame.width / natural.width;
    let vertical = frame.height / natural.height;
    let scale = match fit {
        ContentFit::Fit => horizontal.min(vertical),
        ContentFit::Fill => horizontal.max(vertical),
    } * zoom_scale;

    let width = natural.width * scale;
    let height = natural.height * scale;
    let center = Point::new(frame.width / 2.0, frame.height / 2.0) + pan;

    Rectangle::new(
        Point::new(center.x - width / 2.0, center.y - height / 2.0),
        Size::new(width, height),
    )
}

/// Knob center: on the divider, with a quarter of the height below the knob.
#[must_use]
pub fn knob_center(size: Size, divider_x: f32) -> Point {
    let radius = KNOB_DIAMETER / 2.0;
    let y = (size.height * 0.75 - radius).max(radius);
    Point::new(divider_x, y)
}

/// Estimated pill width for a label; canvas text is not measured before drawing.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn label_width(text: &str) -> f32 {
    let glyphs = text.chars().count() as f32;
    glyphs * typography::FOOTNOTE * typography::GLYPH_WIDTH_RATIO + 2.0 * spacing::XS
}

fn draw_knob(frame: &mut Frame, center: Point, fill: Color, chevrons: Color) {
    frame.fill(&Path::circle(center, KNOB_DIAMETER / 2.0), fill);

    let offset = sizing::CHEVRON_GAP / 2.0 + sizing::CHEVRON_HALF_WIDTH;
    let chevron_stroke = Stroke::default()
        .with_width(stroke::WIDTH_MD)
        .with_color(chevrons)
        .with_line_cap(canvas::LineCap::Round)
        .with_line_join(canvas::LineJoin::Round);

    for (direction, x) in [(-1.0, center.x - offset), (1.0, center.x + offset)] {
        let tip = Point::new(x + direction * sizing::CHEVRON_HALF_WIDTH, center.y);
        let back_x = x - direction * sizing::CHEVRON_HALF_WIDTH;

        let mut builder = path::Builder::new();
        builder.move_to(Point::new(back_x, center.y - sizing::CHEVRON_HALF_HEIGHT));
        builder.line_to(tip);
        builder.line_to(Point::new(back_x, center.y + sizing::CHEVRON_HALF_HEIGHT));
        frame.stroke(&builder.build(), chevron_stroke);
    }
}

fn draw_label(frame: &mut Frame, text: &str, top_left: Point, width: f32, colors: ColorScheme) {
    let height = sizing::LABEL_HEIGHT;
    let pill = Path::rounded_rectangle(top_left, Size::new(width, height), (height / 2.0).into());
    frame.fill(&pill, colors.label_background);

    frame.fill_text(canvas::Text {
        content: text.to_string(),
        position: Point::new(
            top_left.x + spacing::XS,
            top_left.y + (height - typography::FOOTNOTE) / 2.0,
        ),
        color: colors.label_text,
        size: typography::FOOTNOTE.into(),
        font: Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        },
        ..canvas::Text::default()
    });
}

/// Paints the four corners outside a rounded rectangle in `background`.
fn draw_corner_mask(frame: &mut Frame, size: Size, radius: f32, background: Color) {
    let radius = radius.min(size.width / 2.0).min(size.height / 2.0);
    if radius <= 0.0 {
        return;
    }

    let (w, h) = (size.width, size.height);
    // (corner, point along the top/bottom edge, point along the side edge)
    let corners = [
        (Point::new(0.0, 0.0), Point::new(radius, 0.0), Point::new(0.0, radius)),
        (Point::new(w, 0.0), Point::new(w - radius, 0.0), Point::new(w, radius)),
        (Point::new(w, h), Point::new(w - radius, h), Point::new(w, h - radius)),
        (Point::new(0.0, h), Point::new(radius, h), Point::new(0.0, h - radius)),
    ];

    for (corner, edge, side) in corners {
        let mut builder = path::Builder::new();
        builder.move_to(corner);
        builder.line_to(edge);
        builder.arc_to(corner, side, radius);
        builder.close();
        frame.fill(&builder.build(), background);
    }
}
