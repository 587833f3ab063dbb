// SPDX-License-Identifier: MPL-2.0
//! Rotating arc spinner drawn while an image is still loading.
//!
//! The spinner has no state of its own: the owner advances the rotation on
//! every spinner tick with [`advance`] and draws it into a canvas frame.

use crate::ui::design_tokens::{opacity, sizing, stroke};
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Point};
use std::f32::consts::{PI, TAU};

/// Spinner rotation speed in radians per tick.
pub const SPINNER_SPEED: f32 = 0.1;

const ARC_SEGMENTS: u16 = 30;

/// Returns the rotation after one spinner tick, wrapped to `[0, TAU]`.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    let next = rotation + SPINNER_SPEED;
    if next > TAU {
        next - TAU
    } else {
        next
    }
}

/// Spinner appearance for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedSpinner {
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Limits the spinner diameter, e.g. to fit a small placeholder.
    #[must_use]
    pub fn fit_within(mut self, available: f32) -> Self {
        self.size = self.size.min(available).max(0.0);
        self
    }

    /// Draws the spinner centered on `center`.
    pub fn draw(&self, frame: &mut Frame, center: Point) {
        let radius = self.size / 2.0 - stroke::WIDTH_LG;
        if radius <= 0.0 {
            return;
        }

        // Subtle full ring behind the arc
        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(stroke::WIDTH_LG)
                .with_color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..self.color
                }),
        );

        frame.stroke(
            &self.arc(center, radius),
            Stroke::default()
                .with_width(stroke::WIDTH_LG)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );
    }

    /// Half-circle arc starting at the top, rotated by the current angle.
    fn arc(&self, center: Point, radius: f32) -> Path {
        let start_angle = self.rotation - PI / 2.0;

        let mut builder = canvas::path::Builder::new();
        builder.move_to(point_on_circle(center, radius, start_angle));
        for i in 1..=ARC_SEGMENTS {
            let t = f32::from(i) / f32::from(ARC_SEGMENTS);
            builder.line_to(point_on_circle(center, radius, start_angle + PI * t));
        }
        builder.build()
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
