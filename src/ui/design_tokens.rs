// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants for the comparison widget and the demo shell. Canvas
drawing code reads these instead of hard-coding sizes and colors.

- **palette**: base colors the theme schemes are built from
- **opacity**: alpha levels for translucent overlays
- **spacing**: paddings and label insets (8px grid)
- **sizing**: spinner, label pill and knob chevron dimensions
- **typography**: label font size
- **stroke**: canvas line widths

```
use compare_lens::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let pill_background = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::GRAY_900
};
let inset = spacing::MD;
```
"#]

use iced::Color;

// ============================================================================
// Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Spinner accents
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Spinner track ring.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Label pill background.
    pub const OVERLAY_STRONG: f32 = 0.7;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Loading spinner diameter upper bound.
    pub const ICON_XL: f32 = 48.0;

    /// Height of the "Before"/"After" pill labels.
    pub const LABEL_HEIGHT: f32 = 24.0;

    /// Half-width of a knob chevron.
    pub const CHEVRON_HALF_WIDTH: f32 = 3.0;

    /// Half-height of a knob chevron.
    pub const CHEVRON_HALF_HEIGHT: f32 = 5.0;

    /// Gap between the two knob chevrons.
    pub const CHEVRON_GAP: f32 = 2.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Comparison labels and the status line.
    pub const FOOTNOTE: f32 = 13.0;

    /// Approximate advance of one glyph relative to the font size.
    /// Canvas text cannot be measured before layout, so pill widths are estimated.
    pub const GLYPH_WIDTH_RATIO: f32 = 0.62;
}

// ============================================================================
// Stroke
// ============================================================================

pub mod stroke {
    /// Knob chevrons.
    pub const WIDTH_MD: f32 = 2.0;

    /// Spinner ring and arc.
    pub const WIDTH_LG: f32 = 3.0;
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::MD == spacing::XS * 2.0);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < 1.0);

    // Label text must fit inside its pill.
    assert!(sizing::LABEL_HEIGHT > typography::FOOTNOTE);
    // The spinner ring is inset by the arc width on each side.
    assert!(sizing::ICON_XL > stroke::WIDTH_LG * 2.0);
    assert!(stroke::WIDTH_LG > stroke::WIDTH_MD);
};
