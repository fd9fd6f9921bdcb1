// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, spacing, typography, radii.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const DANGER_500: Color = Color::from_rgb(0.863, 0.149, 0.149);
    pub const WARNING_500: Color = Color::from_rgb(0.851, 0.467, 0.024);
    pub const SUCCESS_500: Color = Color::from_rgb(0.086, 0.639, 0.29);
}

pub mod opacity {
    /// Card surface tint over the theme background.
    pub const SURFACE: f32 = 0.6;
    /// Background tint of an outcome panel, derived from its accent color.
    pub const OUTCOME_TINT: f32 = 0.12;
    /// Background tint of the nested advice panel.
    pub const ADVICE_TINT: f32 = 0.08;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Inline spinner shown on a locked submit control.
    pub const SPINNER_SM: f32 = 16.0;
    /// Outcome panel glyph.
    pub const GLYPH_LG: f32 = 30.0;
    /// Fixed height of the email input area.
    pub const EMAIL_INPUT_HEIGHT: f32 = 140.0;
    /// Minimum height of the QR drop surface.
    pub const DROP_ZONE_HEIGHT: f32 = 110.0;
}

pub mod typography {
    pub const BODY_XS: f32 = 12.0;
    pub const BODY_SM: f32 = 14.0;
    pub const BODY: f32 = 16.0;
    pub const HEADING_SM: f32 = 18.0;
    pub const HEADING: f32 = 22.0;
    pub const STAT_VALUE: f32 = 28.0;
    pub const BRAND: f32 = 24.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod border {
    pub const THIN: f32 = 1.0;
    pub const THICK: f32 = 2.0;
}
