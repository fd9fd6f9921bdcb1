// SPDX-License-Identifier: MPL-2.0
//! Container styles for cards, outcome panels, and the drop surface.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface hosting one analyzer section.
///
/// Derived from the active theme background with a slight opacity so the
/// cards stay readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Outcome panel tinted and bordered with the given accent color.
pub fn outcome(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OUTCOME_TINT,
            ..accent
        })),
        border: Border {
            color: accent,
            width: border::THIN,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}

/// Nested advice panel inside an outcome panel, tinted softer.
pub fn advice(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::ADVICE_TINT,
            ..accent
        })),
        border: Border {
            color: Color { a: 0.4, ..accent },
            width: border::THIN,
            radius: radius::SM.into(),
        },
        ..container::Style::default()
    }
}

/// QR drop surface; the border brightens while a drag hovers over the
/// window.
pub fn drop_zone(hovering: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let theme_palette = theme.extended_palette();
        let (border_color, width) = if hovering {
            (palette::PRIMARY_500, border::THICK)
        } else {
            (theme_palette.background.strong.color, border::THIN)
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: if hovering { 0.08 } else { 0.0 },
                ..palette::PRIMARY_500
            })),
            border: Border {
                color: border_color,
                width,
                radius: radius::MD.into(),
            },
            ..container::Style::default()
        }
    }
}

/// Navbar strip.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        ..container::Style::default()
    }
}
