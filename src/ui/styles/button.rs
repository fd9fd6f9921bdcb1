// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, GRAY_200, GRAY_400, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (the three submit controls).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        },
        _ => button::Style {
            background: Some(Background::Color(GRAY_200)),
            text_color: GRAY_400,
            border: Border {
                color: GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        },
    }
}

/// Borderless button for the navbar theme toggle.
pub fn bare(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered => palette.primary.base.color,
        _ => palette.background.base.text,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..button::Style::default()
    }
}
