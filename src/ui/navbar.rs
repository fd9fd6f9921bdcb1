// SPDX-License-Identifier: MPL-2.0
//! Top navigation strip: brand, backend status, and the theme toggle.

use crate::app::{BackendStatus, Message};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub backend: &'a BackendStatus,
    /// Whether the effective theme is currently dark (picks the toggle glyph).
    pub dark: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new("PhishX").size(typography::BRAND);
    let tagline = Text::new("Phishing Detection").size(typography::BODY_XS);

    // Sun in dark mode, moon in light mode: the glyph shows what the
    // toggle switches to.
    let toggle_glyph = if ctx.dark { "☀" } else { "☾" };
    let theme_toggle = button(Text::new(toggle_glyph).size(typography::HEADING_SM))
        .on_press(Message::ThemeToggled)
        .padding(spacing::XS)
        .style(styles::button::bare);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::SM)
        .push(brand)
        .push(tagline)
        .push(Space::new().width(Length::Fill));

    if let Some(status) = status_line(ctx.backend) {
        row = row.push(status);
    }

    row = row.push(theme_toggle);

    iced::widget::Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn status_line<'a>(backend: &'a BackendStatus) -> Option<Element<'a, Message>> {
    let (label, color) = match backend {
        BackendStatus::Checking => return None,
        BackendStatus::Online(health) => {
            if health.email_model_loaded && health.url_model_loaded {
                ("Backend online", palette::SUCCESS_500)
            } else {
                ("Backend online (models missing)", palette::WARNING_500)
            }
        }
        BackendStatus::Unreachable => ("Backend unreachable", palette::DANGER_500),
    };

    Some(
        Text::new(label)
            .size(typography::BODY_XS)
            .style(move |_theme: &Theme| text::Style { color: Some(color) })
            .into(),
    )
}
