// SPDX-License-Identifier: MPL-2.0
//! The three analyzer sections: email, URL, and QR code.
//!
//! Each section is a card with its input widget, a submit control wrapped
//! in the lock/unlock bracket (disabled + spinner + busy text while a
//! request is in flight), and the outcome panel of the last analysis.

use crate::api::AnalysisKind;
use crate::app::flows::{DropZone, Flow, BUSY_LABEL};
use crate::app::Message;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::panels::result;
use crate::ui::styles;
use crate::ui::widgets::animated_spinner::AnimatedSpinner;
use iced::widget::{button, mouse_area, text_editor, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Email analysis card with a multi-line paste area.
pub fn email<'a>(
    flow: &'a Flow,
    content: &'a text_editor::Content,
    spinner_rotation: f32,
) -> Element<'a, Message> {
    let editor = text_editor(content)
        .height(sizing::EMAIL_INPUT_HEIGHT)
        .on_action(Message::EmailEdited);

    let body = Column::new()
        .spacing(spacing::SM)
        .push(editor)
        .push(submit_button(flow, spinner_rotation));

    section(
        "Email Analysis",
        "Paste the full text of a suspicious email.",
        body,
        flow,
    )
}

/// URL scanner card with a single-line input.
pub fn url<'a>(flow: &'a Flow, value: &'a str, spinner_rotation: f32) -> Element<'a, Message> {
    let input = text_input("https://example.com/login", value)
        .on_input(Message::UrlEdited)
        .on_submit(Message::SubmitPressed(AnalysisKind::Url))
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    let body = Column::new()
        .spacing(spacing::SM)
        .push(input)
        .push(submit_button(flow, spinner_rotation));

    section(
        "URL Scanner",
        "Check a link before you click it.",
        body,
        flow,
    )
}

/// QR scanner card with the drop surface and file chooser.
pub fn qr<'a>(
    flow: &'a Flow,
    zone: &'a DropZone,
    spinner_rotation: f32,
) -> Element<'a, Message> {
    let mut prompt = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Drop a QR code image here").size(typography::BODY_SM))
        .push(Text::new("or click to browse").size(typography::BODY_XS));

    if let Some(label) = zone.filename_label() {
        prompt = prompt.push(Text::new(label).size(typography::BODY_XS));
    }

    let surface = mouse_area(
        Container::new(prompt)
            .width(Length::Fill)
            .height(sizing::DROP_ZONE_HEIGHT)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::drop_zone(zone.is_hovering())),
    )
    .on_press(Message::BrowseQrFile);

    let body = Column::new()
        .spacing(spacing::SM)
        .push(surface)
        .push(submit_button(flow, spinner_rotation));

    section(
        "QR Code Scanner",
        "Scan a QR code image and analyze the URL it hides.",
        body,
        flow,
    )
}

/// Submit control with the guaranteed lock/unlock bracket: while the flow
/// is busy the button loses its press handler (disabling interactivity)
/// and shows the spinner plus fixed busy text; otherwise it shows the
/// flow's resting label.
fn submit_button<'a>(flow: &Flow, spinner_rotation: f32) -> Element<'a, Message> {
    if flow.is_busy() {
        let spinner = AnimatedSpinner::new(palette::WHITE, spinner_rotation, sizing::SPINNER_SM)
            .into_element();
        let content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(spinner)
            .push(Text::new(BUSY_LABEL).size(typography::BODY_SM));
        button(content)
            .padding(spacing::XS)
            .style(styles::button::primary)
            .into()
    } else {
        button(Text::new(flow.submit_label()).size(typography::BODY_SM))
            .on_press(Message::SubmitPressed(flow.kind()))
            .padding(spacing::XS)
            .style(styles::button::primary)
            .into()
    }
}

/// Card wrapper shared by the three sections; appends the outcome panel
/// of the last analysis when there is one.
fn section<'a>(
    title: &'static str,
    description: &'static str,
    body: Column<'a, Message>,
    flow: &'a Flow,
) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::HEADING))
        .push(Text::new(description).size(typography::BODY_SM))
        .push(body);

    if let Some(outcome) = flow.outcome() {
        content = content.push(result::view_outcome(outcome));
    }

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
