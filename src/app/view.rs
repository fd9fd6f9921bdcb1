// SPDX-License-Identifier: MPL-2.0
//! View rendering: navbar, statistics row, and the three analyzer cards.

use super::{BackendStatus, Message};
use crate::app::counters::StatCounters;
use crate::app::flows::{DropZone, Flows};
use crate::ui::design_tokens::spacing;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::panels::{analyzer, stats};
use iced::widget::{scrollable, text_editor, Column, Container};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub flows: &'a Flows,
    pub email_content: &'a text_editor::Content,
    pub url_input: &'a str,
    pub qr_zone: &'a DropZone,
    pub counters: &'a StatCounters,
    pub backend: &'a BackendStatus,
    pub dark: bool,
    pub spinner_rotation: f32,
}

const CONTENT_MAX_WIDTH: f32 = 760.0;

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        backend: ctx.backend,
        dark: ctx.dark,
    });

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(CONTENT_MAX_WIDTH)
        .push(stats::view(ctx.counters))
        .push(analyzer::email(
            &ctx.flows.email,
            ctx.email_content,
            ctx.spinner_rotation,
        ))
        .push(analyzer::url(
            &ctx.flows.url,
            ctx.url_input,
            ctx.spinner_rotation,
        ))
        .push(analyzer::qr(
            &ctx.flows.qr,
            ctx.qr_zone,
            ctx.spinner_rotation,
        ));

    let body = scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill);

    Column::new().push(navbar).push(body).into()
}
