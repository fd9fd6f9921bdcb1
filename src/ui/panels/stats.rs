// SPDX-License-Identifier: MPL-2.0
//! Landing-strip statistics row fed by the animated counters.

use crate::app::counters::StatCounters;
use crate::app::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// The three counters side by side. The scans value also moves outside
/// the startup tween: every successful analysis bumps it by one.
pub fn view(counters: &StatCounters) -> Element<'_, Message> {
    let row = Row::new()
        .spacing(spacing::MD)
        .push(stat(counters.scans.display(), "Scans Analyzed"))
        .push(stat(counters.users.display(), "Active Users"))
        .push(stat(counters.orgs.display(), "Organizations Protected"));

    Container::new(row).width(Length::Fill).into()
}

fn stat<'a>(value: &'a str, label: &'static str) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(value).size(typography::STAT_VALUE))
        .push(Text::new(label).size(typography::BODY_XS));

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::card)
        .into()
}
