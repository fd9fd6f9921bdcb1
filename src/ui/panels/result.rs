// SPDX-License-Identifier: MPL-2.0
//! Outcome rendering: verdict panels and the shared error panel.
//!
//! Classification is factored into the plain [`ResultPanel`] model so the
//! verdict branch, headings, and advice text are testable without a
//! rendering surface; the view functions only lay the model out.

use crate::api::AnalysisReport;
use crate::app::flows::Outcome;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};

/// Visual tone of an outcome panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Success,
    Warning,
}

impl Tone {
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Tone::Danger => palette::DANGER_500,
            Tone::Success => palette::SUCCESS_500,
            Tone::Warning => palette::WARNING_500,
        }
    }
}

/// Fixed heading of the error panel, shared by all failure kinds.
pub const ERROR_HEADING: &str = "Error";

const PHISHING_HEADING: &str = "Phishing Detected";
const LEGITIMATE_HEADING: &str = "Legitimate";

const PHISHING_ADVICE_TITLE: &str = "Security Recommendation:";
const PHISHING_ADVICE: &str = "Do not click any links, download attachments, or provide \
     personal information. Report this to your IT security team.";

const LEGITIMATE_ADVICE_TITLE: &str = "Analysis Complete";
const LEGITIMATE_ADVICE: &str =
    "This appears to be legitimate, but always exercise caution and verify the source.";

/// Display model of a verdict panel, derived from an [`AnalysisReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub tone: Tone,
    pub glyph: &'static str,
    pub heading: &'static str,
    pub confidence: String,
    pub decoded_url: Option<String>,
    pub warning: Option<String>,
    pub advice_title: &'static str,
    pub advice: &'static str,
}

impl ResultPanel {
    /// Classifies a report. Only the exact verdict `"Phishing"` selects
    /// the danger branch; everything else renders as legitimate.
    #[must_use]
    pub fn from_report(report: &AnalysisReport) -> Self {
        if report.is_phishing() {
            Self {
                tone: Tone::Danger,
                glyph: "⚠",
                heading: PHISHING_HEADING,
                confidence: report.confidence.clone(),
                decoded_url: report.decoded_url.clone(),
                warning: report.warning.clone(),
                advice_title: PHISHING_ADVICE_TITLE,
                advice: PHISHING_ADVICE,
            }
        } else {
            Self {
                tone: Tone::Success,
                glyph: "✓",
                heading: LEGITIMATE_HEADING,
                confidence: report.confidence.clone(),
                decoded_url: report.decoded_url.clone(),
                warning: report.warning.clone(),
                advice_title: LEGITIMATE_ADVICE_TITLE,
                advice: LEGITIMATE_ADVICE,
            }
        }
    }
}

/// Renders the last outcome of a flow, if any.
pub fn view_outcome<'a, Message: 'a>(outcome: &'a Outcome) -> Element<'a, Message> {
    match outcome {
        Outcome::Report(report) => view_report(report),
        Outcome::Failure(message) => view_error(message),
    }
}

fn view_report<'a, Message: 'a>(report: &'a AnalysisReport) -> Element<'a, Message> {
    let panel = ResultPanel::from_report(report);
    let accent = panel.tone.accent();

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(panel.heading)
                .size(typography::HEADING_SM)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent),
                }),
        )
        .push(Text::new(format!("Confidence: {}", panel.confidence)).size(typography::BODY_SM));

    if let Some(url) = panel.decoded_url {
        details = details.push(
            Text::new(format!("Decoded URL: {url}"))
                .size(typography::BODY_XS)
                .font(Font::MONOSPACE),
        );
    }

    if let Some(warning) = panel.warning {
        details = details.push(
            Text::new(format!("⚠ {warning}"))
                .size(typography::BODY_XS)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WARNING_500),
                }),
        );
    }

    let advice = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(panel.advice_title).size(typography::BODY_XS).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent),
                },
            ))
            .push(Text::new(panel.advice).size(typography::BODY_XS)),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::advice(accent));

    details = details.push(advice);

    let content = Row::new()
        .spacing(spacing::MD)
        .push(
            Text::new(panel.glyph)
                .size(sizing::GLYPH_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent),
                }),
        )
        .push(details.width(Length::Fill));

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::outcome(accent))
        .into()
}

/// Renders any failure outcome into the single warning-styled channel.
fn view_error<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    let accent = Tone::Warning.accent();

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(ERROR_HEADING)
                .size(typography::HEADING_SM)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent),
                }),
        )
        .push(Text::new(message).size(typography::BODY_SM));

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new("⚠")
                .size(sizing::GLYPH_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent),
                }),
        )
        .push(details.width(Length::Fill));

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::outcome(accent))
        .into()
}
