// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every submit path follows the same bracket: validate synchronously,
//! lock the flow, dispatch through the shared [`DetectorClient`], and let
//! the completion handler render exactly one outcome panel and unlock the
//! control. The completion message is delivered whether the request
//! succeeded, was rejected, or never reached the backend, so the unlock
//! cannot be skipped.

use super::{BackendStatus, Message};
use crate::api::{
    AnalysisKind, AnalysisReport, AnalysisRequest, ApiError, DetectorClient, HealthReport,
};
use crate::app::counters::StatCounters;
use crate::app::flows::{DropZone, Flows};
use crate::config::{self, Config};
use crate::ui::theming::{self, ThemeMode};
use crate::ui::widgets::animated_spinner::ROTATION_STEP;
use iced::widget::text_editor;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app
/// state.
pub struct UpdateContext<'a> {
    pub flows: &'a mut Flows,
    pub email_content: &'a mut text_editor::Content,
    pub url_input: &'a mut String,
    pub qr_zone: &'a mut DropZone,
    pub counters: &'a mut StatCounters,
    pub config: &'a mut Config,
    pub config_path: Option<&'a PathBuf>,
    pub client: &'a DetectorClient,
    pub backend: &'a mut BackendStatus,
    pub dark: &'a mut bool,
    pub spinner_rotation: &'a mut f32,
}

pub fn handle_email_edited(ctx: &mut UpdateContext<'_>, action: text_editor::Action) {
    ctx.email_content.perform(action);
}

pub fn handle_url_edited(ctx: &mut UpdateContext<'_>, value: String) {
    *ctx.url_input = value;
}

/// Validates and dispatches one analysis. A validation failure presents
/// the error panel immediately and never locks the control; otherwise the
/// flow is locked and the request runs to completion with no cancellation
/// path.
pub fn handle_submit(ctx: &mut UpdateContext<'_>, kind: AnalysisKind) -> Task<Message> {
    let request = match kind {
        AnalysisKind::Email => AnalysisRequest::email(ctx.email_content.text()),
        AnalysisKind::Url => AnalysisRequest::url(ctx.url_input.as_str()),
        AnalysisKind::Qr => match ctx.qr_zone.selection() {
            Some(file) => AnalysisRequest::qr(file.name.clone(), file.bytes.clone()),
            None => {
                ctx.flows
                    .get_mut(kind)
                    .present_failure(&ApiError::EmptyInput(kind));
                return Task::none();
            }
        },
    };

    let flow = ctx.flows.get_mut(kind);
    if let Err(error) = request.validate() {
        flow.present_failure(&error);
        return Task::none();
    }

    flow.begin();
    let client = ctx.client.clone();
    Task::perform(async move { client.analyze(request).await }, move |result| {
        Message::AnalysisCompleted { kind, result }
    })
}

/// Renders the settled outcome and unlocks the control. Any rendered
/// verdict bumps the shared scans counter, independent of which kind
/// produced it.
pub fn handle_analysis_completed(
    ctx: &mut UpdateContext<'_>,
    kind: AnalysisKind,
    result: Result<AnalysisReport, ApiError>,
) {
    if ctx.flows.get_mut(kind).finish(result) {
        ctx.counters.scans.bump();
    }
}

/// Opens the native file chooser for the QR drop zone.
pub fn handle_browse_qr(_ctx: &mut UpdateContext<'_>) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title("Select a QR code image")
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::QrFileChosen,
    )
}

pub fn handle_qr_file_chosen(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) {
    ctx.qr_zone.adopt_chosen(path);
}

pub fn handle_qr_files_dropped(ctx: &mut UpdateContext<'_>, paths: Vec<PathBuf>) {
    ctx.qr_zone.adopt_dropped(&paths);
}

/// Flips the effective theme and persists the now-explicit preference.
pub fn handle_theme_toggled(ctx: &mut UpdateContext<'_>) {
    let next = theming::toggle(*ctx.dark);
    *ctx.dark = next == ThemeMode::Dark;
    ctx.config.general.theme_mode = next;

    if let Some(path) = ctx.config_path {
        if let Err(e) = config::save_to_path(ctx.config, path) {
            tracing::warn!(error = %e, "could not persist theme preference");
        }
    }
}

pub fn handle_health_checked(
    ctx: &mut UpdateContext<'_>,
    result: Result<HealthReport, ApiError>,
) {
    *ctx.backend = match result {
        Ok(health) => {
            tracing::info!(status = %health.status, "backend reachable");
            BackendStatus::Online(health)
        }
        Err(_) => BackendStatus::Unreachable,
    };
}

/// Advances the counter tween and, while any request is in flight, the
/// busy-spinner rotation. Finished counters ignore the tick.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) {
    ctx.counters.tick();
    if ctx.flows.any_busy() {
        *ctx.spinner_rotation += ROTATION_STEP;
    }
}
