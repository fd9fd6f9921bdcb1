// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{AnalysisKind, AnalysisReport, ApiError, HealthReport};
use iced::widget::text_editor;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. One enum keeps a single
/// update entrypoint for every user action and async completion.
#[derive(Debug, Clone)]
pub enum Message {
    /// Edit action inside the email text area.
    EmailEdited(text_editor::Action),
    /// The URL input changed.
    UrlEdited(String),
    /// One of the three submit controls was pressed.
    SubmitPressed(AnalysisKind),
    /// An analysis task settled (success or failure).
    AnalysisCompleted {
        kind: AnalysisKind,
        result: Result<AnalysisReport, ApiError>,
    },
    /// The QR drop surface was clicked; open the native file chooser.
    BrowseQrFile,
    /// Result from the file chooser (`None` when cancelled).
    QrFileChosen(Option<PathBuf>),
    /// Files were dropped on the window.
    QrFilesDropped(Vec<PathBuf>),
    /// A drag entered the window (cosmetic highlight only).
    QrFileHovered,
    /// The drag left the window without dropping.
    QrHoverLeft,
    /// The navbar theme toggle was activated.
    ThemeToggled,
    /// Result of the startup backend health probe.
    HealthChecked(Result<HealthReport, ApiError>),
    /// Animation tick shared by the counter tween and the busy spinner.
    Tick,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional backend address override, e.g. `http://10.0.0.2:5000`.
    pub api_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
