// SPDX-License-Identifier: MPL-2.0
//! Per-kind analysis flow state and the QR file selection controller.
//!
//! A [`Flow`] carries the lock/unlock bracket around one asynchronous
//! analysis: `begin` disables the submit control and swaps its label for
//! the busy text, `finish` records the outcome and restores the control
//! unconditionally. The completion message is always delivered by the
//! spawned task, so restoration happens on both exit paths.

use crate::api::{AnalysisKind, AnalysisReport, ApiError};
use std::path::{Path, PathBuf};

/// Fixed label shown on a locked submit control.
pub const BUSY_LABEL: &str = "Analyzing...";

/// What the last analysis of a flow produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Report(AnalysisReport),
    Failure(String),
}

/// State of one analysis flow (email, URL, or QR).
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    kind: AnalysisKind,
    busy: bool,
    outcome: Option<Outcome>,
}

impl Flow {
    #[must_use]
    pub fn new(kind: AnalysisKind) -> Self {
        Self {
            kind,
            busy: false,
            outcome: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> AnalysisKind {
        self.kind
    }

    /// Whether the submit control is locked.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The control's resting label. The view derives the visible label
    /// from `is_busy`, so unlocking restores exactly this text.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.kind {
            AnalysisKind::Email => "Analyze Email",
            AnalysisKind::Url => "Check URL",
            AnalysisKind::Qr => "Scan Image",
        }
    }

    /// Presents a failure without ever locking the control. Used for
    /// validation failures, which short-circuit before dispatch.
    pub fn present_failure(&mut self, error: &ApiError) {
        self.outcome = Some(Outcome::Failure(error.to_string()));
    }

    /// Locks the submit control for the duration of a dispatch.
    pub fn begin(&mut self) {
        self.busy = true;
    }

    /// Records the settled result and unlocks the control on both the
    /// success and failure paths. Returns `true` when a report was
    /// rendered, i.e. when the shared scans counter must be bumped.
    pub fn finish(&mut self, result: Result<AnalysisReport, ApiError>) -> bool {
        let rendered_report = result.is_ok();
        self.outcome = Some(match result {
            Ok(report) => Outcome::Report(report),
            Err(error) => Outcome::Failure(error.to_string()),
        });
        self.busy = false;
        rendered_report
    }
}

/// The three flows, one per analysis kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Flows {
    pub email: Flow,
    pub url: Flow,
    pub qr: Flow,
}

impl Flows {
    #[must_use]
    pub fn get(&self, kind: AnalysisKind) -> &Flow {
        match kind {
            AnalysisKind::Email => &self.email,
            AnalysisKind::Url => &self.url,
            AnalysisKind::Qr => &self.qr,
        }
    }

    pub fn get_mut(&mut self, kind: AnalysisKind) -> &mut Flow {
        match kind {
            AnalysisKind::Email => &mut self.email,
            AnalysisKind::Url => &mut self.url,
            AnalysisKind::Qr => &mut self.qr,
        }
    }

    /// Whether any dispatch is in flight (drives the spinner tick).
    #[must_use]
    pub fn any_busy(&self) -> bool {
        self.email.is_busy() || self.url.is_busy() || self.qr.is_busy()
    }
}

impl Default for Flows {
    fn default() -> Self {
        Self {
            email: Flow::new(AnalysisKind::Email),
            url: Flow::new(AnalysisKind::Url),
            qr: Flow::new(AnalysisKind::Qr),
        }
    }
}

/// A file adopted for QR analysis. At most one is live at a time; a new
/// selection replaces the prior one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Drop-surface state for the QR panel.
///
/// Once a file has been selected the zone never returns to the empty
/// state; hover events only toggle the cosmetic highlight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropZone {
    selection: Option<SelectedFile>,
    hovering: bool,
}

impl DropZone {
    #[must_use]
    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Adopts the first file of a dropped batch; an empty batch leaves the
    /// prior selection unchanged. Clears the hover highlight either way.
    pub fn adopt_dropped(&mut self, paths: &[PathBuf]) -> bool {
        self.hovering = false;
        match paths.first() {
            Some(path) => self.adopt(path),
            None => false,
        }
    }

    /// Adopts the file chosen in the native dialog; a cancelled dialog
    /// leaves the prior selection unchanged.
    pub fn adopt_chosen(&mut self, path: Option<PathBuf>) -> bool {
        match path {
            Some(path) => self.adopt(&path),
            None => false,
        }
    }

    fn adopt(&mut self, path: &Path) -> bool {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        match std::fs::read(path) {
            Ok(bytes) => {
                self.selection = Some(SelectedFile { name, bytes });
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read selected file");
                false
            }
        }
    }

    /// Label shown under the drop surface once a file is selected.
    #[must_use]
    pub fn filename_label(&self) -> Option<String> {
        self.selection
            .as_ref()
            .map(|file| format!("Selected: {}", file.name))
    }
}
