// SPDX-License-Identifier: MPL-2.0
//! Request/response types and the failure taxonomy for the detection API.

use serde::Deserialize;
use std::fmt;

/// The verdict string the backend uses to mark an adverse classification.
/// Anything else (including future verdict strings) renders as legitimate.
pub const PHISHING_VERDICT: &str = "Phishing";

/// Fixed message shown when no response was obtained at all. Kept distinct
/// from every `Rejected` message so connectivity problems are
/// recognizable as such.
pub const UNREACHABLE_MESSAGE: &str =
    "Network error. Please ensure the backend server is running.";

/// One of the three input modalities the service classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    Email,
    Url,
    Qr,
}

impl AnalysisKind {
    /// Endpoint path under the resolved base address.
    #[must_use]
    pub fn endpoint_path(self) -> &'static str {
        match self {
            AnalysisKind::Email => "/detect/email",
            AnalysisKind::Url => "/detect/url",
            AnalysisKind::Qr => "/detect/qr",
        }
    }

    /// Message shown when the user submits without any input.
    #[must_use]
    pub fn empty_input_message(self) -> &'static str {
        match self {
            AnalysisKind::Email => "Please enter email content to analyze.",
            AnalysisKind::Url => "Please enter a URL to analyze.",
            AnalysisKind::Qr => "Please select a QR code image to scan.",
        }
    }

    /// Fallback message for a rejection whose body carried no `error` field.
    #[must_use]
    pub fn rejected_fallback(self) -> &'static str {
        match self {
            AnalysisKind::Email => "Failed to analyze email",
            AnalysisKind::Url => "Failed to analyze URL",
            AnalysisKind::Qr => "Failed to scan QR code",
        }
    }
}

/// A validated unit of evidence ready for dispatch. Text payloads are
/// trimmed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    Email { text: String },
    Url { url: String },
    Qr { file_name: String, bytes: Vec<u8> },
}

impl AnalysisRequest {
    pub fn email(text: impl AsRef<str>) -> Self {
        AnalysisRequest::Email {
            text: text.as_ref().trim().to_string(),
        }
    }

    pub fn url(url: impl AsRef<str>) -> Self {
        AnalysisRequest::Url {
            url: url.as_ref().trim().to_string(),
        }
    }

    pub fn qr(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        AnalysisRequest::Qr {
            file_name: file_name.into(),
            bytes,
        }
    }

    #[must_use]
    pub fn kind(&self) -> AnalysisKind {
        match self {
            AnalysisRequest::Email { .. } => AnalysisKind::Email,
            AnalysisRequest::Url { .. } => AnalysisKind::Url,
            AnalysisRequest::Qr { .. } => AnalysisKind::Qr,
        }
    }

    /// Synchronous pre-dispatch validation: an empty payload fails here,
    /// before any network activity.
    pub fn validate(&self) -> Result<(), ApiError> {
        let empty = match self {
            AnalysisRequest::Email { text } => text.is_empty(),
            AnalysisRequest::Url { url } => url.is_empty(),
            AnalysisRequest::Qr { bytes, .. } => bytes.is_empty(),
        };
        if empty {
            Err(ApiError::EmptyInput(self.kind()))
        } else {
            Ok(())
        }
    }
}

/// Successful classification payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisReport {
    pub result: String,
    pub confidence: String,
    #[serde(default)]
    pub raw_confidence: Option<f64>,
    #[serde(default)]
    pub decoded_url: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
}

impl AnalysisReport {
    /// Exact-equality verdict check; every other verdict string is
    /// treated as legitimate.
    #[must_use]
    pub fn is_phishing(&self) -> bool {
        self.result == PHISHING_VERDICT
    }
}

/// Backend self-report from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub email_model_loaded: bool,
    #[serde(default)]
    pub url_model_loaded: bool,
}

/// Body shape of a non-success response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Failure taxonomy for one analysis attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Empty or missing input, caught before any network attempt.
    EmptyInput(AnalysisKind),
    /// The service responded with a non-success status; carries the
    /// server's message when it supplied one, else a kind-specific
    /// fallback.
    Rejected(String),
    /// No response was obtained at all.
    Unreachable,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::EmptyInput(kind) => write!(f, "{}", kind.empty_input_message()),
            ApiError::Rejected(message) => write!(f, "{}", message),
            ApiError::Unreachable => write!(f, "{}", UNREACHABLE_MESSAGE),
        }
    }
}
