// SPDX-License-Identifier: MPL-2.0
//! Client-side interface to the remote PhishX classification service.
//!
//! The service is an opaque black box: this module only knows the three
//! endpoint shapes, the verdict payload, and the failure taxonomy. How
//! phishing is detected stays server-side.

mod client;
mod types;

pub use client::{DetectorClient, DEFAULT_BASE_URL};
pub use types::{
    AnalysisKind, AnalysisReport, AnalysisRequest, ApiError, HealthReport, PHISHING_VERDICT,
    UNREACHABLE_MESSAGE,
};
