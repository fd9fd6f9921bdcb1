// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the PhishX detection service.
//!
//! The client owns a reqwest connection pool and the resolved base
//! address. Each analysis kind maps to its own endpoint: email and URL
//! evidence travel as small JSON bodies, QR images as a multipart upload.
//! Interpretation of the transport result is factored into
//! [`interpret_body`] so the status/body handling stays testable without
//! a live server.

use super::types::{
    AnalysisKind, AnalysisReport, AnalysisRequest, ApiError, ErrorBody, HealthReport,
};
use serde::Serialize;

/// Default backend address, used when neither the `--api-url` flag nor
/// the config file provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const USER_AGENT: &str = concat!("PhishX/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct EmailBody<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct UrlBody<'a> {
    url: &'a str,
}

/// Client for the remote classification service.
#[derive(Debug, Clone)]
pub struct DetectorClient {
    http: reqwest::Client,
    base_url: String,
}

impl DetectorClient {
    /// Creates a client for the given base address. A trailing slash on
    /// the address is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self { http, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits one unit of evidence and returns the verdict.
    ///
    /// Validation runs first and is synchronous: an empty payload returns
    /// `ApiError::EmptyInput` without issuing any request. The method has
    /// no UI side effects and no cancellation; once dispatched, the
    /// request runs to completion or transport failure.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, ApiError> {
        request.validate()?;

        let kind = request.kind();
        let endpoint = format!("{}{}", self.base_url, kind.endpoint_path());

        let sent = match request {
            AnalysisRequest::Email { text } => {
                self.http
                    .post(&endpoint)
                    .json(&EmailBody { text: &text })
                    .send()
                    .await
            }
            AnalysisRequest::Url { url } => {
                self.http
                    .post(&endpoint)
                    .json(&UrlBody { url: &url })
                    .send()
                    .await
            }
            AnalysisRequest::Qr { file_name, bytes } => {
                let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                let form = reqwest::multipart::Form::new().part("image", part);
                self.http.post(&endpoint).multipart(form).send().await
            }
        };

        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(endpoint = %endpoint, error = %e, "detection request failed");
                return Err(ApiError::Unreachable);
            }
        };

        let success = response.status().is_success();
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(endpoint = %endpoint, error = %e, "response body unreadable");
                return Err(ApiError::Unreachable);
            }
        };
        tracing::debug!(endpoint = %endpoint, %status, "detection response received");

        interpret_body(kind, success, &body)
    }

    /// Probes the backend's health endpoint.
    pub async fn health(&self) -> Result<HealthReport, ApiError> {
        let endpoint = format!("{}/health", self.base_url);
        let response = match self.http.get(&endpoint).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(endpoint = %endpoint, error = %e, "health probe failed");
                return Err(ApiError::Unreachable);
            }
        };
        if !response.status().is_success() {
            return Err(ApiError::Rejected(format!(
                "Health check returned status {}",
                response.status()
            )));
        }
        response.json().await.map_err(|_| ApiError::Unreachable)
    }
}

impl Default for DetectorClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Interprets a settled HTTP exchange.
///
/// A success status parses as an [`AnalysisReport`]; a success body that
/// does not parse counts as a transport failure. A non-success status is
/// searched for an embedded `error` message and falls back to a
/// kind-specific generic message.
pub(crate) fn interpret_body(
    kind: AnalysisKind,
    success: bool,
    body: &str,
) -> Result<AnalysisReport, ApiError> {
    if success {
        serde_json::from_str(body).map_err(|e| {
            tracing::warn!(error = %e, "unparseable success payload");
            ApiError::Unreachable
        })
    } else {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error: Some(message) }) if !message.is_empty() => {
                Err(ApiError::Rejected(message))
            }
            _ => Err(ApiError::Rejected(kind.rejected_fallback().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = DetectorClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn success_body_parses_as_report() {
        let report = interpret_body(
            AnalysisKind::Email,
            true,
            r#"{"result":"Legitimate","confidence":"92.4%","raw_confidence":92.4}"#,
        )
        .expect("report");
        assert!(!report.is_phishing());
        assert_eq!(report.confidence, "92.4%");
    }

    #[test]
    fn rejection_surfaces_the_server_message_verbatim() {
        let err = interpret_body(AnalysisKind::Url, false, r#"{"error":"bad input"}"#)
            .expect_err("rejection");
        match err {
            ApiError::Rejected(message) => assert!(message.contains("bad input")),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn rejection_without_message_uses_kind_fallback() {
        for (kind, fallback) in [
            (AnalysisKind::Email, "Failed to analyze email"),
            (AnalysisKind::Url, "Failed to analyze URL"),
            (AnalysisKind::Qr, "Failed to scan QR code"),
        ] {
            let err = interpret_body(kind, false, "{}").expect_err("rejection");
            assert_eq!(err, ApiError::Rejected(fallback.to_string()));

            let err = interpret_body(kind, false, "<html>502</html>").expect_err("rejection");
            assert_eq!(err, ApiError::Rejected(fallback.to_string()));
        }
    }

    #[test]
    fn unparseable_success_body_counts_as_transport_failure() {
        let err = interpret_body(AnalysisKind::Qr, true, "not json").expect_err("failure");
        assert_eq!(err, ApiError::Unreachable);
    }
}
