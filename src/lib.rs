// SPDX-License-Identifier: MPL-2.0
//! `phishx` is a desktop client for the PhishX phishing-detection
//! service, built with the Iced GUI framework.
//!
//! It submits pasted email text, URLs, or QR-code images to the remote
//! classification backend and renders the verdict, with animated
//! statistics counters and a persisted theme preference.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
