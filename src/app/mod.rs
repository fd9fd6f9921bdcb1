// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the three analysis flows, the animated
//! counters, and the theme preference to the Iced runtime. Policy
//! decisions (base address resolution, theme persistence, the
//! lock/unlock bracket around dispatch) stay close to the update loop so
//! user-facing behavior is easy to audit.

pub mod counters;
pub mod flows;
mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{DetectorClient, HealthReport, DEFAULT_BASE_URL};
use crate::config::{self, Config};
use counters::StatCounters;
use flows::{DropZone, Flows};
use iced::widget::text_editor;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 880;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Reachability of the detection backend, probed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online(HealthReport),
    Unreachable,
}

/// Root Iced application state.
pub struct App {
    config: Config,
    config_path: Option<PathBuf>,
    client: DetectorClient,
    flows: Flows,
    email_content: text_editor::Content,
    url_input: String,
    qr_zone: DropZone,
    counters: StatCounters,
    backend: BackendStatus,
    /// Effective appearance, resolved once at startup (config preference,
    /// falling back to the OS color scheme).
    dark: bool,
    spinner_rotation: f32,
}

impl Default for App {
    fn default() -> Self {
        Self {
            config: Config::default(),
            config_path: None,
            client: DetectorClient::default(),
            flows: Flows::default(),
            email_content: text_editor::Content::new(),
            url_input: String::new(),
            qr_zone: DropZone::default(),
            counters: StatCounters::startup(),
            backend: BackendStatus::Checking,
            dark: true,
            spinner_rotation: 0.0,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the backend health
    /// probe.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_path = config::resolve_path(flags.config_dir.as_deref());
        let config = config::load_or_default(config_path.as_deref());

        let base_url = flags
            .api_url
            .clone()
            .or_else(|| config.api.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let client = DetectorClient::new(base_url);
        tracing::info!(base_url = %client.base_url(), "detection backend resolved");

        let dark = config.general.theme_mode.is_dark();

        let app = App {
            config,
            config_path,
            client: client.clone(),
            dark,
            ..App::default()
        };

        let task = Task::perform(
            async move { client.health().await },
            Message::HealthChecked,
        );

        (app, task)
    }

    fn title(&self) -> String {
        "PhishX - Phishing Detection".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = subscription::create_event_subscription();
        let ticks = subscription::create_tick_subscription(
            self.counters.any_animating() || self.flows.any_busy(),
        );

        Subscription::batch([events, ticks])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            flows: &mut self.flows,
            email_content: &mut self.email_content,
            url_input: &mut self.url_input,
            qr_zone: &mut self.qr_zone,
            counters: &mut self.counters,
            config: &mut self.config,
            config_path: self.config_path.as_ref(),
            client: &self.client,
            backend: &mut self.backend,
            dark: &mut self.dark,
            spinner_rotation: &mut self.spinner_rotation,
        };

        match message {
            Message::EmailEdited(action) => {
                update::handle_email_edited(&mut ctx, action);
                Task::none()
            }
            Message::UrlEdited(value) => {
                update::handle_url_edited(&mut ctx, value);
                Task::none()
            }
            Message::SubmitPressed(kind) => update::handle_submit(&mut ctx, kind),
            Message::AnalysisCompleted { kind, result } => {
                update::handle_analysis_completed(&mut ctx, kind, result);
                Task::none()
            }
            Message::BrowseQrFile => update::handle_browse_qr(&mut ctx),
            Message::QrFileChosen(path) => {
                update::handle_qr_file_chosen(&mut ctx, path);
                Task::none()
            }
            Message::QrFilesDropped(paths) => {
                update::handle_qr_files_dropped(&mut ctx, paths);
                Task::none()
            }
            Message::QrFileHovered => {
                ctx.qr_zone.set_hovering(true);
                Task::none()
            }
            Message::QrHoverLeft => {
                ctx.qr_zone.set_hovering(false);
                Task::none()
            }
            Message::ThemeToggled => {
                update::handle_theme_toggled(&mut ctx);
                Task::none()
            }
            Message::HealthChecked(result) => {
                update::handle_health_checked(&mut ctx, result);
                Task::none()
            }
            Message::Tick => {
                update::handle_tick(&mut ctx);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            flows: &self.flows,
            email_content: &self.email_content,
            url_input: &self.url_input,
            qr_zone: &self.qr_zone,
            counters: &self.counters,
            backend: &self.backend,
            dark: self.dark,
            spinner_rotation: self.spinner_rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AnalysisKind, AnalysisReport, ApiError};
    use crate::app::flows::Outcome;
    use crate::ui::theming::ThemeMode;

    fn report(verdict: &str) -> AnalysisReport {
        serde_json::from_str(&format!(
            r#"{{"result":"{verdict}","confidence":"95.0%"}}"#
        ))
        .expect("report")
    }

    #[test]
    fn starts_with_all_counters_animating() {
        let app = App::default();
        assert!(app.counters.any_animating());
        assert!(!app.flows.any_busy());
        assert_eq!(app.backend, BackendStatus::Checking);
    }

    #[test]
    fn empty_url_submit_presents_validation_failure_without_locking() {
        let mut app = App::default();
        let _ = app.update(Message::UrlEdited("   ".to_string()));
        let _ = app.update(Message::SubmitPressed(AnalysisKind::Url));

        assert!(!app.flows.url.is_busy());
        assert_eq!(
            app.flows.url.outcome(),
            Some(&Outcome::Failure(
                "Please enter a URL to analyze.".to_string()
            ))
        );
    }

    #[test]
    fn qr_submit_without_selection_presents_validation_failure() {
        let mut app = App::default();
        let _ = app.update(Message::SubmitPressed(AnalysisKind::Qr));

        assert!(!app.flows.qr.is_busy());
        assert_eq!(
            app.flows.qr.outcome(),
            Some(&Outcome::Failure(
                "Please select a QR code image to scan.".to_string()
            ))
        );
    }

    #[test]
    fn valid_submit_locks_the_flow_until_completion() {
        let mut app = App::default();
        let _ = app.update(Message::UrlEdited("http://example.com".to_string()));
        let _ = app.update(Message::SubmitPressed(AnalysisKind::Url));
        assert!(app.flows.url.is_busy());

        let _ = app.update(Message::AnalysisCompleted {
            kind: AnalysisKind::Url,
            result: Ok(report("Legitimate")),
        });
        assert!(!app.flows.url.is_busy());
        assert!(matches!(
            app.flows.url.outcome(),
            Some(Outcome::Report(_))
        ));
    }

    #[test]
    fn successful_render_bumps_the_shared_scans_counter() {
        let mut app = App::default();
        assert_eq!(app.counters.scans.display(), "0");

        let _ = app.update(Message::AnalysisCompleted {
            kind: AnalysisKind::Email,
            result: Ok(report("Phishing")),
        });
        assert_eq!(app.counters.scans.display(), "1");

        // failures never touch the counter
        let _ = app.update(Message::AnalysisCompleted {
            kind: AnalysisKind::Email,
            result: Err(ApiError::Unreachable),
        });
        assert_eq!(app.counters.scans.display(), "1");
    }

    #[test]
    fn failure_completion_unlocks_and_presents_the_error() {
        let mut app = App::default();
        let _ = app.update(Message::UrlEdited("http://example.com".to_string()));
        let _ = app.update(Message::SubmitPressed(AnalysisKind::Url));

        let _ = app.update(Message::AnalysisCompleted {
            kind: AnalysisKind::Url,
            result: Err(ApiError::Rejected("bad input".to_string())),
        });

        assert!(!app.flows.url.is_busy());
        assert_eq!(
            app.flows.url.outcome(),
            Some(&Outcome::Failure("bad input".to_string()))
        );
    }

    #[test]
    fn theme_toggle_flips_appearance_and_records_explicit_preference() {
        let mut app = App::default();
        app.dark = true;

        let _ = app.update(Message::ThemeToggled);
        assert!(!app.dark);
        assert_eq!(app.config.general.theme_mode, ThemeMode::Light);
        assert_eq!(app.theme(), Theme::Light);

        let _ = app.update(Message::ThemeToggled);
        assert!(app.dark);
        assert_eq!(app.config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn hover_messages_only_toggle_the_highlight() {
        let mut app = App::default();
        let _ = app.update(Message::QrFileHovered);
        assert!(app.qr_zone.is_hovering());
        let _ = app.update(Message::QrHoverLeft);
        assert!(!app.qr_zone.is_hovering());
        assert!(app.qr_zone.selection().is_none());
    }

    #[test]
    fn tick_advances_counters_and_eventually_stops_needing_the_timer() {
        let mut app = App::default();
        let mut guard = 0;
        while app.counters.any_animating() {
            let _ = app.update(Message::Tick);
            guard += 1;
            assert!(guard < 300, "tween failed to terminate");
        }
        assert_eq!(app.counters.scans.display(), "12,482");
        assert_eq!(app.counters.users.display(), "8,200");
        assert_eq!(app.counters.orgs.display(), "450");
    }
}
