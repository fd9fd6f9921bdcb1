// SPDX-License-Identifier: MPL-2.0
use phishx::api::{
    AnalysisKind, AnalysisRequest, ApiError, DetectorClient, DEFAULT_BASE_URL,
    UNREACHABLE_MESSAGE,
};
use phishx::app::counters::{group_digits, Counter, StatCounters};
use phishx::app::flows::{DropZone, Flow, Outcome};
use phishx::config::{self, Config};
use phishx::ui::theming::ThemeMode;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn theme_preference_round_trips_through_the_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // First run: nothing persisted yet, the system default applies
    let initial = config::load_or_default(Some(&config_path));
    assert_eq!(initial.general.theme_mode, ThemeMode::System);

    // The user toggles to an explicit choice, which is written out
    let mut config = initial;
    config.general.theme_mode = ThemeMode::Light;
    config::save_to_path(&config, &config_path).expect("Failed to save config");

    // Next startup reads the explicit choice back
    let reloaded = config::load_or_default(Some(&config_path));
    assert_eq!(reloaded.general.theme_mode, ThemeMode::Light);
    assert!(!reloaded.general.theme_mode.is_dark());
}

#[test]
fn api_base_url_can_be_pinned_in_the_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        api: phishx::config::ApiConfig {
            base_url: Some("http://detector.internal:5000/".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &config_path).expect("Failed to save config");

    let reloaded = config::load_or_default(Some(&config_path));
    let client = DetectorClient::new(
        reloaded
            .api
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    );
    assert_eq!(client.base_url(), "http://detector.internal:5000");
}

// Empty input must fail validation before any network activity: even with
// an unroutable backend the outcome is the validation failure, not the
// network one.
#[tokio::test]
async fn empty_input_short_circuits_before_any_network_attempt() {
    let client = DetectorClient::new("http://127.0.0.1:9");

    let outcome = client.analyze(AnalysisRequest::email("   \n ")).await;
    assert_eq!(outcome, Err(ApiError::EmptyInput(AnalysisKind::Email)));

    let outcome = client.analyze(AnalysisRequest::url("\t")).await;
    assert_eq!(outcome, Err(ApiError::EmptyInput(AnalysisKind::Url)));

    let outcome = client
        .analyze(AnalysisRequest::qr("empty.png", Vec::new()))
        .await;
    assert_eq!(outcome, Err(ApiError::EmptyInput(AnalysisKind::Qr)));
}

#[tokio::test]
async fn unreachable_backend_yields_the_fixed_network_failure() {
    let client = DetectorClient::new("http://127.0.0.1:9");

    let outcome = client
        .analyze(AnalysisRequest::url("http://example.com"))
        .await;
    assert_eq!(outcome, Err(ApiError::Unreachable));

    // The network failure text points at the backend and is distinct from
    // every application-level rejection fallback.
    let message = ApiError::Unreachable.to_string();
    assert_eq!(message, UNREACHABLE_MESSAGE);
    assert!(message.contains("backend server"));
    for kind in [AnalysisKind::Email, AnalysisKind::Url, AnalysisKind::Qr] {
        assert_ne!(message, kind.rejected_fallback());
    }
}

#[test]
fn a_full_flow_bracket_ends_with_the_control_restored() {
    let mut flow = Flow::new(AnalysisKind::Email);
    let mut counters = StatCounters::startup();
    let resting_label = flow.submit_label();

    flow.begin();
    assert!(flow.is_busy());

    let rendered = flow.finish(Ok(serde_json::from_str(
        r#"{"result":"Phishing","confidence":"97.3%"}"#,
    )
    .expect("report")));

    // exactly one outcome panel, and the render bumps the shared counter
    assert!(rendered);
    counters.scans.bump();

    assert!(!flow.is_busy());
    assert_eq!(flow.submit_label(), resting_label);
    assert!(matches!(flow.outcome(), Some(Outcome::Report(_))));
    assert_eq!(counters.scans.display(), "1");
}

#[test]
fn startup_tween_lands_exactly_on_the_targets_and_bump_continues_from_there() {
    let mut counters = StatCounters::startup();
    while counters.any_animating() {
        counters.tick();
    }
    assert_eq!(counters.scans.display(), "12,482");
    assert_eq!(counters.users.display(), "8,200");
    assert_eq!(counters.orgs.display(), "450");

    counters.scans.bump();
    assert_eq!(counters.scans.display(), "12,483");
    // the other counters never move after their tween
    assert_eq!(counters.users.display(), "8,200");
}

// The shared scans counter is bumped via read-parse-write on the
// displayed text. Sequential bumps add up; nothing serializes two
// completions racing on the same frame, which is a known, accepted
// under-count.
#[test]
fn bump_uses_read_parse_write_semantics_on_the_displayed_text() {
    let mut counter = Counter::animate(1_234);
    while counter.is_animating() {
        counter.tick();
    }
    assert_eq!(counter.display(), "1,234");
    counter.bump();
    assert_eq!(counter.display(), "1,235");

    assert_eq!(group_digits(999), "999");
    assert_eq!(group_digits(1_000), "1,000");
}

#[test]
fn qr_selection_keeps_exactly_one_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let write = |name: &str, contents: &[u8]| {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(contents).expect("write file");
        path
    };

    let mut zone = DropZone::default();

    // chooser pick
    zone.adopt_chosen(Some(write("first.png", b"one")));
    assert_eq!(zone.filename_label().as_deref(), Some("Selected: first.png"));

    // a two-file drop adopts only the first, replacing the previous pick
    let a = write("a.png", b"aaa");
    let b = write("b.png", b"bbb");
    assert!(zone.adopt_dropped(&[a, b]));
    let selected = zone.selection().expect("selection");
    assert_eq!(selected.name, "a.png");
    assert_eq!(selected.bytes, b"aaa");

    // an empty drop and a cancelled chooser both keep the selection
    assert!(!zone.adopt_dropped(&[]));
    assert!(!zone.adopt_chosen(None));
    assert_eq!(zone.selection().expect("selection").name, "a.png");
}
