//! CLI Command Tests
//!
//! Runs parsed commands against card and config files on disk.

use std::io::Write;

use clap::Parser;
use swipedeck_cli::{load_cards, load_config, run, CliArgs};
use tempfile::NamedTempFile;

const CARDS: &str = r#"[
    {"id": "atlas", "title": "Atlas", "description": "Map tiles", "tags": ["rust"]},
    {"id": "beacon", "title": "Beacon", "description": "Status page"},
    {"id": "cinder", "title": "Cinder", "description": "Log shipper", "startYear": 2021}
]"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn run_json(argv: &[&str]) -> serde_json::Value {
    let args = CliArgs::parse_from(argv);
    let output = run(&args).expect("command runs");
    serde_json::from_str(&output).expect("valid json output")
}

// ============================================================================
// Input Loading
// ============================================================================

#[test]
fn test_load_cards_from_file() {
    let file = write_temp(CARDS);
    let cards = load_cards(file.path()).expect("valid cards");
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[2].start_year, Some(2021));
}

#[test]
fn test_load_cards_rejects_duplicates_and_garbage() {
    let file = write_temp("not json");
    assert!(load_cards(file.path()).is_err());

    let missing = std::path::Path::new("/definitely/not/here.json");
    let err = load_cards(missing).expect_err("missing file");
    assert!(err.to_string().contains("Failed to read cards"));
}

#[test]
fn test_load_config_overrides_defaults() {
    let file = write_temp(r#"{"stack": {"settle_delay_ms": 500}}"#);
    let config = load_config(Some(file.path())).expect("valid config");
    assert_eq!(config.stack.settle_delay_ms, 500);
    assert_eq!(config.stack.visible_count, 3);
}

#[test]
fn test_load_config_rejects_invalid_values() {
    let file = write_temp(r#"{"stack": {"visible_count": 0}}"#);
    assert!(load_config(Some(file.path())).is_err());
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_layout_command_hysteresis() {
    let cold = run_json(&["swipedeck", "layout", "--width", "700", "--height", "564"]);
    assert_eq!(cold["orientation"], "portrait");

    let held = run_json(&[
        "swipedeck", "layout", "--width", "700", "--height", "564", "--current", "landscape",
    ]);
    assert_eq!(held["orientation"], "landscape");

    let phone = run_json(&["swipedeck", "layout", "--width", "375", "--height", "667"]);
    assert_eq!(phone["orientation"], "compact");
}

#[test]
fn test_simulate_owned_session() {
    let cards = write_temp(CARDS);
    let path = cards.path().to_str().expect("utf-8 path");
    let report = run_json(&[
        "swipedeck", "simulate", "--cards", path, "--swipes", "right,left",
    ]);

    let events = report["events"].as_array().expect("events array");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["event"], "swiped");
    assert_eq!(events[0]["card"]["id"], "cinder");
    assert_eq!(events[1]["card"]["id"], "beacon");
    assert_eq!(report["visible"], serde_json::json!(["atlas"]));
    assert_eq!(report["ledger"]["liked"], serde_json::json!(["cinder"]));
}

#[test]
fn test_simulate_external_dismissed_view() {
    let cards = write_temp(CARDS);
    let config = write_temp(r#"{"stack": {"settle_delay_ms": 250}}"#);
    let report = run_json(&[
        "swipedeck",
        "--config",
        config.path().to_str().expect("utf-8 path"),
        "simulate",
        "--cards",
        cards.path().to_str().expect("utf-8 path"),
        "--swipes",
        "left,right,left",
        "--external",
        "--then-view",
        "dismissed",
    ]);

    assert_eq!(report["view"], "dismissed");
    assert_eq!(report["visible"], serde_json::json!(["atlas", "cinder"]));
    let empties = report["events"]
        .as_array()
        .expect("events array")
        .iter()
        .filter(|e| e["event"] == "stack_empty")
        .count();
    assert_eq!(empties, 1);
}

#[test]
fn test_simulate_view_requires_external() {
    let cards = write_temp(CARDS);
    let args = CliArgs::parse_from([
        "swipedeck",
        "simulate",
        "--cards",
        cards.path().to_str().expect("utf-8 path"),
        "--then-view",
        "liked",
    ]);
    assert!(run(&args).is_err());
}

#[test]
fn test_render_command_stacks_three_cards() {
    let cards = write_temp(CARDS);
    let model = run_json(&[
        "swipedeck",
        "render",
        "--cards",
        cards.path().to_str().expect("utf-8 path"),
        "--width",
        "1920",
        "--height",
        "1080",
    ]);

    let rendered = model["cards"].as_array().expect("cards array");
    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered[0]["card"]["id"], "cinder");
    assert_eq!(rendered[0]["draggable"], true);
    assert_eq!(rendered[1]["draggable"], false);
    assert_eq!(model["layout"]["orientation"], "portrait");
}
