//! Subcommands run against the sample snapshot written to disk.

use care_cli::{command, execute, CliConfig};
use care_test_utils::SAMPLE_SNAPSHOT_JSON;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    snapshot: String,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facility.json");
        std::fs::write(&path, SAMPLE_SNAPSHOT_JSON).unwrap();
        Self {
            snapshot: path.to_string_lossy().into_owned(),
            _dir: dir,
        }
    }

    fn run_with(&self, config: &CliConfig, args: &[&str]) -> anyhow::Result<String> {
        let (sub, rest) = args.split_first().unwrap();
        let mut argv = vec!["carehome", sub, "--snapshot", self.snapshot.as_str()];
        argv.extend_from_slice(rest);
        let matches = command().try_get_matches_from(argv)?;
        execute(&matches, config)
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        self.run_with(&CliConfig::default(), args)
    }

    fn json(&self, args: &[&str]) -> Value {
        let mut args = args.to_vec();
        args.push("--json");
        serde_json::from_str(&self.run(&args).unwrap()).unwrap()
    }
}

fn strings(value: &Value, field: &str) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|row| match &row[field] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

#[test]
fn rooms_respect_resident_gender() {
    let fx = Fixture::new();

    let female = fx.json(&["rooms", "--room-type", "double", "--resident", "1"]);
    assert_eq!(strings(&female, "room_number"), vec!["201", "202"]);
    assert_eq!(strings(&female, "available_beds"), vec!["1", "2"]);

    let male = fx.json(&["rooms", "--room-type", "double", "--gender", "MALE"]);
    assert_eq!(strings(&male, "room_id"), vec!["20"]);
}

#[test]
fn rooms_text_reports_empty_result() {
    let fx = Fixture::new();
    let out = fx
        .run(&["rooms", "--room-type", "single", "--resident", "2"])
        .unwrap();
    assert_eq!(out, "no eligible single rooms\n");
}

#[test]
fn beds_are_labelled() {
    let fx = Fixture::new();

    let quad = fx.json(&["beds", "--room", "30"]);
    assert_eq!(strings(&quad, "label"), vec!["305-A", "305-B"]);
    assert_eq!(strings(&quad, "synthesized"), vec!["true", "true"]);

    let text = fx.run(&["beds", "--room", "21", "--gender", "female"]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("202-A"));
    assert!(lines[1].starts_with("Window"));
}

#[test]
fn room_types_follow_configured_strategies() {
    let fx = Fixture::new();

    let all = fx.json(&["room-types", "--resident", "3"]);
    assert_eq!(strings(&all, "room_type"), vec!["single", "double", "quad"]);
    assert_eq!(strings(&all, "eligible_beds"), vec!["1", "3", "2"]);

    let config = CliConfig::from_toml_str(
        "[resolver]\nstrategies = [\"by_room_id\", \"by_room_number\"]",
    )
    .unwrap();
    let out = fx
        .run_with(&config, &["room-types", "--resident", "3", "--json"])
        .unwrap();
    let no_synthesis: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(strings(&no_synthesis, "eligible_beds"), vec!["1", "3", "0"]);
}

#[test]
fn plans_lists_active_main_first() {
    let fx = Fixture::new();
    let out = fx.run(&["plans"]).unwrap();
    let names: Vec<&str> = out
        .lines()
        .map(|line| line.rsplit("  ").next().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Standard Care", "Memory Care", "Physiotherapy", "Hairdressing"]
    );
}

#[test]
fn register_prints_request() {
    let fx = Fixture::new();
    let out = fx
        .run(&[
            "register", "--resident", "1", "--room-type", "double", "--room", "21", "--bed",
            "211", "--plan", "1002", "--plan", "1000", "--start", "2025-03-01",
        ])
        .unwrap();
    let request: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(request["bed_id"], "211");
    assert_eq!(request["bed_label"], "Window");
    assert_eq!(request["care_plan_ids"], serde_json::json!(["1000", "1002"]));
    assert_eq!(request["monthly_total"], 2050.0);
    assert_eq!(request["start_date"], "2025-03-01");
    assert!(request.get("end_date").is_none());
}

#[test]
fn register_rejects_ineligible_room() {
    let fx = Fixture::new();
    let err = fx
        .run(&[
            "register", "--resident", "2", "--room-type", "double", "--room", "21", "--bed",
            "211", "--plan", "1000", "--start", "2025-03-01",
        ])
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("selecting room:"), "{message}");
    assert!(message.contains("202"), "{message}");
}

#[test]
fn unknown_resident_is_an_error() {
    let fx = Fixture::new();
    let err = fx
        .run(&["rooms", "--room-type", "double", "--resident", "99"])
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown resident 99");
}

#[test]
fn missing_snapshot_is_an_error() {
    let matches = command()
        .try_get_matches_from(["carehome", "plans", "--snapshot", "/nonexistent/facility.json"])
        .unwrap();
    let err = execute(&matches, &CliConfig::default()).unwrap_err();
    assert!(err.to_string().starts_with("loading snapshot"));
}
