mod common;

use common::{TestEnv, SAMPLE};
use predicates::prelude::*;
use predicates::str::contains;

fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[test]
fn generate_then_check_round_trip() {
    let env = TestEnv::new();

    env.cmd()
        .args(["generate", "15", "fixtures.txt", "--seed", "42"])
        .assert()
        .success()
        .stdout(contains("Generating 15 random reports..."))
        .stdout(contains("Generated 15 random reports and saved to fixtures.txt"));

    let text = env.read_input("fixtures.txt");
    assert!(!text.ends_with('\n'));
    assert_eq!(lines(&text).len(), 15);
    for line in lines(&text) {
        let levels: Vec<i64> = line
            .split(' ')
            .map(|t| t.parse().expect("integer level"))
            .collect();
        assert!((3..=20).contains(&levels.len()), "{line}");
    }

    env.cmd()
        .args(["check", "fixtures.txt"])
        .assert()
        .success()
        .stdout(contains("Loaded 15 reports from fixtures.txt"));
}

#[test]
fn same_seed_writes_identical_files() {
    let env = TestEnv::new();
    env.cmd()
        .args(["generate", "30", "a.txt", "--seed", "9"])
        .assert()
        .success();
    env.cmd()
        .args(["generate", "30", "b.txt", "--seed", "9"])
        .assert()
        .success();
    assert_eq!(env.read_input("a.txt"), env.read_input("b.txt"));
}

#[test]
fn generate_defaults_to_twenty_reports_in_input_txt() {
    let env = TestEnv::new();
    env.cmd().arg("generate").assert().success();
    assert_eq!(lines(&env.read_input("input.txt")).len(), 20);
}

#[test]
fn second_argument_as_probability_keeps_default_file() {
    let env = TestEnv::new();
    let summary = env.run_json(&["generate", "12", "1", "--seed", "3", "--verify"]);
    assert_eq!(summary["ok"], true);
    assert_eq!(summary["data"]["file"], "input.txt");
    assert_eq!(summary["data"]["safe_probability"], 1.0);
    assert_eq!(summary["data"]["safe"], 12);
    assert_eq!(summary["data"]["mode"], "verified");

    let check = env.run_json(&["check"]);
    assert_eq!(check["data"]["loaded"], 12);
    assert_eq!(check["data"]["safe"], 12);
}

#[test]
fn verified_zero_probability_yields_only_unsafe_reports() {
    let env = TestEnv::new();
    let summary = env.run_json(&["generate", "25", "bad.txt", "0", "--seed", "5", "--verify"]);
    assert_eq!(summary["data"]["file"], "bad.txt");
    assert_eq!(summary["data"]["safe"], 0);
    assert_eq!(summary["data"]["unsafe"], 25);

    let check = env.run_json(&["check", "bad.txt"]);
    assert_eq!(check["data"]["safe"], 0);
}

#[test]
fn invalid_count_exits_one_without_writing() {
    let env = TestEnv::new();
    for count in ["0", "-4", "many"] {
        env.cmd()
            .args(["generate", count])
            .assert()
            .code(1)
            .stderr(contains(
                "Please provide a valid positive number of reports to generate.",
            ));
    }
    assert!(!env.inputs.join("input.txt").exists());
}

#[test]
fn oversized_count_exits_one_without_writing() {
    let env = TestEnv::new();
    env.cmd()
        .args(["generate", "999999999999999999"])
        .assert()
        .code(1)
        .stdout(contains("Generating").not())
        .stderr(contains("Report count must not exceed 1000000."));
    assert!(!env.inputs.join("input.txt").exists());
}

#[test]
fn invalid_probability_exits_one_without_writing() {
    let env = TestEnv::new();
    env.cmd()
        .args(["generate", "5", "out.txt", "1.7"])
        .assert()
        .code(1)
        .stderr(contains("Safe probability must be a number between 0 and 1."));
    assert!(!env.inputs.join("out.txt").exists());
}

#[test]
fn config_file_supplies_defaults() {
    let env = TestEnv::new();
    env.write_config("[general]\ndefault_input = \"day2.txt\"\ndefault_count = 7\n");

    env.cmd().arg("generate").assert().success();
    assert_eq!(lines(&env.read_input("day2.txt")).len(), 7);

    env.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(contains("Loaded 7 reports from day2.txt"));
}

#[test]
fn broken_config_is_reported() {
    let env = TestEnv::new();
    env.write_config("[general]\nsafe_probability = 3.0\n");
    env.cmd()
        .arg("files")
        .assert()
        .code(1)
        .stderr(contains("safe_probability must be between 0 and 1"));
}

#[test]
fn check_json_details_preserve_line_order() {
    let env = TestEnv::new();
    env.write_input("input.txt", &format!("\n{SAMPLE}"));

    let out = env.run_json(&["check", "--details"]);
    let reports = out["data"]["reports"].as_array().expect("reports array");
    let lines: Vec<u64> = reports.iter().map(|r| r["line"].as_u64().unwrap()).collect();
    assert_eq!(lines, vec![2, 3, 4, 5, 6, 7]);
    assert_eq!(reports[0]["safe"], true);
    assert_eq!(reports[1]["safe"], false);
    assert_eq!(reports[1]["violation_index"], 1);
    assert_eq!(reports[4]["violation_index"], 2);
    assert_eq!(out["data"]["unsafe"], 4);
}
