use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn budget_text_summary() {
    let env = TestEnv::new();
    env.cmd()
        .arg("budget")
        .assert()
        .success()
        .stdout(contains("Total Project Cost: R15,000"))
        .stdout(contains("78.0%"));
}

#[test]
fn list_shows_phases_and_sections() {
    let env = TestEnv::new();
    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Phase 1\tWater System"))
        .stdout(contains("Outdoor Kitchen"));
}

#[test]
fn validate_text_reports_ok() {
    let env = TestEnv::new();
    env.cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(contains("overall: ok"))
        .stdout(contains("phase1/water.json\tok"));
}

#[test]
fn missing_plan_dir_fails_with_manifest_error() {
    cargo_bin_cmd!("stead")
        .args(["--plan", "no-such-dir", "budget"])
        .assert()
        .failure()
        .stderr(contains("project.json"));
}
