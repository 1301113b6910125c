use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub plan: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let plan = make_fixture_plan(tmp.path());
        Self { _tmp: tmp, plan }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("stead");
        cmd.arg("--plan").arg(&self.plan);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Two-phase fixture matching the worked example: Phase 1 totals 11,700
/// (numeric section file), Phase 2 totals 3,300 (bundle; its string-cost
/// material is display-only and excluded). Project total 15,000.
pub fn make_fixture_plan(base: &Path) -> PathBuf {
    let plan = base.join("plan");
    fs::create_dir_all(plan.join("phase1")).expect("create plan dirs");

    fs::write(
        plan.join("project.json"),
        serde_json::json!({
            "name": "Fixture Homestead",
            "phases": [
                {"name": "Phase 1", "dir": "phase1", "files": ["water"]},
                {"name": "Phase 2", "file": "phase2_data.json"}
            ]
        })
        .to_string(),
    )
    .expect("write manifest");

    fs::write(
        plan.join("phase1/water.json"),
        serde_json::json!({
            "title": "Water System",
            "days": "1-2",
            "goal": "Solar-pumped borehole water",
            "materials": [
                {"item": "Pump", "cost": 8500},
                {"item": "Panel", "cost": 1600, "quantity": 2}
            ],
            "tools": ["Pipe wrench"],
            "steps": [
                {"title": "Survey", "description": "Test borehole depth"},
                "Connect piping to tank"
            ],
            "tips": ["Install a bypass valve"],
            "images": [
                "diagrams/pump.jpg",
                {"name": "diagrams/tank.jpg", "description": "Tank stand detail"}
            ],
            "estimated_time_hours": 16
        })
        .to_string(),
    )
    .expect("write water section");

    fs::write(
        plan.join("phase2_data.json"),
        serde_json::json!({
            "Outdoor Kitchen": {
                "days": "5-6",
                "materials": [
                    {"item": "Stove", "cost": 2000},
                    {"item": "Prep table", "cost": 1300},
                    {"item": "Imported grill", "cost": "R5,000"}
                ],
                "steps": ["Level the site", "Connect the gas"]
            },
            "Grey Water": {
                "materials": [
                    {"item": "Grease trap", "cost": "R1,450"}
                ],
                "steps": ["Trench to the orchard"]
            }
        })
        .to_string(),
    )
    .expect("write phase2 bundle");

    plan
}
