//! End-to-end runs through the binary.

use assert_cmd::Command;
use tempfile::TempDir;

fn cmd_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roicanvas").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn init_then_run_produces_a_canvas_json() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir).arg("init").assert().success();

    let output = cmd_in(&dir)
        .args([
            "run",
            "portfolio.json",
            "--format",
            "json",
            "--as-of",
            "2026-08-26",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let canvas: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(canvas.get("Aggregated_Financials").is_some());
    assert!(canvas["Selected_Portfolio_Summary"]["Total_Use_Cases_Selected"]
        .as_u64()
        .unwrap()
        >= 1);
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir).arg("init").assert().success();
    cmd_in(&dir).arg("init").assert().failure();
    cmd_in(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn run_rejects_batches_below_the_minimum() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("small.json"),
        r#"{"context":{"authorName":"","industry":"","objective":"","kpis":"","constraints":"","date":"","version":""},"initiatives":[{"id":"x","name":"x","problem":"","kpi":"","benefitLow":1000,"benefitHigh":2000,"costLow":500,"costHigh":700,"effort":"Low","risk":"Low","dependencies":"none","category":"Automation"}]}"#,
    )
    .unwrap();

    let failed = cmd_in(&dir).args(["run", "small.json"]).assert().failure();
    let stderr = String::from_utf8(failed.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("at least 5"));

    // The gate is a caller-side policy; 0 disables it.
    cmd_in(&dir)
        .args(["run", "small.json", "--min-initiatives", "0", "--format", "json"])
        .assert()
        .success();
}

#[test]
fn run_is_deterministic_for_a_fixed_anchor_date() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir).arg("init").assert().success();

    let run = |dir: &TempDir| {
        let output = cmd_in(dir)
            .args([
                "run",
                "portfolio.json",
                "--format",
                "json",
                "--as-of",
                "2026-08-26",
            ])
            .assert()
            .success();
        String::from_utf8(output.get_output().stdout.clone()).unwrap()
    };

    assert_eq!(run(&dir), run(&dir));
}
