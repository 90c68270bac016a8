//! Command-line tests for `sextant-plan`.
//!
//! Runs the built binary and checks exit codes, stdout and stderr.

use std::process::{Command, Output};

/// Runs `sextant-plan` with a log filter that does not name the binary.
fn run_plan(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sextant-plan"))
        .args(args)
        .env("SEXTANT_LOG", "sextant_graph=debug")
        .env_remove("SEXTANT_LOG_FORMAT")
        .output()
        .unwrap()
}

#[test]
fn prints_usage_without_arguments() {
    let out = run_plan(&[]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("usage: sextant-plan"), "stderr: {stderr}");
}

#[test]
fn missing_catalog_is_reported_on_stderr() {
    let out = run_plan(&["/nonexistent/sextant-catalog.json"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("sextant-catalog.json"), "stderr: {stderr}");
}

#[test]
fn unknown_log_format_warns_and_still_plans() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(&catalog, r#"[{ "name": "lint", "version": "1" }]"#).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_sextant-plan"))
        .arg(&catalog)
        .env("SEXTANT_LOG_FORMAT", "yaml")
        .output()
        .unwrap();

    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown tracing format 'yaml'"), "stderr: {stderr}");
}

#[test]
fn prints_report_for_valid_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"{ "plugins": [
            { "name": "parse", "version": "1" },
            { "name": "lint", "version": "1", "depends_on": ["parse"] }
        ] }"#,
    )
    .unwrap();
    let layout = dir.path().join("layout.json");
    std::fs::write(&layout, r#"{ "column_width": 100.0 }"#).unwrap();

    let out = run_plan(&[catalog.to_str().unwrap(), layout.to_str().unwrap()]);

    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["stages"][1][0]["name"], "lint");
    assert_eq!(report["nodes"][1]["position"]["x"], 250.0);
}
