use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "flexicars-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_flexicars-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    for key in ["listing", "contact", "notices", "forms"] {
        assert!(content.contains(key), "missing {key}");
    }
}

#[test]
fn cli_runs_all_scenarios_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_flexicars-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args(["--report", "json", "--delay-scale", "0", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FlexiCars Automated Tester"));

    let report = std::fs::read_to_string(output_path).expect("read report");
    let parsed: serde_json::Value = serde_json::from_str(&report).expect("json report");
    let results = parsed.as_array().expect("array of results");
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r["passed"] == true));
}

#[test]
fn cli_unknown_scenario_is_skipped() {
    let exe = env!("CARGO_BIN_EXE_flexicars-tester");
    let output = Command::new(exe)
        .args(["--scenarios", "checkout", "--report", "markdown"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown scenario"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("_No scenarios executed._"));
}
