use std::fs;
use std::process::{Command, Output};

fn claimcheck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_claimcheck"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

// === Run Tests ===

#[test]
fn test_run_text_report_passes() {
    let out = claimcheck(&["run", "--seed", "11", "--reps", "20"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("== Core tests =="));
    assert!(stdout.contains("== Specifier tests =="));
    assert!(stdout.contains("  reps should work: pass"));
    assert!(!stdout.contains(": fail"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("(seed 11)"));
}

#[test]
fn test_run_json_report_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let out = claimcheck(&[
        "run",
        "--seed",
        "3",
        "--reps",
        "10",
        "--format",
        "json",
        "--out",
        path.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let groups = json.as_array().unwrap();
    let names: Vec<&str> = groups.iter().map(|g| g["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["nogroup", "Core tests", "Specifier tests"]);
    for group in groups {
        for claim in group["claims"].as_array().unwrap() {
            assert_eq!(claim["verdict"], "pass", "claim {}", claim["name"]);
        }
    }
}

#[test]
fn test_run_single_group_html() {
    let out = claimcheck(&["run", "--seed", "5", "--reps", "5", "--group", "Specifier tests", "--format", "html"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("<h2>Specifier tests</h2>"));
    assert!(stdout.contains("<b style=\"color:green\">integer specifier:</b> pass"));
    assert!(!stdout.contains("Core tests"));
}

#[test]
fn test_run_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("claimcheck.json");
    fs::write(&path, r#"{"repetitions": 4, "seed": 21}"#).unwrap();
    let out = claimcheck(&["run", "--config", path.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("(seed 21)"));
}

#[test]
fn test_run_unknown_group_fails() {
    let out = claimcheck(&["run", "--seed", "1", "--reps", "1", "--group", "nope"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("error: unknown group: nope"));
}

#[test]
fn test_run_rejects_zero_reps() {
    let out = claimcheck(&["run", "--reps", "0"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("repetitions must be at least 1"));
}

// === List Tests ===

#[test]
fn test_list_shows_claims_without_running() {
    let out = claimcheck(&["list"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Core tests\n"));
    assert!(stdout.contains("  groups should work\n"));
    assert!(stdout.contains("  spec_record specifier\n"));
}

#[test]
fn test_list_json_is_all_untested() {
    let out = claimcheck(&["list", "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let verdicts: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|g| g["claims"].as_array().unwrap())
        .map(|c| c["verdict"].as_str().unwrap())
        .collect();
    assert!(!verdicts.is_empty());
    assert!(verdicts.iter().all(|v| *v == "untested"));
}
