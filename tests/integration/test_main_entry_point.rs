// main.rsとエントリーポイントのテスト
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_member_access"))
}

#[test]
fn test_demo_mode_output() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping demo test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "Class fields:");
    assert_eq!(lines[1], "Value of 'StringField' => Hello");
    assert_eq!(lines[2], "Value of 'IntField' => 247");
    assert!(lines.contains(&"Class properties:"));
    assert!(lines.contains(&"Value of 'BoolProperty' => false"));
}

#[test]
fn test_cli_help() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("member_access"));
    assert!(stdout.contains("--benchmark"));
    assert!(stdout.contains("--strategy"));
}

#[test]
fn test_legacy_benchmark_flag_with_report() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping benchmark test - binary not found");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let report = temp_dir.path().join("report.json");

    let output = Command::new(&binary_path)
        .args(["/benchmark", "--iterations", "10", "--samples", "2", "--warmup", "0"])
        .arg("--json-report")
        .arg(&report)
        .arg("--quiet")
        .output()
        .expect("Failed to execute benchmark");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("| Method"));
    assert!(stdout.contains("DirectDiscovery"));
    assert!(stdout.contains("CatalogSequential"));

    let content = std::fs::read_to_string(&report).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 8);
}

#[test]
fn test_invalid_iterations_fail() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI validation test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .args(["--benchmark", "--iterations", "0"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("iterations"));
}
