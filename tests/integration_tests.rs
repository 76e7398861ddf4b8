//! Integration tests for the vulnsweep CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("vulnsweep").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch vulnerability scanning"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("vulnsweep").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vulnsweep"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("vulnsweep").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test scan fails cleanly when no projects root is configured
#[test]
fn test_scan_requires_root() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("vulnsweep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no projects root configured"));
}

/// Write an executable fake scanner that answers per project directory:
/// exit 0 with stdout for `A`, exit 1 with stderr for `B`.
#[cfg(unix)]
fn write_fake_scanner(dir: &std::path::Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-scanner.sh");
    fs::write(
        &script,
        r#"#!/bin/sh
# $1 is the recursive flag, $2 is the project path
case "$2" in
  */A) printf 'No issues found'; exit 0 ;;
  */B) printf '2 issues found' >&2; exit 1 ;;
  *) exit 0 ;;
esac
"#,
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// End-to-end scan: one block per directory, stdout/stderr passthrough,
/// regular files skipped
#[cfg(unix)]
#[test]
fn test_scan_writes_report() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("projects");
    fs::create_dir(&root).unwrap();
    fs::create_dir(root.join("A")).unwrap();
    fs::create_dir(root.join("B")).unwrap();
    fs::write(root.join("C.txt"), "not a project").unwrap();

    let scanner = write_fake_scanner(temp_dir.path());
    let report_path = temp_dir.path().join("report.txt");

    let mut cmd = Command::cargo_bin("vulnsweep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("scan")
        .arg("--root")
        .arg(&root)
        .arg("--output")
        .arg(&report_path)
        .arg("--tool")
        .arg(&scanner)
        .arg("--sort")
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished scanning A"))
        .stdout(predicate::str::contains("Finished scanning B"))
        .stdout(predicate::str::contains("Vulnerability report generated at:"));

    let expected = format!(
        "Scanning project: A\n{dash}\nNo issues found{eq}\n\n\
         Scanning project: B\n{dash}\n2 issues found{eq}\n\n",
        dash = "-".repeat(50),
        eq = "=".repeat(50),
    );
    assert_eq!(fs::read_to_string(&report_path).unwrap(), expected);
}

/// A missing scanner executable produces an inline report note per project
/// instead of aborting the run
#[test]
fn test_scan_with_missing_scanner() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("projects");
    let project = root.join("D");
    fs::create_dir_all(&project).unwrap();

    let report_path = temp_dir.path().join("report.txt");

    let mut cmd = Command::cargo_bin("vulnsweep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("scan")
        .arg("--root")
        .arg(&root)
        .arg("--output")
        .arg(&report_path)
        .arg("--tool")
        .arg("vulnsweep-no-such-scanner-xyz")
        .assert()
        .success();

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("Scanning project: D"));
    assert!(report.contains("Failed to scan project"));
    assert!(report.contains(&project.display().to_string()));
}

/// Test configuration initialization and display
#[test]
fn test_config_init_and_show() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("vulnsweep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("config")
        .arg("init")
        .assert()
        .success();

    let config_content = fs::read_to_string(temp_dir.path().join("vulnsweep.toml")).unwrap();
    assert!(config_content.contains("[scanner]"));
    assert!(config_content.contains("command = \"bandit\""));

    let mut cmd = Command::cargo_bin("vulnsweep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("config")
        .arg("show")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("bandit"));
}

/// Test configuration validation warns about the unset root
#[test]
fn test_config_validate_without_root() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("vulnsweep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("config")
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("projects.root is not set"));
}

/// Environment variables override file configuration, with `__` separating
/// nesting levels so underscored keys stay reachable
#[test]
fn test_env_override_reaches_underscored_keys() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("vulnsweep").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("VULNSWEEP_SCANNER__RECURSIVE_FLAG", "--recursive")
        .arg("config")
        .arg("show")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("--recursive"));
}

/// Test tools check reports a missing scanner without failing
#[test]
fn test_tools_check_missing_scanner() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("vulnsweep.toml"),
        "[scanner]\ncommand = \"vulnsweep-no-such-scanner-xyz\"\nrecursive_flag = \"-r\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("vulnsweep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("tools")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("MISSING"));
}
