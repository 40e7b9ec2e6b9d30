use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with --no-color and a database inside the test directory
fn circuit_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("circuit").expect("Failed to find circuit binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path.to_str().unwrap());
    cmd
}

fn start_session(temp_dir: &TempDir, address: &str) {
    circuit_cmd(temp_dir)
        .args([
            "session",
            "start",
            "--address",
            address,
            "--technician",
            "Test Technician",
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_catalog_list() {
    let temp_dir = create_cli_test_environment();

    circuit_cmd(&temp_dir)
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Step Catalog"))
        .stdout(predicate::str::contains("1. **Safe Isolation** (safe-isolation)"))
        .stdout(predicate::str::contains("(functional-test)"));
}

#[test]
fn test_cli_catalog_show_step() {
    let temp_dir = create_cli_test_environment();

    circuit_cmd(&temp_dir)
        .args(["catalog", "show", "rcd-test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### RCD Operation (rcd-test)"))
        .stdout(predicate::str::contains("#### Instructions"));
}

#[test]
fn test_cli_catalog_show_unknown_step_fails() {
    let temp_dir = create_cli_test_environment();

    circuit_cmd(&temp_dir)
        .args(["catalog", "show", "megger"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step 'megger' not found in catalog"));
}

#[test]
fn test_cli_start_session() {
    let temp_dir = create_cli_test_environment();

    circuit_cmd(&temp_dir)
        .args([
            "session",
            "start",
            "--address",
            "14 Canal Street",
            "--client",
            "Canal Lofts Ltd",
            "--technician",
            "Test Technician",
            "--registration",
            "NICEIC 12345",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Started session with ID: 1"))
        .stdout(predicate::str::contains("# 1. 14 Canal Street"))
        .stdout(predicate::str::contains("Test Technician (NICEIC 12345)"))
        .stdout(predicate::str::contains("Canal Lofts Ltd"));
}

#[test]
fn test_cli_start_session_blank_address_fails() {
    let temp_dir = create_cli_test_environment();

    circuit_cmd(&temp_dir)
        .args([
            "session",
            "start",
            "--address",
            "  ",
            "--technician",
            "Test Technician",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to start session"));
}

#[test]
fn test_cli_list_empty_sessions() {
    let temp_dir = create_cli_test_environment();

    circuit_cmd(&temp_dir)
        .args(["session", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sessions In Progress"))
        .stdout(predicate::str::contains("No sessions found."));
}

#[test]
fn test_cli_default_command_lists_sessions_in_progress() {
    let temp_dir = create_cli_test_environment();
    start_session(&temp_dir, "14 Canal Street");

    circuit_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sessions In Progress"))
        .stdout(predicate::str::contains("## 14 Canal Street (ID: 1) (0/7)"));
}

#[test]
fn test_cli_record_result_with_measurement() {
    let temp_dir = create_cli_test_environment();
    start_session(&temp_dir, "14 Canal Street");

    circuit_cmd(&temp_dir)
        .args([
            "session",
            "record",
            "1",
            "continuity",
            "--status",
            "completed",
            "--value",
            "0.42",
            "--unit",
            "Ω",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated session with ID: 1"))
        .stdout(predicate::str::contains(
            "Recorded 'Continuity of Protective Conductors' as completed (0.42 Ω)",
        ));
}

#[test]
fn test_cli_record_unknown_step_fails() {
    let temp_dir = create_cli_test_environment();
    start_session(&temp_dir, "14 Canal Street");

    circuit_cmd(&temp_dir)
        .args(["session", "record", "1", "megger", "--status", "failed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to record result"));
}

#[test]
fn test_cli_record_rejects_unknown_status_value() {
    let temp_dir = create_cli_test_environment();

    circuit_cmd(&temp_dir)
        .args(["session", "record", "1", "polarity", "--status", "skipped"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'skipped'"));
}

#[test]
fn test_cli_navigation() {
    let temp_dir = create_cli_test_environment();
    start_session(&temp_dir, "14 Canal Street");

    circuit_cmd(&temp_dir)
        .args(["session", "next", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Current step: 2 of 7 (Continuity of Protective Conductors)",
        ));

    circuit_cmd(&temp_dir)
        .args(["session", "previous", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current step: 1 of 7 (Safe Isolation)"));

    // Already at the first step
    circuit_cmd(&temp_dir)
        .args(["session", "prev", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current step: 1 of 7 (Safe Isolation)"));
}

#[test]
fn test_cli_show_views() {
    let temp_dir = create_cli_test_environment();
    start_session(&temp_dir, "14 Canal Street");

    circuit_cmd(&temp_dir)
        .args(["session", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. 14 Canal Street"))
        .stdout(predicate::str::contains("## Steps"));

    circuit_cmd(&temp_dir)
        .args(["session", "show", "1", "--view", "step"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Step 1 of 7: Safe Isolation"))
        .stdout(predicate::str::contains("- Result: ○ Pending"));

    circuit_cmd(&temp_dir)
        .args(["session", "show", "1", "--view", "results"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Results for session 1: 14 Canal Street"))
        .stdout(predicate::str::contains("No results recorded."));
}

#[test]
fn test_cli_show_missing_session_fails() {
    let temp_dir = create_cli_test_environment();

    circuit_cmd(&temp_dir)
        .args(["session", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session with ID 99 not found"));
}

#[test]
fn test_cli_complete_session() {
    let temp_dir = create_cli_test_environment();
    start_session(&temp_dir, "14 Canal Street");

    circuit_cmd(&temp_dir)
        .args(["session", "record", "1", "safe-isolation", "--status", "completed"])
        .assert()
        .success();
    circuit_cmd(&temp_dir)
        .args(["session", "record", "1", "polarity", "--status", "failed"])
        .assert()
        .success();

    circuit_cmd(&temp_dir)
        .args(["session", "complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Session completed: 1 passed, 1 failed, 5 not tested",
        ));

    circuit_cmd(&temp_dir)
        .args(["session", "list", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Completed Sessions"))
        .stdout(predicate::str::contains("14 Canal Street"));

    circuit_cmd(&temp_dir)
        .args(["session", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions found."));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    start_session(&temp_dir, "14 Canal Street");

    circuit_cmd(&temp_dir)
        .args(["session", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to delete session"));

    circuit_cmd(&temp_dir)
        .args(["session", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted session at '14 Canal Street' (ID: 1)",
        ));

    circuit_cmd(&temp_dir)
        .args(["session", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Session with ID 1 not found"));
}

#[test]
fn test_cli_custom_catalog_file() {
    let temp_dir = create_cli_test_environment();
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"[
            {
                "id": "visual",
                "title": "Visual Inspection",
                "description": "Check for damage",
                "category": "functional-test",
                "testType": "visual",
                "instructions": ["Inspect accessories"]
            }
        ]"#,
    )
    .unwrap();

    circuit_cmd(&temp_dir)
        .arg("--catalog-file")
        .arg(catalog_path.to_str().unwrap())
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. **Visual Inspection** (visual)"))
        .stdout(predicate::str::contains("safe-isolation").not());
}

#[test]
fn test_cli_missing_catalog_file_fails() {
    let temp_dir = create_cli_test_environment();
    let missing = Path::new("/nonexistent/catalog.json");

    circuit_cmd(&temp_dir)
        .arg("--catalog-file")
        .arg(missing)
        .args(["catalog", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_cli_help_lists_commands() {
    let temp_dir = create_cli_test_environment();

    circuit_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("serve"));
}
