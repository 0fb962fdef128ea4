use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a data directory with an admin credentials table
fn create_cli_test_environment() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    fs::write(
        temp_dir.path().join("admin_access.csv"),
        "username,password\r\nadmin,secret\r\n",
    )
    .expect("Failed to write credentials");
    temp_dir
}

/// Plain-text command rooted at `dir`, without credentials
fn bare_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("library").expect("Failed to find library binary");
    cmd.env_remove("LIBRARY_USERNAME")
        .env_remove("LIBRARY_PASSWORD")
        .env_remove("LIBRARY_DATA_DIR")
        .arg("--no-color")
        .arg("--data-dir")
        .arg(dir);
    cmd
}

/// Plain-text command rooted at `dir`, logged in as the test admin
fn library_cmd(dir: &Path) -> Command {
    let mut cmd = bare_cmd(dir);
    cmd.args(["--username", "admin", "--password", "secret"]);
    cmd
}

#[test]
fn test_cli_register_visitor() {
    let temp_dir = create_cli_test_environment();

    library_cmd(temp_dir.path())
        .args(["visitor", "register", "Ada", "--species", "human"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visitor registered with ID: 1"))
        .stdout(predicate::str::contains("## 1. Ada"));

    let contents = fs::read_to_string(temp_dir.path().join("visitors.csv")).unwrap();
    assert_eq!(contents, "id,name,species,status\r\n1,Ada,human,active\r\n");
}

#[test]
fn test_cli_requires_credentials() {
    let temp_dir = create_cli_test_environment();

    bare_cmd(temp_dir.path())
        .args(["visitor", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--username and --password"));

    bare_cmd(temp_dir.path())
        .args(["--username", "admin", "--password", "wrong", "visitor", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn test_cli_credentials_from_environment() {
    let temp_dir = create_cli_test_environment();

    bare_cmd(temp_dir.path())
        .env("LIBRARY_USERNAME", "admin")
        .env("LIBRARY_PASSWORD", "secret")
        .args(["artifact", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No artifacts found."));
}

#[test]
fn test_cli_missing_credentials_table() {
    let temp_dir = TempDir::new().unwrap();

    library_cmd(temp_dir.path())
        .args(["visitor", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Credentials file not found"));

    assert!(!temp_dir.path().join("admin_access.csv").exists());
}

#[test]
fn test_cli_invalid_selection_fails_without_writing() {
    let temp_dir = create_cli_test_environment();

    library_cmd(temp_dir.path())
        .args(["visitor", "register", "Ada", "--species", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'species'"));

    let contents = fs::read_to_string(temp_dir.path().join("visitors.csv")).unwrap();
    assert_eq!(contents, "id,name,species,status\r\n");
}

#[test]
fn test_cli_visitor_lifecycle() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    library_cmd(dir)
        .args(["visitor", "register", "Ada", "-s", "1"])
        .assert()
        .success();
    library_cmd(dir)
        .args([
            "visitor",
            "register",
            "Chewie",
            "-s",
            "other",
            "--other-species",
            "Wookiee",
            "--status",
            "retired",
        ])
        .assert()
        .success();

    library_cmd(dir)
        .args(["visitor", "toggle-status", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: retired -> active"));

    library_cmd(dir)
        .args(["visitor", "delete", "1", "--mode", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visitor 'Ada' (ID: 1) marked as deleted."));

    library_cmd(dir)
        .args(["visitor", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Status**: deleted"));

    library_cmd(dir)
        .args(["visitor", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Total visitors (excluding deleted)**: 1"))
        .stdout(predicate::str::contains("- wookiee: 1"))
        .stdout(predicate::str::contains("- Deleted: 1"));

    library_cmd(dir)
        .args(["visitor", "delete", "1", "--mode", "hard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed."));

    library_cmd(dir)
        .args(["visitor", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Visitor '1' not found"));
}

#[test]
fn test_cli_artifact_lifecycle() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    for (description, rarity) in [("Orb", "Low"), ("Map", "3"), ("Key", "forbidden")] {
        library_cmd(dir)
            .args(["artifact", "register", description, "--rarity", rarity])
            .assert()
            .success();
    }

    library_cmd(dir)
        .args(["artifact", "register", "Copy", "--code", "ART2", "--rarity", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Artifact 'ART2' already exists"));

    library_cmd(dir)
        .args(["artifact", "classify", "1=1,3=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Included rarities**: Low, High"))
        .stdout(predicate::str::contains("## ART1"))
        .stdout(predicate::str::contains("## ART2"))
        .stdout(predicate::str::contains("## ART3").not());

    library_cmd(dir)
        .args(["artifact", "classify", "1=3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filter rule"));

    library_cmd(dir)
        .args(["artifact", "update", "ART3", "--status", "under study"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Stored -> Under Study"));

    library_cmd(dir)
        .args(["artifact", "delete", "ART1", "-m", "soft"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Artifact 'ART1' marked as Destroyed."));

    library_cmd(dir)
        .args(["artifact", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Total artifacts**: 3"))
        .stdout(predicate::str::contains("- Destroyed: 1"));
}

#[test]
fn test_cli_stats_json() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    library_cmd(dir)
        .args(["visitor", "register", "R2", "-s", "android"])
        .assert()
        .success();

    let output = library_cmd(dir)
        .args(["visitor", "stats", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stats: serde_json::Value =
        serde_json::from_slice(&output).expect("stats output is not JSON");
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["species_counts"]["android"], 1);
    assert_eq!(stats["status_counts"]["active"], 1);
}

#[test]
fn test_cli_interactive_menu() {
    let temp_dir = create_cli_test_environment();

    bare_cmd(temp_dir.path())
        .arg("menu")
        .write_stdin("1\nadmin\nsecret\n2\n1\n\nStar chart\n3\n1\n0\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Galactic Library"))
        .stdout(predicate::str::contains("Login successful."))
        .stdout(predicate::str::contains("Artifact registered with code: ART1"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_cli_menu_login_failure() {
    let temp_dir = create_cli_test_environment();

    bare_cmd(temp_dir.path())
        .write_stdin("1\na\nb\n\n\nc\nd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempt 3/3"))
        .stdout(predicate::str::contains("You have reached the max amount of tries."))
        .stdout(predicate::str::contains("Admin Menu").not());
}
