use assert_cmd::Command;
use predicates::prelude::*;

fn bijoy() -> Command {
    Command::cargo_bin("bijoy").unwrap()
}

#[test]
fn test_cli_help() {
    bijoy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    bijoy().arg("--version").assert().success();
}

#[test]
fn test_invalid_command() {
    bijoy().arg("not-a-command").assert().failure();
}

#[test]
fn test_themes_listing() {
    bijoy()
        .arg("themes")
        .assert()
        .success()
        .stdout(predicate::str::contains("freedom"))
        .stdout(predicate::str::contains("courage"));
}

#[test]
fn test_generate_requires_nonempty_theme() {
    bijoy()
        .args(["generate", "--theme", "  ", "--template-only"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_generate_rejects_out_of_range_count() {
    bijoy()
        .args([
            "generate",
            "--theme",
            "Freedom",
            "--count",
            "9",
            "--template-only",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 5"));
}

#[test]
fn test_generate_rejects_unknown_language() {
    bijoy()
        .args([
            "generate",
            "--theme",
            "Freedom",
            "--language",
            "french",
            "--template-only",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));
}

#[test]
fn test_generate_template_only_without_datasets() {
    // A missing data dir degrades to the hard-coded default path; the
    // command must still succeed and print a themed poem.
    let dir = tempfile::tempdir().unwrap();
    bijoy()
        .args([
            "generate",
            "--theme",
            "Freedom",
            "--template-only",
            "--data-dir",
        ])
        .arg(dir.path().join("nope"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme:"))
        .stdout(predicate::str::contains("Freedom"));
}

#[test]
fn test_slogan_without_datasets_prints_default() {
    let dir = tempfile::tempdir().unwrap();
    bijoy()
        .args(["slogan", "--data-dir"])
        .arg(dir.path().join("nope"))
        .assert()
        .success()
        .stdout(predicate::str::contains("জয় বাংলা"));
}

#[test]
fn test_memory_constrained_env_forces_template_path() {
    let dir = tempfile::tempdir().unwrap();
    bijoy()
        .env("SKIP_MODEL_LOADING", "1")
        .args(["generate", "--theme", "Victory", "--data-dir"])
        .arg(dir.path().join("nope"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Victory"));
}
