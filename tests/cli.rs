// End-to-end tests for the `golden-assert` binary: exit codes, stdout/stderr
// reports, and the UPDATE_GOLDEN switch as the binary sees it.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn golden_assert(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("golden-assert").unwrap();
    cmd.env_remove("UPDATE_GOLDEN")
        .env_remove("RUST_LOG")
        .arg("--color")
        .arg("never")
        .current_dir(dir.path());
    cmd
}

#[test]
fn check_passes_on_matching_stdin() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("testdata")).unwrap();
    fs::write(dir.path().join("testdata/greeting.golden"), "hello\n").unwrap();

    golden_assert(&dir)
        .args(["check", "greeting.golden"])
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(contains("ok: testdata").and(contains("greeting.golden")));
}

#[test]
fn check_fails_with_quoted_contents_and_diff() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("testdata")).unwrap();
    fs::write(dir.path().join("testdata/greeting.golden"), "hello!\n").unwrap();

    golden_assert(&dir)
        .args(["check", "greeting.golden"])
        .write_stdin("hello\n")
        .assert()
        .failure()
        .code(1)
        .stderr(
            contains("FAIL: does not match golden file")
                .and(contains(r#""hello!\n""#))
                .and(contains(r#""hello\n""#))
                .and(contains("-hello!"))
                .and(contains("+hello")),
        );
}

#[test]
fn check_reports_missing_golden() {
    let dir = TempDir::new().unwrap();
    golden_assert(&dir)
        .args(["check", "absent.golden"])
        .write_stdin("anything")
        .assert()
        .failure()
        .stderr(contains("unable to read testdata"));
}

#[test]
fn update_records_normalized_file_from_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("actual.txt"), "line1\nline2").unwrap();

    golden_assert(&dir)
        .args(["update", "x.golden", "--testdata-dir", ".", "--input", "actual.txt"])
        .assert()
        .success()
        .stdout(contains("updated:"));
    assert_eq!(
        fs::read_to_string(dir.path().join("x.golden")).unwrap(),
        "line1\nline2"
    );

    golden_assert(&dir)
        .args(["check", "x.golden", "--testdata-dir", "."])
        .write_stdin("line1\nline2")
        .assert()
        .success();
}

#[test]
fn update_env_var_turns_on_update_mode() {
    let dir = TempDir::new().unwrap();
    golden_assert(&dir)
        .env("UPDATE_GOLDEN", "1")
        .args(["check", "env.golden", "--testdata-dir", "."])
        .write_stdin("from env\r\n")
        .assert()
        .failure()
        .stderr(contains("does not match golden file"));
    assert_eq!(
        fs::read_to_string(dir.path().join("env.golden")).unwrap(),
        "from env\n"
    );
}

#[test]
fn unreadable_input_is_a_diagnostic_error() {
    let dir = TempDir::new().unwrap();
    golden_assert(&dir)
        .args(["check", "x.golden", "--input", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(contains("unable to read input"));
}

#[test]
fn update_env_var_accepts_library_spellings() {
    for value in ["yes", "TRUE", "on"] {
        let dir = TempDir::new().unwrap();
        golden_assert(&dir)
            .env("UPDATE_GOLDEN", value)
            .args(["check", "spelled.golden", "--testdata-dir", "."])
            .write_stdin("recorded\n")
            .assert()
            .success()
            .stdout(contains("updated:"));
        assert_eq!(
            fs::read_to_string(dir.path().join("spelled.golden")).unwrap(),
            "recorded\n"
        );
    }
}

#[test]
fn update_env_var_zero_keeps_check_mode() {
    let dir = TempDir::new().unwrap();
    golden_assert(&dir)
        .env("UPDATE_GOLDEN", "0")
        .args(["check", "off.golden", "--testdata-dir", "."])
        .write_stdin("data")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unable to read testdata"));
    assert!(!dir.path().join("off.golden").exists());
}

#[test]
fn update_env_var_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    golden_assert(&dir)
        .env("UPDATE_GOLDEN", "sometimes")
        .args(["check", "x.golden"])
        .write_stdin("data")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("sometimes"));
}
