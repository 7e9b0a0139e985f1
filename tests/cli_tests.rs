use assert_cmd::Command;
use predicates::str::contains;

fn zoomiz() -> Command {
    Command::cargo_bin("zoomiz").unwrap()
}

#[test]
fn help_lists_jump_options() {
    zoomiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--charset"))
        .stdout(contains("--case-sensitive"))
        .stdout(contains("--custom-charset"));
}

#[test]
fn unknown_charset_is_rejected() {
    zoomiz()
        .args(["--charset", "emoji", "tests/fixtures/sample.txt"])
        .assert()
        .failure()
        .stderr(contains("emoji"));
}

#[test]
fn missing_file_reports_io_error() {
    zoomiz()
        .arg("tests/fixtures/does_not_exist.txt")
        .assert()
        .failure()
        .stderr(contains("IO error"));
}

#[test]
fn binary_input_is_rejected() {
    zoomiz()
        .arg("tests/fixtures/invalid_utf8.txt")
        .assert()
        .failure()
        .stderr(contains("not valid UTF-8"));
}
