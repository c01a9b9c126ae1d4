use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs.txt");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("is 80 step(s)"));
}

#[test]
fn part1_fails_on_two_starts() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs_two_starts.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Expect only one start position"));
}

#[test]
fn part1_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("no_such_inputs.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open given file"));
}
