//! End-to-end tests for the nick-gen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn word_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let lists = [
        ("words.txt", "cat\ndog\nelephant\nCat\nowl\nabi\n"),
        ("adjectives.txt", "big\nred\nshy\n"),
        ("verbs.txt", "run\nhop\n"),
        ("nouns.txt", "owl\nfox\nyak\nelk\nemu\nant\n"),
    ];
    for (name, content) in lists {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn nick_gen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nick-gen").unwrap();
    cmd.arg("--dir").arg(dir).arg("--no-pause").env("NO_COLOR", "1");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

fn words_of(stdout: &str) -> Vec<String> {
    let mut words: Vec<String> = stdout.split_whitespace().map(str::to_string).collect();
    words.sort();
    words
}

#[test]
fn filters_by_length() {
    let dir = word_dir();

    let out = stdout_of(nick_gen(dir.path()).args(["-m", "3", "-x", "3"]));

    assert_eq!(words_of(&out), vec!["abi", "cat", "dog", "owl"]);
}

#[test]
fn filters_by_weight() {
    let dir = word_dir();

    let out = stdout_of(nick_gen(dir.path()).args(["-n", "300"]));

    assert_eq!(words_of(&out), vec!["abi"]);
}

#[test]
fn filters_by_first() {
    let dir = word_dir();

    let out = stdout_of(nick_gen(dir.path()).args(["-f", "C"]));

    assert_eq!(words_of(&out), vec!["cat"]);
}

#[test]
fn legacy_duo_flag() {
    let dir = word_dir();

    let out = stdout_of(nick_gen(dir.path()).args(["-vn", "-s", "5"]));
    let words = words_of(&out);

    assert_eq!(words.len(), 6);
    assert!(words.iter().all(|w| w.starts_with("run") || w.starts_with("hop")));
}

#[test]
fn same_seed_same_output() {
    let dir = word_dir();
    let args = ["-an", "-l", "0.5", "-s", "1234"];

    let first = stdout_of(nick_gen(dir.path()).args(args));
    let second = stdout_of(nick_gen(dir.path()).args(args));

    assert_eq!(first, second);
}

#[test]
fn negative_seed_is_accepted() {
    let dir = word_dir();
    let args = ["-nn", "-l", "0.5", "-s", "-1"];

    let first = stdout_of(nick_gen(dir.path()).args(args));
    let second = stdout_of(nick_gen(dir.path()).args(args));

    assert_eq!(words_of(&first).len(), 6);
    assert_eq!(first, second);
}

#[test]
fn pauses_after_each_row() {
    let dir = word_dir();
    let mut cmd = Command::cargo_bin("nick-gen").unwrap();
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["-nn", "-s", "3"])
        .write_stdin("\n\n");

    let out = stdout_of(&mut cmd);

    // six duos: one full row, then the pause, then a row of one
    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].split_whitespace().count(), 5);
    assert_eq!(rows[1].split_whitespace().count(), 1);
}

#[test]
fn nothing_found_is_not_an_error() {
    let dir = word_dir();

    nick_gen(dir.path())
        .args(["-f", "zz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no words were found"));
}

#[test]
fn invalid_weight_is_a_usage_error() {
    let dir = word_dir();

    nick_gen(dir.path())
        .args(["-n", "50"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--num \"50\" must be >= 97"));
}

#[test]
fn max_below_min_is_a_usage_error() {
    let dir = word_dir();

    nick_gen(dir.path())
        .args(["-m", "5", "-x", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be >= --min"));
}

#[test]
fn conflicting_modes_are_rejected() {
    let dir = word_dir();

    nick_gen(dir.path()).args(["-an", "-nn"]).assert().code(2);
}

#[test]
fn missing_word_list_fails() {
    let dir = TempDir::new().unwrap();

    nick_gen(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("words.txt is missing"));
}

#[test]
fn unmapped_leet_character_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("words.txt"), "r2d2\n").unwrap();

    nick_gen(dir.path())
        .args(["-l", "1.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no l33t glyph"));
}
