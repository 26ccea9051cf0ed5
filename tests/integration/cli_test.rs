//! CLI behavior tests
//!
//! Colors are pinned via NO_COLOR / FORCE_COLOR so output is deterministic
//! with or without a TTY.

use assert_cmd::Command;
use predicates::prelude::*;

/// tinct with NO_COLOR set and a scratch HOME (no user config interference).
fn tinct(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tinct").unwrap();
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("FORCE_COLOR");
    cmd
}

/// tinct with colors forced on.
fn tinct_colored(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tinct").unwrap();
    cmd.env("HOME", home)
        .env("FORCE_COLOR", "1")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn gradient_hex_lists_every_sample() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path())
        .args(["gradient", "#000000", "#FFFFFF", "--steps", "3", "--hex"])
        .assert()
        .success()
        .stdout("#000000\n#7F7F7F\n#FFFFFF\n");
}

#[test]
fn no_color_falls_back_to_hex_output() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path())
        .args(["gradient", "#000000", "#FFFFFF", "--steps", "2"])
        .assert()
        .success()
        .stdout("#000000\n#FFFFFF\n");
}

#[test]
fn gradient_json_emits_color_records() {
    let home = tempfile::tempdir().unwrap();
    let output = tinct(home.path())
        .args(["gradient", "#010203", "#040506", "--steps", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 2);
    assert_eq!(records[0]["red"], 1);
    assert_eq!(records[1]["blue"], 6);
}

#[test]
fn gradient_rejects_a_single_step() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path())
        .args(["gradient", "#000000", "#FFFFFF", "--steps", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 steps"));
}

#[test]
fn gradient_rejects_malformed_hex() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path())
        .args(["gradient", "000000", "#FFFFFF"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("#RRGGBB"));
}

#[test]
fn ramp_with_full_span_stops_matches_gradient() {
    let home = tempfile::tempdir().unwrap();
    let ramp = tinct(home.path())
        .args(["ramp", "#FF0000@0", "#0000FF@100", "--steps", "4", "--hex"])
        .output()
        .unwrap();
    let gradient = tinct(home.path())
        .args(["gradient", "#FF0000", "#0000FF", "--steps", "4", "--hex"])
        .output()
        .unwrap();
    assert_eq!(ramp.stdout, gradient.stdout);
}

#[test]
fn ramp_rejects_malformed_stops() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path())
        .args(["ramp", "red@10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("#RRGGBB@percent"));
}

#[test]
fn styled_text_carries_escape_codes_when_forced() {
    let home = tempfile::tempdir().unwrap();
    tinct_colored(home.path())
        .args(["style", "hello", "--fore", "red", "--bold"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[0;1m\x1b[31m"))
        .stdout(predicate::str::contains("hello"));
}

#[test]
fn styled_text_degrades_to_plain_without_color() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path())
        .args(["style", "hello", "--fore", "red", "--bold"])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn style_rejects_unknown_color_names() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path())
        .args(["style", "x", "--fore", "chartreuse-ish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown color name"));
}

#[test]
fn gradient_text_styles_each_character() {
    let home = tempfile::tempdir().unwrap();
    let output = tinct_colored(home.path())
        .args(["gradient", "#000000", "#FFFFFF", "--text", "ab"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // two samples: one per character, foreground truecolor sequences
    assert!(stdout.contains("\x1b[38;2;0;0;0m"));
    assert!(stdout.contains("\x1b[38;2;255;255;255m"));
}

#[test]
fn completions_generate_for_bash() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path())
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tinct"));
}

#[test]
fn version_flag_prints_the_crate_version() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_the_subcommands() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradient"))
        .stdout(predicate::str::contains("ramp"))
        .stdout(predicate::str::contains("style"));
}
