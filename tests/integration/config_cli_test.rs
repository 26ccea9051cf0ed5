//! Config subcommand tests
//!
//! Each test points HOME at a scratch directory so the real user config is
//! never touched.

use assert_cmd::Command;
use predicates::prelude::*;

fn tinct(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tinct").unwrap();
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("FORCE_COLOR");
    cmd
}

#[test]
fn config_path_points_into_dot_config() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".config/tinct/config.toml"));
}

#[test]
fn config_init_writes_a_starter_file() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path()).args(["config", "init"]).assert().success();

    let path = home.path().join(".config/tinct/config.toml");
    assert!(path.exists());
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[styles."));
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let home = tempfile::tempdir().unwrap();
    tinct(home.path()).args(["config", "init"]).assert().success();
    tinct(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    tinct(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn named_styles_from_config_are_usable() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".config/tinct");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        r#"
[styles.shout]
fore = "bright_yellow"
bold = true
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("tinct").unwrap();
    cmd.env("HOME", home.path())
        .env("FORCE_COLOR", "1")
        .env_remove("NO_COLOR");
    cmd.args(["style", "hey", "--name", "shout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[0;1m\x1b[93m"));

    tinct(home.path())
        .args(["style", "hey", "--name", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No style named"));
}

#[test]
fn config_show_prints_parseable_toml() {
    let home = tempfile::tempdir().unwrap();
    let output = tinct(home.path()).args(["config", "show"]).output().unwrap();
    assert!(output.status.success());
    let shown = String::from_utf8(output.stdout).unwrap();
    assert!(shown.contains("steps = 24"));
}
