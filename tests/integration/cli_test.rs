//! Integration tests for the synapsis binary

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixture, synapsis};

#[test]
fn summarise_acknowledges_text_argument() {
    let home = TempDir::new().unwrap();
    synapsis(&home)
        .args(["summarise", "Four score and seven years ago"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post done!"));
}

#[test]
fn summarise_reads_json_body() {
    let home = TempDir::new().unwrap();
    synapsis(&home)
        .args(["summarise", "--json", r#"{"text": "hello"}"#])
        .assert()
        .success()
        .stdout("Post done!\n");
}

#[test]
fn summarise_reads_stdin() {
    let home = TempDir::new().unwrap();
    synapsis(&home)
        .arg("summarise")
        .write_stdin("piped text\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Post done!"));
}

#[test]
fn summarise_rejects_malformed_json() {
    let home = TempDir::new().unwrap();
    synapsis(&home)
        .args(["summarise", "--json", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid summarise request body"));
}

#[test]
fn check_passes_for_hero_sequence() {
    let home = TempDir::new().unwrap();
    synapsis(&home)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 13 steps"));
}

#[test]
fn check_fails_for_bad_highlight() {
    let home = TempDir::new().unwrap();
    synapsis(&home)
        .arg("check")
        .arg("--sequence")
        .arg(fixture("bad_highlight.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "step 1: highlight 2..40 does not fit text of length 5",
        ));
}

#[test]
fn headless_play_prints_frames() {
    let home = TempDir::new().unwrap();
    let output = synapsis(&home)
        .args(["play", "--headless", "--sequence"])
        .arg(fixture("short.toml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout.trim_end(), @r"
    [00:00.000] typing       hi there|
    [00:00.100] highlighting [hi] there
    [00:00.200] deleting     there|
    [00:00.300] reset
    ");
}

#[test]
fn headless_play_honours_speed() {
    let home = TempDir::new().unwrap();
    synapsis(&home)
        .args(["play", "--headless", "--speed", "2", "--sequence"])
        .arg(fixture("short.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[00:00.150] reset"));
}

#[test]
fn export_output_passes_check() {
    let home = TempDir::new().unwrap();
    let exported = synapsis(&home).arg("export").output().unwrap();
    assert!(exported.status.success());

    let path = home.path().join("hero.toml");
    std::fs::write(&path, exported.stdout).unwrap();
    synapsis(&home)
        .arg("check")
        .arg("--sequence")
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    synapsis(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join("config.toml").exists());

    synapsis(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[animation]"))
        .stdout(predicate::str::contains("name = \"synapsis\""));

    synapsis(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn config_path_uses_env_override() {
    let home = TempDir::new().unwrap();
    synapsis(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn configured_sequence_is_used() {
    let home = TempDir::new().unwrap();
    let config = format!(
        "[animation]\nsequence = {:?}\n",
        fixture("bad_highlight.toml").display().to_string()
    );
    std::fs::write(home.path().join("config.toml"), config).unwrap();

    synapsis(&home).arg("check").assert().failure();
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    synapsis(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("synapsis"));
}
