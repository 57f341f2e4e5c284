#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs the binary from an isolated directory with no global config.
fn songrate(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("songrate").expect("binary should exist");
    cmd.current_dir(dir.path()).env("HOME", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("songrate"));
}

#[test]
fn dimensions_lists_ids_in_chart_order() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .arg("dimensions")
        .assert()
        .success()
        .stdout("lyrics\t歌词\nmelody\t旋律\narrangement\t编曲\nvocals\t人声\nemotion\t情感\nquality\t音质\n");
}

#[test]
fn rate_defaults_to_markdown_with_baseline_average() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .arg("rate")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# 歌曲的评分结果"))
        .stdout(predicate::str::contains("平均分数: 50"));
}

#[test]
fn rate_applies_assignments_and_song_name() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .args(["rate", "--song", "茉莉花", "--set", "lyrics=100", "--set", "melody=0"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# 茉莉花的评分结果"))
        .stdout(predicate::str::contains("平均分数: 50"))
        .stdout(predicate::str::contains("| 歌词 | lyrics | 100 | 50 |"))
        .stdout(predicate::str::contains("| 旋律 | melody | 0 | 50 |"));
}

#[test]
fn rate_json_report_is_machine_readable() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = songrate(&dir)
        .args(["rate", "--format", "json", "--set", "vocals=80"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["ratings"]["vocals"], 80);
    assert_eq!(value["average"], 55);
    assert_eq!(value["chart"]["data"]["datasets"][1]["data"], serde_json::json!([50, 50, 50, 50, 50, 50]));
}

#[test]
fn rate_unknown_dimension_warns_and_leaves_state() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .args(["rate", "--set", "unknown_dimension=77"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("平均分数: 50"))
        .stderr(predicate::str::contains("unknown dimension"))
        .stderr(predicate::str::contains("ignored or clamped"));
}

#[test]
fn rate_clamps_out_of_range_values() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .args(["rate", "--set", "quality=250"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("| 音质 | quality | 100 | 50 |"));
}

#[test]
fn rate_rejects_malformed_assignment() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .args(["rate", "--set", "lyrics"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid rating assignment"));
}

#[test]
fn rate_writes_chart_config_to_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let out = dir.path().join("chart.json");
    songrate(&dir)
        .args(["rate", "--format", "chart", "--set", "emotion=90", "--output"])
        .arg(&out)
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&out).expect("chart file should exist");
    let value: serde_json::Value = serde_json::from_str(&content).expect("chart file should be json");
    assert_eq!(value["type"], "radar");
    assert_eq!(value["data"]["datasets"][0]["data"][4], 90);
}

#[test]
fn rate_reads_format_from_local_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("songrate.toml"),
        "[output]\nformat = \"chart\"\npretty = false\n",
    )
    .expect("config should write");

    songrate(&dir)
        .arg("rate")
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("{\"type\":\"radar\""));
}

#[test]
fn rate_fails_on_missing_explicit_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .args(["rate", "--config", "missing.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn session_redraws_after_each_event() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .args(["session", "--format", "chart", "--compact"])
        .write_stdin("set lyrics 100\nname 茉莉花\nquit\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"data\":[50,50,50,50,50,50]").count(4))
        .stdout(predicate::str::contains("\"data\":[100,50,50,50,50,50]").count(2));
}

#[test]
fn session_skips_malformed_lines_with_warning() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .arg("session")
        .write_stdin("set lyrics loud\nname 茉莉花\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("# 茉莉花的评分结果"))
        .stderr(predicate::str::contains("rating must be an integer"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .args(["-q", "-v", "dimensions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn rate_clamps_values_beyond_integer_range() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .args(["rate", "--set", "lyrics=100000000000000000000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("| 歌词 | lyrics | 100 | 50 |"))
        .stderr(predicate::str::contains("rating clamped into range"));
}

#[test]
fn session_keeps_song_name_spacing_and_clamps_huge_values() {
    let dir = TempDir::new().expect("temp dir should be created");
    songrate(&dir)
        .args(["session", "--format", "json", "--compact"])
        .write_stdin("name   Song  \nset melody -100000000000000000000\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"song_name\":\"  Song  \""))
        .stdout(predicate::str::contains("\"melody\":0"));
}
