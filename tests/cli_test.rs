//! pushr CLI integration tests

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn pushr_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pushr"))
}

fn write_config(dir: &Path, api_level: u32) -> std::path::PathBuf {
    let path = dir.join("config.json");
    fs::write(
        &path,
        format!(
            r#"{{"api_level": {}, "package_name": "com.example.cli", "drawables": {{"notification_icon": 5}}}}"#,
            api_level
        ),
    )
    .unwrap();
    path
}

fn events(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect()
}

fn process(args: &[&str], message: &str, api_level: u32) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), api_level);
    let message_path = dir.path().join("message.json");
    fs::write(&message_path, message).unwrap();

    pushr_bin()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&message_path)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn help_output() {
    let output = pushr_bin().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("process"));
    assert!(stdout.contains("token"));
    assert!(stdout.contains("open"));
}

#[test]
fn process_background_message_renders() {
    let output = process(
        &[],
        r#"{"data": {"title": "Hi", "body": "There", "sound": "default", "id": "42"}}"#,
        25,
    );
    assert!(output.status.success());

    let events = events(&output);
    assert_eq!(events[0]["event"], "notify");
    assert_eq!(events[0]["key"], 1662);
    assert_eq!(events[0]["descriptor"]["title"], "Hi");
    assert_eq!(events[0]["descriptor"]["sound"]["kind"], "platform_default");
    assert_eq!(events[0]["descriptor"]["small_icon"]["resource"], 5);
    assert_eq!(events[1]["event"], "tap_action");
    assert_eq!(events[2]["event"], "outcome");
    assert_eq!(events[2]["result"]["outcome"], "rendered");
}

#[test]
fn process_foreground_with_consumer_forwards() {
    let output = process(
        &["--foreground", "--consumer"],
        r#"{"data": {"title": "Hi", "id": "1"}}"#,
        33,
    );
    assert!(output.status.success());

    let events = events(&output);
    assert_eq!(events[0]["event"], "app_message");
    assert_eq!(events[0]["payload"]["tap"], false);
    assert_eq!(events[1]["result"]["outcome"], "forwarded");
}

#[test]
fn process_claimed_message() {
    let output = process(
        &["--claim-key", "sdk_ping"],
        r#"{"data": {"title": "Hi", "sdk_ping": "1"}}"#,
        33,
    );
    assert!(output.status.success());

    let events = events(&output);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["result"]["outcome"], "claimed");
    assert_eq!(events[0]["result"]["receiver"], "claim:sdk_ping");
}

#[test]
fn process_invalid_message_fails() {
    let output = process(&[], "not json", 33);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse message JSON"));
}

#[test]
fn token_is_forwarded() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), 33);
    let output = pushr_bin()
        .arg("--config")
        .arg(&config)
        .args(["token", "tok-123"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let events = events(&output);
    assert_eq!(events[0]["event"], "token");
    assert_eq!(events[0]["token"], "tok-123");
}

#[test]
fn open_replays_tap() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), 33);
    let payload_path = dir.path().join("payload.json");
    fs::write(&payload_path, r#"{"id": "42", "title": "Hi", "deep_link": "app://inbox"}"#).unwrap();

    let output = pushr_bin()
        .arg("--config")
        .arg(&config)
        .arg("open")
        .arg(&payload_path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let events = events(&output);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "app_message");
    assert_eq!(events[0]["payload"]["tap"], true);
    assert_eq!(events[0]["payload"]["id"], "42");
    assert_eq!(events[0]["payload"]["deep_link"], "app://inbox");
}

#[test]
fn open_invalid_payload_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), 33);
    let payload_path = dir.path().join("payload.json");
    fs::write(&payload_path, "[1, 2]").unwrap();

    let output = pushr_bin()
        .arg("--config")
        .arg(&config)
        .arg("open")
        .arg(&payload_path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse payload JSON"));
}
