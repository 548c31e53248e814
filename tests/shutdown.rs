#![cfg(unix)]

use assert_cmd::prelude::*;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use reqwest::blocking::Client;
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tempfile::tempdir;
use wait_timeout::ChildExt; // brings .wait_timeout into scope

#[test]
fn serves_data_route_and_exits_on_sigterm() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("weather.toml"),
        r#"[http]
bind = "127.0.0.1:0"

[influx]
url = "http://127.0.0.1:9"
timeout_ms = 500
"#,
    )
    .unwrap();

    // spawn the binary; capture stdout to read "listening on …"
    let mut cmd = Command::cargo_bin("weather-ingest").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("WEATHER__HTTP__BIND")
        .env_remove("INFLUX_URL")
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    let mut child = cmd.spawn().expect("failed to spawn weather-ingest");
    let stdout = child.stdout.take().expect("no stdout captured");
    let mut reader = BufReader::new(stdout);

    let mut line = String::new();
    let start = Instant::now();
    let addr = loop {
        line.clear();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            if start.elapsed() > Duration::from_secs(5) {
                panic!("timed out waiting for 'listening on …'");
            }
            std::thread::sleep(Duration::from_millis(20));
            continue;
        }
        if let Some(rest) = line.trim().strip_prefix("listening on ") {
            break rest.to_string();
        }
        if start.elapsed() > Duration::from_secs(5) {
            panic!("did not see 'listening on …'; last line: {line}");
        }
    };

    let url = format!("http://{addr}/data");
    let client = Client::new();

    let resp = client
        .post(&url)
        .json(&serde_json::json!({"location": "porch", "temperature": "23.5", "humidity": 60.2}))
        .send()
        .expect("server should answer");
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().unwrap();
    assert_eq!(body, serde_json::json!({"error": "Invalid input data"}));

    // nothing listens on port 9, so the write fails
    let resp = client
        .post(&url)
        .json(&serde_json::json!({"location": "porch", "temperature": 23.5, "humidity": 60.2}))
        .send()
        .expect("server should answer");
    assert_eq!(resp.status().as_u16(), 500);

    let pid = child.id();
    kill(Pid::from_raw(pid as i32), Signal::SIGTERM).expect("failed to send SIGTERM");

    match child
        .wait_timeout(Duration::from_secs(5))
        .expect("wait_timeout failed")
    {
        Some(status) => assert!(status.success(), "unexpected exit status: {status:?}"),
        None => {
            let _ = child.kill();
            panic!("process did not exit within timeout after SIGTERM");
        }
    }
}
