//! CLI binary behavior.

use std::process::Command;
use tempfile::TempDir;

fn alertcfg() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_alertcfg"));
    command.env_remove("ALERTCFG_LOG").env_remove("ALERTCFG_LOG_FORMAT");
    command
}

#[test]
fn test_resolve_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("alerting.ini");
    std::fs::write(
        &config_file,
        "[unified_alerting]\nha_peers = a:9094,b:9094\n\n[alerting]\nmax_attempts = 7\n",
    )
    .unwrap();

    let output = alertcfg()
        .arg("--config")
        .arg(&config_file)
        .args(["resolve", "--format", "json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "resolve should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ha_peers"], serde_json::json!(["a:9094", "b:9094"]));
    assert_eq!(value["max_attempts"], 7);
    assert_eq!(value["ha_peer_timeout"], "15s");
}

#[test]
fn test_resolve_fails_on_malformed_duration() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("alerting.ini");
    std::fs::write(&config_file, "[unified_alerting]\nha_peer_timeout = abc\n").unwrap();

    let output = alertcfg()
        .arg("--config")
        .arg(&config_file)
        .arg("resolve")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ha_peer_timeout"), "stderr={:?}", stderr);
}

#[test]
fn test_defaults_toml() {
    let output = alertcfg().arg("defaults").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[unified_alerting]"));
    assert!(stdout.contains("[alerting]"));
    assert!(stdout.contains("ha_gossip_interval = \"200ms\""));
}
