//! Loading settings files end to end.

use alertcfg::cli::format_defaults;
use alertcfg::{ConfigLoader, UnifiedSettings};
use std::collections::HashMap;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_ini_with_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("grafana.ini");
    std::fs::write(
        &config_file,
        r#"
[unified_alerting]
admin_config_poll_interval = 2m
ha_listen_address = 0.0.0.0:9095
ha_advertise_address = 10.0.0.5:9095
ha_peers = 10.0.0.6:9095 , 10.0.0.7:9095
ha_peer_timeout =
max_attempts = 3

[alerting]
max_attempts = 6
min_interval_seconds = 1
evaluation_timeout_seconds = 45
"#,
    )
    .unwrap();

    let mut env = HashMap::new();
    env.insert(
        "ALERTCFG_UNIFIED_ALERTING__EXECUTE_ALERTS".to_string(),
        "false".to_string(),
    );
    let config = ConfigLoader::load_with_env(Some(&config_file), Some(env)).unwrap();
    let settings = ConfigLoader::resolve(&config).unwrap();

    assert_eq!(settings.admin_config_poll_interval, Duration::from_secs(120));
    assert_eq!(settings.ha_listen_addr, "0.0.0.0:9095");
    assert_eq!(settings.ha_advertise_addr, "10.0.0.5:9095");
    assert_eq!(settings.ha_peers, vec!["10.0.0.6:9095", "10.0.0.7:9095"]);
    // Empty value behaves as unset.
    assert_eq!(settings.ha_peer_timeout, Duration::from_secs(15));
    // Explicitly set to the default, so the legacy value is used.
    assert_eq!(settings.max_attempts, 6);
    assert_eq!(settings.min_interval, 1);
    assert_eq!(settings.evaluation_timeout, Duration::from_secs(45));
    assert!(!settings.execute_alerts);
}

#[test]
fn test_defaults_document_resolves_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("defaults.toml");
    std::fs::write(&config_file, format_defaults("toml").unwrap()).unwrap();

    let settings = ConfigLoader::resolve_file(&config_file).unwrap();
    assert_eq!(settings, UnifiedSettings::default());
}

#[test]
fn test_unknown_extension_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("settings.conf");
    std::fs::write(&config_file, "[unified_alerting]\n").unwrap();
    assert!(ConfigLoader::load_from_file(&config_file).is_err());
}
