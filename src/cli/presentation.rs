//! Presentation: resolved settings and defaults documents.

use crate::duration::format_duration;
use crate::error::SettingsError;
use crate::settings::{
    keys, UnifiedSettings, DEFAULT_EVALUATION_TIMEOUT_SECONDS, DEFAULT_MIN_INTERVAL_SECONDS,
    LEGACY_ALERTING_SECTION, UNIFIED_ALERTING_SECTION,
};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Resolved settings as a two-column table.
pub fn format_settings_text(settings: &UnifiedSettings) -> String {
    let peers = if settings.ha_peers.is_empty() {
        "-".to_string()
    } else {
        settings.ha_peers.join(", ")
    };
    let advertise = if settings.ha_advertise_addr.is_empty() {
        "-".to_string()
    } else {
        settings.ha_advertise_addr.clone()
    };

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Setting", "Value"]);
    let rows = [
        ("admin_config_poll_interval", format_duration(settings.admin_config_poll_interval)),
        (
            "alertmanager_config_poll_interval",
            format_duration(settings.alertmanager_config_poll_interval),
        ),
        ("ha_listen_addr", settings.ha_listen_addr.clone()),
        ("ha_advertise_addr", advertise),
        ("ha_peers", peers),
        ("ha_peer_timeout", format_duration(settings.ha_peer_timeout)),
        ("ha_gossip_interval", format_duration(settings.ha_gossip_interval)),
        ("ha_push_pull_interval", format_duration(settings.ha_push_pull_interval)),
        ("max_attempts", settings.max_attempts.to_string()),
        ("min_interval", format!("{}s", settings.min_interval)),
        ("evaluation_timeout", format_duration(settings.evaluation_timeout)),
        ("execute_alerts", settings.execute_alerts.to_string()),
    ];
    for (name, value) in rows {
        table.add_row(vec![name.to_string(), value]);
    }

    format!(
        "{}\n\n{}",
        format_section_heading("Unified Alerting Settings"),
        table
    )
}

pub fn format_settings_json(settings: &UnifiedSettings) -> Result<String, SettingsError> {
    serde_json::to_string_pretty(settings).map_err(|e| SettingsError::Output(e.to_string()))
}

/// Both sections filled with the values an unset key resolves to.
/// Loading this document back resolves to `UnifiedSettings::default()`.
pub fn defaults_document() -> toml::Table {
    let defaults = UnifiedSettings::default();

    let mut unified = toml::Table::new();
    let durations = [
        (keys::ADMIN_CONFIG_POLL_INTERVAL, defaults.admin_config_poll_interval),
        (
            keys::ALERTMANAGER_CONFIG_POLL_INTERVAL,
            defaults.alertmanager_config_poll_interval,
        ),
        (keys::HA_PEER_TIMEOUT, defaults.ha_peer_timeout),
        (keys::HA_GOSSIP_INTERVAL, defaults.ha_gossip_interval),
        (keys::HA_PUSH_PULL_INTERVAL, defaults.ha_push_pull_interval),
    ];
    for (key, value) in durations {
        unified.insert(key.to_string(), toml::Value::String(format_duration(value)));
    }
    unified.insert(
        keys::HA_LISTEN_ADDRESS.to_string(),
        toml::Value::String(defaults.ha_listen_addr.clone()),
    );
    unified.insert(
        keys::HA_ADVERTISE_ADDRESS.to_string(),
        toml::Value::String(String::new()),
    );
    unified.insert(keys::HA_PEERS.to_string(), toml::Value::String(String::new()));

    let mut legacy = toml::Table::new();
    for section in [&mut unified, &mut legacy] {
        section.insert(
            keys::EXECUTE_ALERTS.to_string(),
            toml::Value::Boolean(defaults.execute_alerts),
        );
        section.insert(
            keys::EVALUATION_TIMEOUT_SECONDS.to_string(),
            toml::Value::Integer(DEFAULT_EVALUATION_TIMEOUT_SECONDS),
        );
        section.insert(
            keys::MAX_ATTEMPTS.to_string(),
            toml::Value::Integer(defaults.max_attempts),
        );
        section.insert(
            keys::MIN_INTERVAL_SECONDS.to_string(),
            toml::Value::Integer(DEFAULT_MIN_INTERVAL_SECONDS),
        );
    }

    let mut document = toml::Table::new();
    document.insert(UNIFIED_ALERTING_SECTION.to_string(), toml::Value::Table(unified));
    document.insert(LEGACY_ALERTING_SECTION.to_string(), toml::Value::Table(legacy));
    document
}

pub fn format_defaults(format: &str) -> Result<String, SettingsError> {
    let document = defaults_document();
    match format {
        "json" => serde_json::to_string_pretty(&document)
            .map_err(|e| SettingsError::Output(e.to_string())),
        _ => toml::to_string(&document).map_err(|e| SettingsError::Output(e.to_string())),
    }
}
