//! Unified Alerting Settings
//!
//! Resolves the `unified_alerting` section against the legacy `alerting` section into one
//! [`UnifiedSettings`] record. Fields with a legacy equivalent use the default-sentinel rule:
//! when the unified value equals its built-in default, the legacy value is used instead.

use crate::config::ConfigSource;
use crate::duration::{format_duration, parse_duration};
use crate::error::SettingsError;
use serde::{Serialize, Serializer};
use std::time::Duration;
use tracing::debug;

/// Name of the unified alerting section.
pub const UNIFIED_ALERTING_SECTION: &str = "unified_alerting";
/// Name of the legacy alerting section.
pub const LEGACY_ALERTING_SECTION: &str = "alerting";

/// Cluster listen address.
pub const DEFAULT_CLUSTER_ADDR: &str = "0.0.0.0:9094";
/// Time to wait for a peer before giving up on it.
pub const DEFAULT_PEER_TIMEOUT: Duration = Duration::from_secs(15);
/// Alertmanager cluster gossip default.
pub const DEFAULT_GOSSIP_INTERVAL: Duration = Duration::from_millis(200);
/// Alertmanager cluster push/pull default.
pub const DEFAULT_PUSH_PULL_INTERVAL: Duration = Duration::from_secs(60);
/// How often the scheduler polls admin configuration.
pub const DEFAULT_ADMIN_CONFIG_POLL_INTERVAL: Duration = Duration::from_secs(60);
/// How often Alertmanager configuration is polled.
pub const DEFAULT_ALERTMANAGER_CONFIG_POLL_INTERVAL: Duration = Duration::from_secs(60);
/// Evaluation retry ceiling. Also the sentinel and default for the legacy lookup.
pub const DEFAULT_MAX_ATTEMPTS: i64 = 3;
/// Unified alerting's own minimum. Also the sentinel and default for the legacy lookup.
pub const DEFAULT_MIN_INTERVAL_SECONDS: i64 = 10;
/// The legacy scheduler's minimum. Never used as a sentinel.
pub const LEGACY_DEFAULT_MIN_INTERVAL_SECONDS: i64 = 1;
/// Evaluation timeout. Also the sentinel and default for the legacy lookup.
pub const DEFAULT_EVALUATION_TIMEOUT_SECONDS: i64 = 30;
/// Only `true` triggers the legacy lookup.
pub const DEFAULT_EXECUTE_ALERTS: bool = true;

pub mod keys {
    pub const ADMIN_CONFIG_POLL_INTERVAL: &str = "admin_config_poll_interval";
    pub const ALERTMANAGER_CONFIG_POLL_INTERVAL: &str = "alertmanager_config_poll_interval";
    pub const HA_PEER_TIMEOUT: &str = "ha_peer_timeout";
    pub const HA_GOSSIP_INTERVAL: &str = "ha_gossip_interval";
    pub const HA_PUSH_PULL_INTERVAL: &str = "ha_push_pull_interval";
    pub const HA_LISTEN_ADDRESS: &str = "ha_listen_address";
    pub const HA_ADVERTISE_ADDRESS: &str = "ha_advertise_address";
    pub const HA_PEERS: &str = "ha_peers";
    pub const EXECUTE_ALERTS: &str = "execute_alerts";
    pub const EVALUATION_TIMEOUT_SECONDS: &str = "evaluation_timeout_seconds";
    pub const MAX_ATTEMPTS: &str = "max_attempts";
    pub const MIN_INTERVAL_SECONDS: &str = "min_interval_seconds";
}

/// Resolved unified alerting settings. Built fresh by [`resolve`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnifiedSettings {
    #[serde(serialize_with = "serialize_duration")]
    pub admin_config_poll_interval: Duration,
    #[serde(serialize_with = "serialize_duration")]
    pub alertmanager_config_poll_interval: Duration,
    pub ha_listen_addr: String,
    pub ha_advertise_addr: String,
    pub ha_peers: Vec<String>,
    #[serde(serialize_with = "serialize_duration")]
    pub ha_peer_timeout: Duration,
    #[serde(serialize_with = "serialize_duration")]
    pub ha_gossip_interval: Duration,
    #[serde(serialize_with = "serialize_duration")]
    pub ha_push_pull_interval: Duration,
    pub max_attempts: i64,
    /// Seconds.
    pub min_interval: i64,
    #[serde(serialize_with = "serialize_duration")]
    pub evaluation_timeout: Duration,
    pub execute_alerts: bool,
}

impl Default for UnifiedSettings {
    /// What resolution yields when neither section sets anything.
    fn default() -> Self {
        Self {
            admin_config_poll_interval: DEFAULT_ADMIN_CONFIG_POLL_INTERVAL,
            alertmanager_config_poll_interval: DEFAULT_ALERTMANAGER_CONFIG_POLL_INTERVAL,
            ha_listen_addr: DEFAULT_CLUSTER_ADDR.to_string(),
            ha_advertise_addr: String::new(),
            ha_peers: Vec::new(),
            ha_peer_timeout: DEFAULT_PEER_TIMEOUT,
            ha_gossip_interval: DEFAULT_GOSSIP_INTERVAL,
            ha_push_pull_interval: DEFAULT_PUSH_PULL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_interval: DEFAULT_MIN_INTERVAL_SECONDS,
            evaluation_timeout: seconds(DEFAULT_EVALUATION_TIMEOUT_SECONDS),
            execute_alerts: DEFAULT_EXECUTE_ALERTS,
        }
    }
}

fn serialize_duration<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(*duration))
}

/// Resolve unified alerting settings from the unified section and the legacy section.
///
/// Fails on the first malformed duration, naming its key. No partial record is returned.
pub fn resolve(
    unified: &impl ConfigSource,
    legacy: &impl ConfigSource,
) -> Result<UnifiedSettings, SettingsError> {
    let admin_config_poll_interval = duration_field(
        unified,
        keys::ADMIN_CONFIG_POLL_INTERVAL,
        DEFAULT_ADMIN_CONFIG_POLL_INTERVAL,
    )?;
    let alertmanager_config_poll_interval = duration_field(
        unified,
        keys::ALERTMANAGER_CONFIG_POLL_INTERVAL,
        DEFAULT_ALERTMANAGER_CONFIG_POLL_INTERVAL,
    )?;
    let ha_peer_timeout = duration_field(unified, keys::HA_PEER_TIMEOUT, DEFAULT_PEER_TIMEOUT)?;
    let ha_gossip_interval =
        duration_field(unified, keys::HA_GOSSIP_INTERVAL, DEFAULT_GOSSIP_INTERVAL)?;
    let ha_push_pull_interval =
        duration_field(unified, keys::HA_PUSH_PULL_INTERVAL, DEFAULT_PUSH_PULL_INTERVAL)?;

    let ha_listen_addr = unified.get_string(keys::HA_LISTEN_ADDRESS, DEFAULT_CLUSTER_ADDR);
    let ha_advertise_addr = unified.get_string(keys::HA_ADVERTISE_ADDRESS, "");
    let ha_peers = parse_peers(&unified.get_string(keys::HA_PEERS, ""));

    // One-way gate, not `fallback`: only `true` defers to the legacy value,
    // an explicit `false` is final.
    let execute_alerts = if unified.get_bool(keys::EXECUTE_ALERTS, DEFAULT_EXECUTE_ALERTS) {
        legacy.get_bool(keys::EXECUTE_ALERTS, DEFAULT_EXECUTE_ALERTS)
    } else {
        false
    };

    let evaluation_timeout_seconds = int_field(
        unified,
        legacy,
        keys::EVALUATION_TIMEOUT_SECONDS,
        DEFAULT_EVALUATION_TIMEOUT_SECONDS,
    );
    let max_attempts = int_field(unified, legacy, keys::MAX_ATTEMPTS, DEFAULT_MAX_ATTEMPTS);
    // The legacy lookup uses the unified default, not LEGACY_DEFAULT_MIN_INTERVAL_SECONDS,
    // so an invalid legacy value lands on unified alerting's minimum.
    let min_interval = int_field(
        unified,
        legacy,
        keys::MIN_INTERVAL_SECONDS,
        DEFAULT_MIN_INTERVAL_SECONDS,
    );

    Ok(UnifiedSettings {
        admin_config_poll_interval,
        alertmanager_config_poll_interval,
        ha_listen_addr,
        ha_advertise_addr,
        ha_peers,
        ha_peer_timeout,
        ha_gossip_interval,
        ha_push_pull_interval,
        max_attempts,
        min_interval,
        evaluation_timeout: seconds(evaluation_timeout_seconds),
        execute_alerts,
    })
}

/// Default-sentinel rule: keep `value` unless it equals `default`, in which case the
/// legacy lookup decides. `legacy` is only invoked on fallback.
pub fn fallback<T: PartialEq>(value: T, default: &T, legacy: impl FnOnce() -> T) -> T {
    if value == *default {
        legacy()
    } else {
        value
    }
}

/// Split a comma-separated peer list, trimming each entry. Empty input yields no peers.
pub fn parse_peers(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|peer| peer.trim().to_string()).collect()
}

fn duration_field(
    source: &impl ConfigSource,
    key: &'static str,
    default: Duration,
) -> Result<Duration, SettingsError> {
    let raw = source.get_string(key, &format_duration(default));
    parse_duration(&raw).map_err(|source| SettingsError::Parse { field: key, source })
}

fn int_field(
    unified: &impl ConfigSource,
    legacy: &impl ConfigSource,
    key: &str,
    default: i64,
) -> i64 {
    fallback(unified.get_int(key, default), &default, || {
        let value = legacy.get_int(key, default);
        debug!(
            key,
            value,
            legacy_section = legacy.name(),
            "Unified value at default, using legacy value"
        );
        value
    })
}

/// Whole seconds as a duration. Negative counts clamp to zero.
fn seconds(count: i64) -> Duration {
    Duration::from_secs(u64::try_from(count).unwrap_or(0))
}
