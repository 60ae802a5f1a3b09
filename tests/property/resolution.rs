//! Property tests for the default-sentinel rule and peer list parsing.

use alertcfg::settings::{
    keys, parse_peers, DEFAULT_EVALUATION_TIMEOUT_SECONDS, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MIN_INTERVAL_SECONDS,
};
use alertcfg::{format_duration, parse_duration, resolve, MapSource};
use proptest::prelude::*;
use std::time::Duration;

const INT_FIELDS: [(&str, i64); 3] = [
    (keys::MAX_ATTEMPTS, DEFAULT_MAX_ATTEMPTS),
    (keys::MIN_INTERVAL_SECONDS, DEFAULT_MIN_INTERVAL_SECONDS),
    (keys::EVALUATION_TIMEOUT_SECONDS, DEFAULT_EVALUATION_TIMEOUT_SECONDS),
];

fn resolved_int(key: &str, unified: Option<i64>, legacy: Option<i64>) -> i64 {
    let mut unified_source = MapSource::new("unified_alerting");
    let mut legacy_source = MapSource::new("alerting");
    if let Some(v) = unified {
        unified_source.insert(key, v.to_string());
    }
    if let Some(v) = legacy {
        legacy_source.insert(key, v.to_string());
    }
    let settings = resolve(&unified_source, &legacy_source).unwrap();
    match key {
        keys::MAX_ATTEMPTS => settings.max_attempts,
        keys::MIN_INTERVAL_SECONDS => settings.min_interval,
        _ => settings.evaluation_timeout.as_secs() as i64,
    }
}

proptest! {
    #[test]
    fn prop_non_default_unified_wins(field in 0..3usize, unified in 0i64..100_000, legacy in 0i64..100_000) {
        let (key, default) = INT_FIELDS[field];
        prop_assume!(unified != default);
        prop_assert_eq!(resolved_int(key, Some(unified), Some(legacy)), unified);
    }

    #[test]
    fn prop_default_unified_defers_to_legacy(field in 0..3usize, legacy in 0i64..100_000, explicit in any::<bool>()) {
        let (key, default) = INT_FIELDS[field];
        let unified = if explicit { Some(default) } else { None };
        prop_assert_eq!(resolved_int(key, unified, Some(legacy)), legacy);
        prop_assert_eq!(resolved_int(key, unified, None), default);
    }

    #[test]
    fn prop_peers_trimmed_and_counted(peers in proptest::collection::vec("[a-z0-9.:]{1,12}", 1..6), pad in " {0,3}") {
        let raw = peers
            .iter()
            .map(|p| format!("{pad}{p}{pad}"))
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(parse_peers(&raw), peers);
    }

    #[test]
    fn prop_formatted_durations_reparse(millis in 0u64..10_000_000_000) {
        let duration = Duration::from_millis(millis);
        prop_assert_eq!(parse_duration(&format_duration(duration)).unwrap(), duration);
    }

    #[test]
    fn prop_resolve_idempotent(max_attempts in any::<i64>(), peers in "[a-z, ]{0,20}") {
        let unified = MapSource::new("unified_alerting")
            .with(keys::MAX_ATTEMPTS, max_attempts.to_string())
            .with(keys::HA_PEERS, peers);
        let legacy = MapSource::new("alerting");
        prop_assert_eq!(resolve(&unified, &legacy).unwrap(), resolve(&unified, &legacy).unwrap());
    }
}
