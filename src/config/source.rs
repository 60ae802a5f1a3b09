//! Typed-default key/value access over a single configuration section.
//!
//! Accessors never fail: a missing, empty, or unparsable value yields the caller's default.

use config::Value;
use std::collections::HashMap;
use tracing::warn;

/// Read-only key/value capability consumed by the settings resolver.
pub trait ConfigSource {
    /// Section name, used in diagnostics.
    fn name(&self) -> &str;

    /// Raw value for `key`, if present.
    fn lookup(&self, key: &str) -> Option<String>;

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.lookup(key) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    }

    fn get_int(&self, key: &str, default: i64) -> i64 {
        let Some(raw) = self.lookup(key).filter(|v| !v.trim().is_empty()) else {
            return default;
        };
        raw.trim().parse().unwrap_or_else(|_| {
            warn!(
                section = self.name(),
                key,
                value = %raw,
                default,
                "Ignoring non-integer value"
            );
            default
        })
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        let Some(raw) = self.lookup(key).filter(|v| !v.trim().is_empty()) else {
            return default;
        };
        parse_bool(&raw).unwrap_or_else(|| {
            warn!(
                section = self.name(),
                key,
                value = %raw,
                default,
                "Ignoring non-boolean value"
            );
            default
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" | "on" => Some(true),
        "0" | "f" | "false" | "n" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// One named section of a loaded `config::Config`.
#[derive(Debug, Clone)]
pub struct SectionSource {
    name: String,
    values: HashMap<String, Value>,
}

impl SectionSource {
    /// Extract `section` from `config`; a missing section becomes an empty source.
    pub fn from_config(config: &config::Config, section: &str) -> Self {
        let values = match config.get_table(section) {
            Ok(table) => table.into_iter().collect(),
            Err(config::ConfigError::NotFound(_)) => HashMap::new(),
            Err(e) => {
                warn!(section, error = %e, "Section is not a table, treating as empty");
                HashMap::new()
            }
        };
        Self {
            name: section.to_string(),
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for SectionSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let value = self.values.get(key)?.clone();
        match value.into_string() {
            Ok(raw) => Some(raw),
            Err(e) => {
                warn!(
                    section = %self.name,
                    key,
                    error = %e,
                    "Ignoring non-scalar value"
                );
                None
            }
        }
    }
}

/// In-memory section, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    name: String,
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut source = MapSource::default();
        for (k, v) in iter {
            source.insert(k, v);
        }
        source
    }
}

impl ConfigSource for MapSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
