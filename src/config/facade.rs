//! Config facade: single entry point for loading settings sections.

use super::merge::merge_policy;
use super::source::SectionSource;
use crate::error::SettingsError;
use crate::logging::LoggingConfig;
use crate::settings::{self, UnifiedSettings, LEGACY_ALERTING_SECTION, UNIFIED_ALERTING_SECTION};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Name of the logging section in the settings file.
pub const LOGGING_SECTION: &str = "logging";

/// Loads settings files and environment overrides, and resolves them.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load an optional settings file layered under the process environment.
    pub fn load(path: Option<&Path>) -> Result<config::Config, SettingsError> {
        Self::load_with_env(path, None)
    }

    /// Load a settings file only. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<config::Config, SettingsError> {
        Self::load_with_env(Some(path), Some(HashMap::new()))
    }

    /// Like [`ConfigLoader::load`], with an explicit environment in place of the process one.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<config::Config, SettingsError> {
        let config = merge_policy::build_layered(path, env)?;
        match path {
            Some(path) => info!(config_path = %path.display(), "Loaded settings"),
            None => debug!("No settings file given, using environment and defaults"),
        }
        Ok(config)
    }

    /// The unified and legacy sections, in that order.
    pub fn sections(config: &config::Config) -> (SectionSource, SectionSource) {
        (
            SectionSource::from_config(config, UNIFIED_ALERTING_SECTION),
            SectionSource::from_config(config, LEGACY_ALERTING_SECTION),
        )
    }

    /// The `logging` section; defaults when the section is absent.
    pub fn logging(config: &config::Config) -> Result<LoggingConfig, SettingsError> {
        match config.get::<LoggingConfig>(LOGGING_SECTION) {
            Ok(logging) => Ok(logging),
            Err(config::ConfigError::NotFound(_)) => Ok(LoggingConfig::default()),
            Err(e) => Err(SettingsError::Load(format!(
                "Invalid [{}] section: {}",
                LOGGING_SECTION, e
            ))),
        }
    }

    /// Resolve settings from an already loaded Config.
    pub fn resolve(config: &config::Config) -> Result<UnifiedSettings, SettingsError> {
        let (unified, legacy) = Self::sections(config);
        settings::resolve(&unified, &legacy)
    }

    /// Load a settings file and resolve it.
    pub fn resolve_file(path: &Path) -> Result<UnifiedSettings, SettingsError> {
        Self::resolve(&Self::load_from_file(path)?)
    }
}
