//! CLI route: single route table and run context.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_defaults, format_settings_json, format_settings_text};
use crate::config::ConfigLoader;
use crate::error::SettingsError;
use crate::settings::UnifiedSettings;
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution.
pub struct RunContext {
    config_path: Option<PathBuf>,
}

impl RunContext {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    pub fn execute(&self, command: &Commands) -> Result<String, SettingsError> {
        match command {
            Commands::Resolve { format } => {
                let settings = self.resolve()?;
                match format.as_str() {
                    "json" => format_settings_json(&settings),
                    _ => Ok(format_settings_text(&settings)),
                }
            }
            Commands::Defaults { format } => format_defaults(format),
        }
    }

    fn resolve(&self) -> Result<UnifiedSettings, SettingsError> {
        let config = ConfigLoader::load(self.config_path.as_deref())?;
        let settings = ConfigLoader::resolve(&config)?;
        info!(
            peers = settings.ha_peers.len(),
            execute_alerts = settings.execute_alerts,
            "Resolved unified alerting settings"
        );
        Ok(settings)
    }
}
