//! Settings file source: INI or TOML, format inferred from the extension.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Add a required settings file to the builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    debug!(config_path = %path.display(), "Adding settings file source");
    Ok(builder.add_source(File::from(path).required(true)))
}
