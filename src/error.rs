//! Error types for unified alerting settings resolution.

use thiserror::Error;

/// Duration parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty duration string")]
    Empty,

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("invalid duration {input:?}: {reason}")]
    Invalid { input: String, reason: String },
}

/// Settings-related errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to parse {field}: {source}")]
    Parse {
        field: &'static str,
        #[source]
        source: ParseError,
    },

    #[error("Configuration error: {0}")]
    Load(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl SettingsError {
    /// Key of the field that failed to parse, if this is a parse failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SettingsError::Parse { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for SettingsError {
    fn from(err: config::ConfigError) -> Self {
        SettingsError::Load(err.to_string())
    }
}
