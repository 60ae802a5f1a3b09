//! Merge rules: override order.
//!
//! Precedence (lowest to highest): settings file, then environment. No defaults are
//! seeded here; every key's default belongs to the resolver, which relies on an unset
//! key reading back as exactly its built-in default.

use crate::config::sources::{environment, file};
use config::Config;
use config::ConfigError;
use std::collections::HashMap;
use std::path::Path;

/// Build a Config from the optional settings file and environment overrides.
pub fn build_layered(
    path: Option<&Path>,
    env: Option<HashMap<String, String>>,
) -> Result<Config, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = file::add_to_builder(builder, path)?;
    }
    environment::add_to_builder(builder, env).build()
}
