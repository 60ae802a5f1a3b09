//! Environment source: `ALERTCFG_<SECTION>__<KEY>`, e.g. `ALERTCFG_UNIFIED_ALERTING__HA_PEERS`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;
use std::collections::HashMap;

pub const ENV_PREFIX: &str = "ALERTCFG";

/// Add environment overrides to the builder.
/// `vars` replaces the process environment when given.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<HashMap<String, String>>,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(vars),
    )
}
