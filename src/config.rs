//! Configuration System
//!
//! Key/value access to the `unified_alerting` and `alerting` sections, and loading of
//! those sections from an INI or TOML settings file with environment overrides.

mod facade;
mod merge;
mod source;
mod sources;

pub use facade::{ConfigLoader, LOGGING_SECTION};
pub use source::{ConfigSource, MapSource, SectionSource};
pub use sources::environment::ENV_PREFIX;
