//! alertcfg: Unified Alerting Settings Resolution
//!
//! Resolves the `unified_alerting` configuration section against the legacy `alerting`
//! section into one [`UnifiedSettings`] record. A field that still holds its built-in
//! default in the unified section takes the legacy value instead.

pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
pub mod logging;
pub mod settings;

pub use crate::config::{ConfigLoader, ConfigSource, MapSource, SectionSource};
pub use crate::duration::{format_duration, parse_duration};
pub use crate::error::{ParseError, SettingsError};
pub use crate::settings::{resolve, UnifiedSettings};
