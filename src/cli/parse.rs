//! CLI parse: clap types for alertcfg. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// alertcfg - Resolve unified alerting settings with legacy fallback
#[derive(Parser)]
#[command(name = "alertcfg")]
#[command(about = "Resolve unified alerting settings with legacy fallback")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (INI or TOML). Environment overrides apply on top.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve settings from the unified_alerting and alerting sections
    Resolve {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Print the built-in defaults as a sample settings document
    Defaults {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml", value_parser = ["toml", "json"])]
        format: String,
    },
}
