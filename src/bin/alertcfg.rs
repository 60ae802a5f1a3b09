//! alertcfg CLI Binary
//!
//! Resolves unified alerting settings and prints them. A settings error fails the process.

use alertcfg::cli::{Cli, RunContext};
use alertcfg::config::ConfigLoader;
use alertcfg::logging::{init_logging, LoggingConfig};
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("alertcfg starting");

    let context = RunContext::new(cli.config.clone());
    match context.execute(&cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", alertcfg::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and the settings file's `[logging]` section.
/// Precedence: --log-level over --verbose over the settings file over defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = ConfigLoader::load(cli.config.as_deref())
        .and_then(|c| ConfigLoader::logging(&c))
        .unwrap_or_default();
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    config
}
