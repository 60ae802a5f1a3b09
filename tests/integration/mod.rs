//! Integration tests for unified alerting settings resolution

mod cli_commands;
mod settings_file;
