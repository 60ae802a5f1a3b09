//! CLI domain: parse, route, output, and presentation only.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    defaults_document, format_defaults, format_settings_json, format_settings_text,
};
pub use route::RunContext;
