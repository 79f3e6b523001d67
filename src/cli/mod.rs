//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Command};
pub use output::{format_history, format_response};
