//! CLI module for bookshelf
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP server
//! - check-config: Validate a configuration file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check_config, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_response, write_response_to};
