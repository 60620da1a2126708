//! CLI command implementations
//!
//! `serve` owns the process lifecycle: configuration load, store
//! construction, server run, shutdown on Ctrl-C.

use std::path::Path;

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Build the effective configuration: file (or defaults), then flag overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<ServerConfig> {
    let mut config = match config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Start the HTTP server and block until it shuts down
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::ServerStart);

    let config = resolve_config(config_path, host, port)?;
    Logger::set_min_severity(config.severity()?);

    let source = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let addr = config.socket_addr();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("source", source.as_str()), ("addr", addr.as_str())],
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate a configuration file and print the effective settings
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = resolve_config(Some(config_path), None, None)?;
    write_response(serde_json::to_value(&config)?)
}
