//! CLI command implementations
//!
//! Commands load configuration, build the async runtime, run one operation,
//! and print its JSON result to stdout. The serve command hands the runtime
//! to the tool server instead.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

use crate::client::{ClientConfig, StatbankClient};
use crate::feed::latest_publications;
use crate::reader::TableReader;
use crate::server::{ServerConfig, StatbankToolHandler, ToolServer};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Client settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Tool server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from a file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let path = match path {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.client.max_cells == 0 {
            return Err(CliError::config_error("client.max_cells must be > 0"));
        }
        if self.client.max_in_flight == 0 {
            return Err(CliError::config_error("client.max_in_flight must be > 0"));
        }
        Ok(())
    }
}

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Dispatch an already-parsed CLI invocation
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Read { table_id, config } => read(config.as_deref(), &table_id),
        Command::Metadata { table_id, config } => metadata(config.as_deref(), &table_id),
        Command::Search { keywords, config } => search(config.as_deref(), &keywords),
        Command::Publications { date, config } => {
            publications(config.as_deref(), date.as_deref())
        }
    }
}

/// Start the HTTP tool server
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let mut server_config = config.server;
    if let Some(port) = port {
        server_config.port = port;
    }

    let handler = StatbankToolHandler::new(config.client);
    let server = ToolServer::new(handler, server_config);

    runtime()?.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::command_failed(format!("Server failed: {}", e)))
    })
}

/// Read a whole table and print it as JSON
pub fn read(config_path: Option<&Path>, table_id: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let reader = TableReader::from_config(config.client);

    let dataset = runtime()?
        .block_on(reader.read_table(table_id))
        .map_err(|e| CliError::command_failed(e.to_string()))?;

    print_json(&dataset)
}

/// Fetch and print the raw table description
pub fn metadata(config_path: Option<&Path>, table_id: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let client = StatbankClient::new(config.client);

    let document = runtime()?
        .block_on(client.table_metadata(table_id))
        .map_err(|e| CliError::command_failed(e.to_string()))?;

    print_json(&document)
}

/// Search tables by keyword and print the results
pub fn search(config_path: Option<&Path>, keywords: &[String]) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let client = StatbankClient::new(config.client);

    let results = runtime()?
        .block_on(client.search(keywords))
        .map_err(|e| CliError::command_failed(e.to_string()))?;

    print_json(&results)
}

/// List the latest publications, optionally filtered by date
pub fn publications(config_path: Option<&Path>, date: Option<&str>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let client = StatbankClient::new(config.client);

    let date = date
        .map(|raw| {
            raw.parse::<NaiveDate>()
                .map_err(|_| CliError::invalid_argument(format!("Not an ISO date: '{}'", raw)))
        })
        .transpose()?;

    let entries = runtime()?.block_on(async {
        let xml = client
            .publications_feed()
            .await
            .map_err(|e| CliError::command_failed(e.to_string()))?;
        latest_publications(&xml, date).map_err(|e| CliError::command_failed(e.to_string()))
    })?;

    print_json(&entries)
}

/// Build the async runtime for one command
fn runtime() -> CliResult<Runtime> {
    Runtime::new().map_err(|e| CliError::runtime_error(format!("Failed to build runtime: {}", e)))
}

/// Print a value as pretty JSON on stdout
fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::command_failed(format!("Failed to render result: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.client.max_cells, 300_000);
        assert_eq!(config.server.port, 7878);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.client.language, "no");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Config::load(Some(Path::new("/nonexistent/statbank.json"))).unwrap_err();
        assert_eq!(err.code().code(), "STATBANK_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let config: Config =
            serde_json::from_str(r#"{"client": {"max_cells": 0}}"#).unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(err.code().code(), "STATBANK_CLI_CONFIG_ERROR");
    }
}
