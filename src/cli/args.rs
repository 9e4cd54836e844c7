//! CLI argument definitions using clap
//!
//! Commands:
//! - statbank serve [--config <path>] [--port <port>]
//! - statbank read <table_id> [--config <path>]
//! - statbank metadata <table_id> [--config <path>]
//! - statbank search <keywords>... [--config <path>]
//! - statbank publications [--date <iso-date>] [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// statbank - A partitioning client and tool server for the Statistics
/// Norway StatBank API
#[derive(Parser, Debug)]
#[command(name = "statbank")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP tool server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override for the tool server
        #[arg(long)]
        port: Option<u16>,
    },

    /// Read a whole table, partitioning the selection as needed
    Read {
        /// StatBank table identifier
        table_id: String,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Fetch the raw table description
    Metadata {
        /// StatBank table identifier
        table_id: String,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Search tables by keyword
    Search {
        /// Keywords to search for
        #[arg(required = true)]
        keywords: Vec<String>,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the latest publications from the StatBank feed
    Publications {
        /// Only publications on this ISO date (e.g. 2025-05-02)
        #[arg(long)]
        date: Option<String>,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_read_command() {
        let cli = Cli::try_parse_from(["statbank", "read", "09842"]).unwrap();
        match cli.command {
            Command::Read { table_id, config } => {
                assert_eq!(table_id, "09842");
                assert!(config.is_none());
            }
            _ => panic!("expected read command"),
        }
    }

    #[test]
    fn test_parse_search_requires_keywords() {
        assert!(Cli::try_parse_from(["statbank", "search"]).is_err());

        let cli = Cli::try_parse_from(["statbank", "search", "kpi", "bolig"]).unwrap();
        match cli.command {
            Command::Search { keywords, .. } => assert_eq!(keywords, vec!["kpi", "bolig"]),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["statbank", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { port, .. } => assert_eq!(port, Some(9000)),
            _ => panic!("expected serve command"),
        }
    }
}
