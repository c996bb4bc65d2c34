//! CLI commands and argument parsing

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query Cloudflare custom hostnames
#[derive(Parser, Debug)]
#[command(name = "cloudflare-custom-hostname")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connection config file (YAML or JSON); CLOUDFLARE_* variables fill the gaps
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: Format,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List custom hostnames of a zone
    List {
        /// Zone identifier
        #[arg(long)]
        zone_id: String,

        /// Only this hostname
        #[arg(long)]
        name: Option<String>,

        /// Only hostnames in this status
        #[arg(long)]
        status: Option<String>,
    },

    /// Get one custom hostname by id
    Get {
        /// Zone identifier
        #[arg(long)]
        zone_id: String,

        /// Custom hostname identifier
        #[arg(long)]
        id: String,
    },

    /// Show the table's columns and key columns
    Columns,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// JSON output (one row per line)
    Json,
    /// Indented JSON
    Pretty,
    /// ASCII table
    Table,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Pretty => OutputFormat::Pretty,
            Format::Table => OutputFormat::Table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from([
            "cloudflare-custom-hostname",
            "--format",
            "table",
            "list",
            "--zone-id",
            "z1",
            "--status",
            "active",
        ]);
        assert_eq!(cli.format, Format::Table);
        match cli.command {
            Commands::List {
                zone_id,
                name,
                status,
            } => {
                assert_eq!(zone_id, "z1");
                assert!(name.is_none());
                assert_eq!(status.as_deref(), Some("active"));
            }
            other => panic!("Expected List, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_get_requires_id() {
        let result = Cli::try_parse_from(["cloudflare-custom-hostname", "get", "--zone-id", "z1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "cloudflare-custom-hostname",
            "get",
            "--zone-id",
            "z1",
            "--id",
            "abc",
            "-v",
            "-C",
            "cf.yaml",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("cf.yaml")));
        assert_eq!(OutputFormat::from(cli.format), OutputFormat::Json);
    }
}
