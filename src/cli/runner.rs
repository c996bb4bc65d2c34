//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::ConnectionConfig;
use crate::error::Result;
use crate::output::{OutputFormat, RowWriter};
use crate::table::{CustomHostnameTable, GetQuals, ListQuals};
use futures::StreamExt;
use std::io::Write;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
    connection: Option<ConnectionConfig>,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            connection: None,
        }
    }

    /// Create a runner with an explicit connection config, bypassing
    /// the config file and environment
    pub fn with_connection(cli: Cli, connection: ConnectionConfig) -> Self {
        Self {
            cli,
            connection: Some(connection),
        }
    }

    /// Run the CLI command against stdout
    pub async fn run(&self) -> Result<()> {
        self.run_to(std::io::stdout()).await?;
        Ok(())
    }

    /// Run the CLI command, writing output to `out`
    pub async fn run_to<W: Write>(&self, out: W) -> Result<W> {
        let format = OutputFormat::from(self.cli.format);
        match &self.cli.command {
            Commands::List {
                zone_id,
                name,
                status,
            } => {
                let quals = ListQuals {
                    zone_id: zone_id.clone(),
                    name: name.clone(),
                    status: status.clone(),
                };
                self.list(&quals, out, format).await
            }
            Commands::Get { zone_id, id } => {
                self.get(&GetQuals::new(zone_id, id), out, format).await
            }
            Commands::Columns => self.columns(out, format),
        }
    }

    /// Resolve the connection config
    fn connection_config(&self) -> Result<ConnectionConfig> {
        if let Some(config) = &self.connection {
            return Ok(config.clone());
        }
        let config = match &self.cli.config {
            Some(path) => {
                debug!("Loading connection config from {}", path.display());
                ConnectionConfig::from_file(path)?.with_env_fallback()
            }
            None => ConnectionConfig::from_env(),
        };
        Ok(config)
    }

    async fn list<W: Write>(&self, quals: &ListQuals, out: W, format: OutputFormat) -> Result<W> {
        let table = CustomHostnameTable::new(self.connection_config()?);
        let mut rows = table.list(quals)?;
        let mut writer = RowWriter::new(out, format);

        let mut failure = None;
        while let Some(item) = rows.next().await {
            match item {
                Ok(row) => writer.write_row(&row)?,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        info!(
            "Listed {} custom hostnames in zone {}",
            writer.rows_written(),
            quals.zone_id
        );
        let out = writer.finish()?;
        match failure {
            Some(e) => Err(e),
            None => Ok(out),
        }
    }

    async fn get<W: Write>(&self, quals: &GetQuals, out: W, format: OutputFormat) -> Result<W> {
        let table = CustomHostnameTable::new(self.connection_config()?);
        let mut writer = RowWriter::new(out, format);

        match table.get(quals).await? {
            Some(row) => writer.write_row(&row)?,
            None => info!("Custom hostname {} not found in zone {}", quals.id, quals.zone_id),
        }
        writer.finish()
    }

    fn columns<W: Write>(&self, mut out: W, format: OutputFormat) -> Result<W> {
        let table = CustomHostnameTable::definition();
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, table)?;
                writeln!(out)?;
            }
            OutputFormat::Pretty => {
                serde_json::to_writer_pretty(&mut out, table)?;
                writeln!(out)?;
            }
            OutputFormat::Table => {
                writeln!(out, "{}: {}", table.name, table.description)?;
                for column in table.columns {
                    let kind = serde_json::to_value(column.column_type)?;
                    writeln!(
                        out,
                        "  {:<12} {:<10} {}",
                        column.name,
                        kind.as_str().unwrap_or_default(),
                        column.description
                    )?;
                }
            }
        }
        Ok(out)
    }
}
