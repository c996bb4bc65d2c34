//! Row writer
//!
//! Writes table rows to any `io::Write` as they arrive. JSON formats emit
//! each row immediately; the table format buffers rows until `finish`.

use super::schema::rows_to_batch;
use crate::error::Result;
use crate::table::CustomHostnameRow;
use arrow::util::pretty::pretty_format_batches;
use std::io::Write;

/// Rendering of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Indented JSON per row
    Pretty,
    /// ASCII table, printed once all rows are in
    Table,
}

/// Writes rows in the chosen format
pub struct RowWriter<W: Write> {
    out: W,
    format: OutputFormat,
    buffered: Vec<CustomHostnameRow>,
    rows_written: usize,
}

impl<W: Write> RowWriter<W> {
    /// Create a writer over an output sink
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            buffered: Vec::new(),
            rows_written: 0,
        }
    }

    /// Write (or buffer) one row
    pub fn write_row(&mut self, row: &CustomHostnameRow) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, row)?;
                writeln!(self.out)?;
            }
            OutputFormat::Pretty => {
                serde_json::to_writer_pretty(&mut self.out, row)?;
                writeln!(self.out)?;
            }
            OutputFormat::Table => self.buffered.push(row.clone()),
        }
        self.rows_written += 1;
        Ok(())
    }

    /// Number of rows accepted so far
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered output and hand back the sink
    pub fn finish(mut self) -> Result<W> {
        if self.format == OutputFormat::Table {
            let batch = rows_to_batch(&self.buffered)?;
            writeln!(self.out, "{}", pretty_format_batches(&[batch])?)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
