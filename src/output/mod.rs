//! Output module
//!
//! Turns table rows into something a consumer can read.
//!
//! # Features
//!
//! - **Arrow Schema**: built from the table's column definitions
//! - **RecordBatch**: rows converted column by column
//! - **Row Writer**: JSON lines, pretty JSON, or an ASCII table

mod schema;
mod writer;

pub use schema::{arrow_type, rows_to_batch, table_schema};
pub use writer::{OutputFormat, RowWriter};
