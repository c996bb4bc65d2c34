//! CLI module
//!
//! Command-line front end for the custom hostname table.
//!
//! # Commands
//!
//! - `list` - Stream a zone's custom hostnames
//! - `get` - Look up one custom hostname
//! - `columns` - Show the table definition

mod commands;
mod runner;

pub use commands::{Cli, Commands, Format};
pub use runner::Runner;
