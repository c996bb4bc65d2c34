// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # Cloudflare Custom Hostname Table
//!
//! Exposes Cloudflare "custom hostname" (SSL for SaaS) resources as a
//! queryable table with a fixed column schema.
//!
//! ## Features
//!
//! - **Streaming list**: a zone's hostnames are fetched page by page and
//!   yielded row by row as the consumer polls
//! - **Server-side filters**: `name` and `status` equality qualifiers are
//!   pushed down to the API
//! - **Point lookup**: fetch one hostname by id; a missing hostname is an
//!   empty result
//! - **Arrow Output**: rows convert to an Arrow `RecordBatch`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cloudflare_custom_hostname::{ConnectionConfig, CustomHostnameTable, ListQuals, Result};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let table = CustomHostnameTable::new(ConnectionConfig::from_env());
//!
//!     let mut rows = table.list(&ListQuals::new("023e105f4ecef8ad9ca31a8372d0c353").status("active"))?;
//!     while let Some(row) = rows.next().await {
//!         println!("{}", row?.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 CustomHostnameTable                      │
//! │  list(ListQuals) → RowStream    get(GetQuals) → Option   │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────┬────────────────┼──────────────┬──────────────┐
//! │   Auth    │     HTTP       │  Pagination  │   Output     │
//! ├───────────┼────────────────┼──────────────┼──────────────┤
//! │ API Token │ reqwest        │ Page number  │ Arrow        │
//! │ API Key   │ Rate Limit     │ total_pages  │ JSON lines   │
//! │ Svc Key   │ Status errors  │ empty page   │              │
//! └───────────┴────────────────┴──────────────┴──────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Connection configuration
pub mod config;

/// Cloudflare authentication schemes
pub mod auth;

/// HTTP client with rate limiting
pub mod http;

/// Cloudflare v4 API client
pub mod cloudflare;

/// Page cursor for listing endpoints
pub mod pagination;

/// The custom hostname table
pub mod table;

/// Arrow conversion and row writers
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ConnectionConfig;
pub use error::{Error, Result};
pub use table::{CustomHostnameRow, CustomHostnameTable, EqualsQuals, GetQuals, ListQuals};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
