//! Custom hostname table
//!
//! Exposes Cloudflare custom hostnames as rows of a fixed column schema.
//!
//! # Overview
//!
//! - `CustomHostnameTable::list` streams every hostname of a zone, page by
//!   page, with optional server-side `name` / `status` filters
//! - `CustomHostnameTable::get` looks up one hostname by id; a missing
//!   hostname is an empty result, not an error
//!
//! The API never echoes the zone back on a hostname, so `zone_id` is filled
//! from the query qualifiers after each row is mapped.

mod hostname;
mod types;

pub use hostname::{fetch_custom_hostname, stream_custom_hostnames, CustomHostnameTable, RowStream};
pub use types::{
    hydrate_zone_id, ColumnDef, ColumnType, CustomHostnameRow, EqualsQuals, GetQuals, KeyColumn,
    ListQuals, TableDef, ZoneQual, CUSTOM_HOSTNAME_TABLE,
};
