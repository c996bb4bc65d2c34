//! Cloudflare v4 API client
//!
//! Typed access to the custom hostname endpoints:
//!
//! - `GET /zones/{zone_id}/custom_hostnames` - one page of a zone's hostnames
//! - `GET /zones/{zone_id}/custom_hostnames/{id}` - a single hostname
//!
//! Every response arrives wrapped in the standard envelope
//! (`success`, `errors`, `messages`, `result`, `result_info`).

mod client;
mod types;

pub use client::{CloudflareClient, DEFAULT_BASE_URL, DEFAULT_PER_PAGE};
pub use types::{
    ApiEnvelope, ApiMessage, CustomHostname, CustomHostnameFilter, OwnershipVerification,
    OwnershipVerificationHttp, ResultInfo,
};
