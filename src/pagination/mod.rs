//! Pagination module
//!
//! Page-number pagination over Cloudflare's `result_info` metadata.
//!
//! # Overview
//!
//! Listing endpoints are walked one 1-based page at a time. After each page
//! the cursor decides whether another request is needed: it stops when the
//! reported total page count has been reached or when a page reports a
//! count of zero. Either condition alone is enough, so inconsistent metadata can
//! never keep the walk going forever.

mod types;

pub use types::{check_stop_condition, PageCursor, PageReport, StopResult};
