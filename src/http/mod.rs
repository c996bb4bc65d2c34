//! HTTP client module
//!
//! Thin reqwest wrapper used by the Cloudflare API client.
//!
//! # Features
//!
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Authentication**: credentials applied by the auth module
//! - **Error classification**: 4xx and 5xx responses become `Error::HttpStatus`

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
