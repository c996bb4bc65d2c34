//! HTTP client with rate limiting
//!
//! Every request waits on the shared token bucket, carries the configured
//! credentials, and is sent exactly once. Any 4xx/5xx answer is turned into
//! `Error::HttpStatus` with the response body attached.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Transport settings
#[derive(Debug, Clone, PartialEq)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    /// `None` disables client-side throttling
    pub rate_limit: Option<RateLimiterConfig>,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            rate_limit: Some(RateLimiterConfig::default()),
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

/// Query string of one request, sent in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub query: Vec<(String, String)>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Like `query`, but skipped when `value` is `None`
    #[must_use]
    pub fn query_opt(self, key: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }
}

/// Authenticated, throttled GET client
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    authenticator: Authenticator,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig, auth: AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            authenticator: Authenticator::new(auth),
            rate_limiter: config.rate_limit.as_ref().map(RateLimiter::new),
        })
    }

    /// GET an absolute URL and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, request: RequestConfig) -> Result<T> {
        if let Some(limiter) = &self.rate_limiter {
            if !limiter.try_acquire() {
                warn!(url, "Rate limit reached, waiting");
                limiter.wait().await;
            }
        }

        let mut req = self.client.get(url);
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        let response = self.authenticator.apply(req).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            debug!(url, status = status.as_u16(), "Request failed");
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!(url, status = status.as_u16(), "Request succeeded");
        Ok(response.json().await?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("auth", &self.authenticator.config().scheme())
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}
