//! Cloudflare API client for custom hostnames

use super::types::{ApiEnvelope, CustomHostname, CustomHostnameFilter, ResultInfo};
use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Page size used for listings (the endpoint maximum)
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Client for the custom hostname endpoints of one account
#[derive(Debug, Clone)]
pub struct CloudflareClient {
    http: HttpClient,
    base_url: Url,
    per_page: u32,
}

impl CloudflareClient {
    /// Create a client over an existing HTTP client
    pub fn new(http: HttpClient, base_url: &str, per_page: u32) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!("base URL '{base_url}' cannot be a base")));
        }
        Ok(Self {
            http,
            base_url,
            per_page,
        })
    }

    /// Open a connection from host-supplied configuration
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        config.validate()?;
        let auth = config.auth()?;
        debug!("Connecting to {} using {} auth", config.base_url, auth.scheme());
        let http = HttpClient::new(&config.http_config(), auth)?;
        Self::new(http, &config.base_url, config.per_page)
    }

    /// Fetch one page of a zone's custom hostnames.
    ///
    /// Filters are applied server-side. The returned `ResultInfo` is `None`
    /// when the API omits paging metadata.
    pub async fn custom_hostnames(
        &self,
        zone_id: &str,
        page: u32,
        filter: &CustomHostnameFilter,
    ) -> Result<(Vec<CustomHostname>, Option<ResultInfo>)> {
        let url = self.endpoint(&["zones", zone_id, "custom_hostnames"])?;
        let request = RequestConfig::new()
            .query("page", page.to_string())
            .query("per_page", self.per_page.to_string())
            .query_opt("hostname", filter.hostname.as_deref())
            .query_opt("status", filter.status.as_deref());

        let envelope: ApiEnvelope<Vec<CustomHostname>> = self.fetch(&url, request).await?;
        Ok((envelope.result.unwrap_or_default(), envelope.result_info))
    }

    /// Fetch a single custom hostname by identifier
    pub async fn custom_hostname(&self, zone_id: &str, id: &str) -> Result<CustomHostname> {
        let url = self.endpoint(&["zones", zone_id, "custom_hostnames", id])?;
        let envelope: ApiEnvelope<CustomHostname> = self.fetch(&url, RequestConfig::new()).await?;
        envelope
            .result
            .ok_or_else(|| Error::api(0, "response carried no result"))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        request: RequestConfig,
    ) -> Result<ApiEnvelope<T>> {
        let envelope: ApiEnvelope<T> = self.http.get_json(url, request).await?;
        if !envelope.success {
            return Err(match envelope.errors.first() {
                Some(e) => Error::api(e.code, e.message.clone()),
                None => Error::api(0, "request was not successful"),
            });
        }
        Ok(envelope)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config("base URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }
}
