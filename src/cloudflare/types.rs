//! Cloudflare API wire types

use crate::pagination::PageReport;
use crate::types::{JsonObject, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard Cloudflare response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the call succeeded
    #[serde(default)]
    pub success: bool,
    /// Errors reported by the API
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    /// Informational messages
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
    /// The payload
    pub result: Option<T>,
    /// Paging metadata (list endpoints only)
    #[serde(default)]
    pub result_info: Option<ResultInfo>,
}

/// An error or message entry in the envelope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Paging metadata of a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_count: u32,
}

impl From<&ResultInfo> for PageReport {
    fn from(info: &ResultInfo) -> Self {
        PageReport::new(info.page, info.total_pages, info.count)
    }
}

/// A custom hostname (SSL for SaaS) as returned by the API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomHostname {
    /// Identifier; empty while creation is pending
    #[serde(default)]
    pub id: String,
    /// The customer's vanity hostname
    #[serde(default)]
    pub hostname: String,
    /// Hostname status (e.g. "active", "pending")
    #[serde(default)]
    pub status: String,
    /// SSL metadata, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_origin_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_origin_sni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<JsonObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verification_errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_verification: Option<OwnershipVerification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_verification_http: Option<OwnershipVerificationHttp>,
    /// Creation time; absent on some records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CustomHostname {
    /// Status of the hostname's SSL certificate, if reported
    pub fn ssl_status(&self) -> Option<&str> {
        self.ssl
            .as_ref()
            .and_then(|ssl| ssl.get("status"))
            .and_then(JsonValue::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// DNS TXT record proving hostname ownership
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OwnershipVerification {
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// HTTP token proving hostname ownership
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OwnershipVerificationHttp {
    #[serde(default)]
    pub http_url: String,
    #[serde(default)]
    pub http_body: String,
}

/// Server-side filters for the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomHostnameFilter {
    /// Exact hostname
    pub hostname: Option<String>,
    /// Hostname status
    pub status: Option<String>,
}

impl CustomHostnameFilter {
    /// Filter nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one hostname
    #[must_use]
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Restrict to one status
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
