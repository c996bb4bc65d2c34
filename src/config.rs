//! Connection configuration
//!
//! Credentials and endpoint settings supplied by the host. A config can be
//! read from a YAML or JSON file, from `CLOUDFLARE_*` environment variables,
//! or both (file values win, the environment fills the gaps).

use crate::auth::AuthConfig;
use crate::cloudflare::{DEFAULT_BASE_URL, DEFAULT_PER_PAGE};
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::OptionStringExt;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable holding a scoped API token
pub const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
/// Environment variable holding the account email
pub const ENV_EMAIL: &str = "CLOUDFLARE_EMAIL";
/// Environment variable holding the global API key
pub const ENV_API_KEY: &str = "CLOUDFLARE_API_KEY";
/// Environment variable holding the origin CA user service key
pub const ENV_USER_SERVICE_KEY: &str = "CLOUDFLARE_API_USER_SERVICE_KEY";

/// Allowed page sizes for the custom hostname listing
const PER_PAGE_RANGE: std::ops::RangeInclusive<u32> = 5..=50;

/// Settings needed to open a connection to the Cloudflare API
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Scoped API token
    #[serde(default)]
    pub api_token: Option<String>,

    /// Account email, used with `api_key`
    #[serde(default)]
    pub email: Option<String>,

    /// Global API key, used with `email`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Origin CA user service key
    #[serde(default)]
    pub user_service_key: Option<String>,

    /// API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size for listings
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Client-side rate limit; `null` disables it
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            email: None,
            api_key: None,
            user_service_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            per_page: default_per_page(),
            rate_limit: default_rate_limit(),
        }
    }
}

impl ConnectionConfig {
    /// Create a config holding an API token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            api_token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Point the config at another API root
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Disable client-side rate limiting
    #[must_use]
    pub fn no_rate_limit(mut self) -> Self {
        self.rate_limit = None;
        self
    }

    /// Parse a config from YAML or JSON text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a config file (YAML or JSON)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Build a config from the process environment
    pub fn from_env() -> Self {
        Self::default().with_env_fallback()
    }

    /// Fill missing credentials from the process environment
    #[must_use]
    pub fn with_env_fallback(self) -> Self {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Fill missing credentials from an arbitrary variable lookup
    #[must_use]
    pub fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fill = |current: Option<String>, key: &str| {
            current
                .none_if_empty()
                .or_else(|| lookup(key).none_if_empty())
        };
        self.api_token = fill(self.api_token, ENV_API_TOKEN);
        self.email = fill(self.email, ENV_EMAIL);
        self.api_key = fill(self.api_key, ENV_API_KEY);
        self.user_service_key = fill(self.user_service_key, ENV_USER_SERVICE_KEY);
        self
    }

    /// Resolve credentials: token, then email + key, then service key
    pub fn auth(&self) -> Result<AuthConfig> {
        let non_empty = |v: &Option<String>| v.clone().none_if_empty();

        if let Some(token) = non_empty(&self.api_token) {
            return Ok(AuthConfig::ApiToken { token });
        }
        if let (Some(email), Some(key)) = (non_empty(&self.email), non_empty(&self.api_key)) {
            return Ok(AuthConfig::ApiKey { email, key });
        }
        if let Some(key) = non_empty(&self.user_service_key) {
            return Ok(AuthConfig::UserServiceKey { key });
        }
        Err(Error::MissingCredentials)
    }

    /// Check endpoint and paging settings
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        url::Url::parse(&self.base_url)?;
        if !PER_PAGE_RANGE.contains(&self.per_page) {
            return Err(Error::InvalidConfigValue {
                field: "per_page".to_string(),
                message: format!(
                    "must be between {} and {}, got {}",
                    PER_PAGE_RANGE.start(),
                    PER_PAGE_RANGE.end(),
                    self.per_page
                ),
            });
        }
        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfigValue {
                field: "timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            rate_limit: self.rate_limit.clone(),
            ..HttpClientConfig::default()
        }
    }
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("has_api_token", &self.api_token.is_some())
            .field("email", &self.email)
            .field("has_api_key", &self.api_key.is_some())
            .field("has_user_service_key", &self.user_service_key.is_some())
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("per_page", &self.per_page)
            .field("rate_limit", &self.rate_limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConnectionConfig::default();
        assert_eq!(config.base_url, "https://api.cloudflare.com/client/v4");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.per_page, 50);
        assert_eq!(config.rate_limit, Some(RateLimiterConfig::default()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r"
api_token: tok-123
per_page: 25
rate_limit:
  requests_per_second: 2
  burst_size: 1
";
        let config = ConnectionConfig::parse(yaml).unwrap();
        assert_eq!(config.api_token.as_deref(), Some("tok-123"));
        assert_eq!(config.per_page, 25);
        assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(2, 1)));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_parse_json_with_rate_limit_disabled() {
        let json = r#"{"email": "ops@example.com", "api_key": "k", "rate_limit": null}"#;
        let config = ConnectionConfig::parse(json).unwrap();
        assert_eq!(config.email.as_deref(), Some("ops@example.com"));
        assert!(config.rate_limit.is_none());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_token: from-file").unwrap();
        writeln!(file, "base_url: http://localhost:8080/client/v4").unwrap();

        let config = ConnectionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_token.as_deref(), Some("from-file"));
        assert_eq!(config.base_url, "http://localhost:8080/client/v4");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConnectionConfig::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "per_page: [not, a, number]").unwrap();

        let err = ConnectionConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("invalid config file"));
    }

    #[test]
    fn test_lookup_fills_only_missing_credentials() {
        let config = ConnectionConfig {
            api_token: Some("from-file".to_string()),
            email: Some(String::new()),
            ..ConnectionConfig::default()
        }
        .with_lookup(lookup_from(&[
            (ENV_API_TOKEN, "from-env"),
            (ENV_EMAIL, "ops@example.com"),
            (ENV_API_KEY, "global-key"),
        ]));

        assert_eq!(config.api_token.as_deref(), Some("from-file"));
        assert_eq!(config.email.as_deref(), Some("ops@example.com"));
        assert_eq!(config.api_key.as_deref(), Some("global-key"));
        assert!(config.user_service_key.is_none());
    }

    #[test]
    fn test_auth_precedence() {
        let all = ConnectionConfig::default().with_lookup(lookup_from(&[
            (ENV_API_TOKEN, "tok"),
            (ENV_EMAIL, "ops@example.com"),
            (ENV_API_KEY, "key"),
            (ENV_USER_SERVICE_KEY, "svc"),
        ]));
        assert_eq!(
            all.auth().unwrap(),
            AuthConfig::ApiToken {
                token: "tok".to_string()
            }
        );

        let key_only = ConnectionConfig::default().with_lookup(lookup_from(&[
            (ENV_EMAIL, "ops@example.com"),
            (ENV_API_KEY, "key"),
            (ENV_USER_SERVICE_KEY, "svc"),
        ]));
        assert_eq!(
            key_only.auth().unwrap(),
            AuthConfig::ApiKey {
                email: "ops@example.com".to_string(),
                key: "key".to_string()
            }
        );

        // A key without an email is not usable on its own
        let service = ConnectionConfig::default()
            .with_lookup(lookup_from(&[(ENV_API_KEY, "key"), (ENV_USER_SERVICE_KEY, "svc")]));
        assert_eq!(
            service.auth().unwrap(),
            AuthConfig::UserServiceKey {
                key: "svc".to_string()
            }
        );
    }

    #[test]
    fn test_auth_missing() {
        let err = ConnectionConfig::default().auth().unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_url = ConnectionConfig::default().base_url("not a url");
        assert!(matches!(bad_url.validate(), Err(Error::InvalidUrl(_))));

        let empty_url = ConnectionConfig::default().base_url("");
        assert!(matches!(
            empty_url.validate(),
            Err(Error::MissingConfigField { .. })
        ));

        let big_page = ConnectionConfig {
            per_page: 500,
            ..ConnectionConfig::default()
        };
        assert!(matches!(
            big_page.validate(),
            Err(Error::InvalidConfigValue { .. })
        ));

        let no_timeout = ConnectionConfig {
            timeout_secs: 0,
            ..ConnectionConfig::default()
        };
        assert!(no_timeout.validate().is_err());
    }

    #[test]
    fn test_http_config() {
        let config = ConnectionConfig::with_token("tok")
            .base_url("http://localhost:9000")
            .no_rate_limit();
        let http = config.http_config();
        assert_eq!(http.timeout, Duration::from_secs(30));
        assert!(http.rate_limit.is_none());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = ConnectionConfig::with_token("super-secret");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("has_api_token: true"));
        assert!(!rendered.contains("super-secret"));
    }
}
