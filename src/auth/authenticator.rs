//! Authenticator implementation
//!
//! Applies Cloudflare credentials to outgoing requests.

use super::types::AuthConfig;
use reqwest::RequestBuilder;

/// Header carrying the account email for global API key auth
pub const AUTH_EMAIL_HEADER: &str = "X-Auth-Email";

/// Header carrying the global API key
pub const AUTH_KEY_HEADER: &str = "X-Auth-Key";

/// Header carrying the origin CA user service key
pub const AUTH_USER_SERVICE_KEY_HEADER: &str = "X-Auth-User-Service-Key";

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The configuration this authenticator applies
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,
            AuthConfig::ApiToken { token } => req.bearer_auth(token),
            AuthConfig::ApiKey { email, key } => req
                .header(AUTH_EMAIL_HEADER, email.as_str())
                .header(AUTH_KEY_HEADER, key.as_str()),
            AuthConfig::UserServiceKey { key } => {
                req.header(AUTH_USER_SERVICE_KEY_HEADER, key.as_str())
            }
        }
    }
}
