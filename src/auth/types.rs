//! Auth configuration types

/// Cloudflare authentication configuration
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication (useful against mock servers)
    #[default]
    None,

    /// Scoped API token, sent as a bearer token
    ApiToken {
        /// The API token
        token: String,
    },

    /// Global API key paired with the account email
    ApiKey {
        /// Account email (`X-Auth-Email`)
        email: String,
        /// Global API key (`X-Auth-Key`)
        key: String,
    },

    /// Origin CA user service key (`X-Auth-User-Service-Key`)
    UserServiceKey {
        /// The service key
        key: String,
    },
}

impl AuthConfig {
    /// Short name of the scheme, safe to log
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ApiToken { .. } => "api_token",
            Self::ApiKey { .. } => "api_key",
            Self::UserServiceKey { .. } => "user_service_key",
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey { email, .. } => f
                .debug_struct("ApiKey")
                .field("email", email)
                .finish_non_exhaustive(),
            other => f
                .debug_struct("AuthConfig")
                .field("scheme", &other.scheme())
                .finish_non_exhaustive(),
        }
    }
}
