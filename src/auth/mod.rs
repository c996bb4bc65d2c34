//! Authentication module
//!
//! Supports the three Cloudflare credential schemes: API token,
//! global API key with account email, and origin CA user service key.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;

#[cfg(test)]
mod tests;
