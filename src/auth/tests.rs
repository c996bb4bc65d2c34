//! Tests for the auth module

use super::*;

fn build(auth: &Authenticator) -> reqwest::Request {
    let client = reqwest::Client::new();
    let req = client.get("https://api.cloudflare.com/client/v4/zones");
    auth.apply(req).build().unwrap()
}

#[test]
fn test_no_auth() {
    let built = build(&Authenticator::new(AuthConfig::None));
    assert!(built.headers().get("Authorization").is_none());
    assert!(built.headers().get("X-Auth-Key").is_none());
}

#[test]
fn test_api_token() {
    let auth = Authenticator::new(AuthConfig::ApiToken {
        token: "tok-123".to_string(),
    });

    let built = build(&auth);
    assert_eq!(built.headers().get("Authorization").unwrap(), "Bearer tok-123");
}

#[test]
fn test_api_key_and_email() {
    let auth = Authenticator::new(AuthConfig::ApiKey {
        email: "ops@example.com".to_string(),
        key: "global-key".to_string(),
    });

    let built = build(&auth);
    assert_eq!(built.headers().get("X-Auth-Email").unwrap(), "ops@example.com");
    assert_eq!(built.headers().get("X-Auth-Key").unwrap(), "global-key");
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_user_service_key() {
    let auth = Authenticator::new(AuthConfig::UserServiceKey {
        key: "v1.0-service".to_string(),
    });

    let built = build(&auth);
    assert_eq!(
        built.headers().get("X-Auth-User-Service-Key").unwrap(),
        "v1.0-service"
    );
}

#[test]
fn test_debug_hides_secrets() {
    let token = AuthConfig::ApiToken {
        token: "super-secret".to_string(),
    };
    let rendered = format!("{token:?}");
    assert!(rendered.contains("api_token"));
    assert!(!rendered.contains("super-secret"));

    let key = AuthConfig::ApiKey {
        email: "ops@example.com".to_string(),
        key: "global-key".to_string(),
    };
    let rendered = format!("{key:?}");
    assert!(rendered.contains("ops@example.com"));
    assert!(!rendered.contains("global-key"));
}
