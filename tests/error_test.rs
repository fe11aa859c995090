use spotbridge::error::{ClientError, ConfigError, Failure, ProviderError};

#[test]
fn test_provider_error_accounts_shape() {
    let err = ProviderError::from_response(
        400,
        r#"{"error":"invalid_grant","error_description":"Authorization code expired"}"#.to_string(),
    );

    assert_eq!(err.status, 400);
    assert_eq!(err.code.as_deref(), Some("invalid_grant"));
    assert_eq!(err.description.as_deref(), Some("Authorization code expired"));
    assert_eq!(
        err.to_string(),
        "HTTP 400: invalid_grant (Authorization code expired)"
    );
}

#[test]
fn test_provider_error_web_api_shape() {
    let err = ProviderError::from_response(
        404,
        r#"{"error":{"status":404,"message":"Player command failed: No active device found","reason":"NO_ACTIVE_DEVICE"}}"#
            .to_string(),
    );

    assert_eq!(err.code.as_deref(), Some("NO_ACTIVE_DEVICE"));
    assert_eq!(
        err.description.as_deref(),
        Some("Player command failed: No active device found")
    );
}

#[test]
fn test_provider_error_unstructured_body_is_kept() {
    let err = ProviderError::from_response(502, "Bad Gateway".to_string());

    assert_eq!(err.code, None);
    assert_eq!(err.description, None);
    assert_eq!(err.body, "Bad Gateway");
    assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");

    // Empty body
    assert_eq!(ProviderError::from_response(500, String::new()).to_string(), "HTTP 500");
}

#[test]
fn test_client_error_classification() {
    let not_found = ClientError::NotFound {
        query: "xyz".to_string(),
    };
    assert!(not_found.is_not_found());
    assert!(!not_found.is_network());
    assert!(not_found.failure().is_none());
    assert!(not_found.error_code().is_none());

    let playback = ClientError::Playback(Failure::Provider(ProviderError::from_response(
        403,
        r#"{"error":{"status":403,"message":"Premium required","reason":"PREMIUM_REQUIRED"}}"#
            .to_string(),
    )));
    assert!(!playback.is_not_found());
    assert!(!playback.is_retryable());
    assert_eq!(playback.error_code(), Some("PREMIUM_REQUIRED"));
    assert!(playback.to_string().starts_with("playback could not be started"));

    let malformed = ClientError::Search(Failure::Malformed {
        reason: "expected value".to_string(),
        body: "<html>".to_string(),
    });
    assert!(malformed.provider_error().is_none());
    assert!(malformed.to_string().contains("<html>"));
}

#[test]
fn test_config_error_messages() {
    assert_eq!(
        ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID").to_string(),
        "SPOTIFY_API_AUTH_CLIENT_ID must be set"
    );
    assert_eq!(
        ConfigError::Invalid {
            var: "SERVER_ADDRESS",
            reason: "bad".to_string()
        }
        .to_string(),
        "SERVER_ADDRESS is invalid: bad"
    );
}
