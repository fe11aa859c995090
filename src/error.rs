//! Errors returned by the Spotify client.
//!
//! Every failing call is tagged with the stage it failed in (code exchange,
//! refresh, search, playback) and carries a [`Failure`] describing the cause.
//! Provider responses are kept verbatim so they can be logged, and network
//! level problems stay recognisable whichever stage they interrupted.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("authorization code exchange failed: {0}")]
    Exchange(Failure),

    #[error("token refresh failed: {0}")]
    Refresh(Failure),

    #[error("track search failed: {0}")]
    Search(Failure),

    #[error("no track found for query {query:?}")]
    NotFound { query: String },

    #[error("playback could not be started: {0}")]
    Playback(Failure),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ClientError {
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ClientError::Exchange(f)
            | ClientError::Refresh(f)
            | ClientError::Search(f)
            | ClientError::Playback(f) => Some(f),
            ClientError::NotFound { .. } | ClientError::HttpClient(_) => None,
        }
    }

    /// An empty search result. This is an expected outcome, not a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }

    /// The call never got a response: timeout, connect, DNS or TLS failure.
    pub fn is_network(&self) -> bool {
        matches!(self.failure(), Some(Failure::Network(_)))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.failure(), Some(Failure::Network(e)) if e.is_timeout())
    }

    /// Whether the caller may reasonably try again. Only network failures
    /// qualify; the core itself never retries.
    pub fn is_retryable(&self) -> bool {
        self.is_network()
    }

    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self.failure() {
            Some(Failure::Provider(p)) => Some(p),
            _ => None,
        }
    }

    /// The provider's error code, e.g. `invalid_grant` or `PREMIUM_REQUIRED`.
    pub fn error_code(&self) -> Option<&str> {
        self.provider_error().and_then(|p| p.code.as_deref())
    }
}

#[derive(Debug, Error)]
pub enum Failure {
    #[error("{0}")]
    Provider(ProviderError),

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("unexpected response ({reason}): {body}")]
    Malformed { reason: String, body: String },
}

/// A non-2xx answer from the provider, with its diagnostic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub status: u16,
    pub code: Option<String>,
    pub description: Option<String>,
    pub body: String,
}

impl ProviderError {
    /// Builds the error from a status and the raw response body.
    ///
    /// Understands both the accounts service shape
    /// (`{"error": "invalid_grant", "error_description": "..."}`) and the Web
    /// API shape (`{"error": {"status": 403, "message": "...", "reason": "..."}}`).
    /// Anything else is kept only as the raw body.
    pub fn from_response(status: u16, body: String) -> Self {
        let (code, description) = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(ErrorEnvelope::Accounts {
                error,
                error_description,
            }) => (Some(error), error_description),
            Ok(ErrorEnvelope::WebApi { error }) => (error.reason, error.message),
            Err(_) => (None, None),
        };

        Self {
            status,
            code,
            description,
            body,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        match (&self.code, &self.description) {
            (Some(code), Some(desc)) => write!(f, ": {} ({})", code, desc),
            (Some(code), None) => write!(f, ": {}", code),
            (None, Some(desc)) => write!(f, ": {}", desc),
            (None, None) if !self.body.is_empty() => write!(f, ": {}", self.body),
            (None, None) => Ok(()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorEnvelope {
    Accounts {
        error: String,
        error_description: Option<String>,
    },
    WebApi {
        error: WebApiError,
    },
}

#[derive(Deserialize)]
struct WebApiError {
    message: Option<String>,
    reason: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}
