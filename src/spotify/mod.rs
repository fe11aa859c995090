//! # Spotify Client Module
//!
//! This module holds [`AuthExchangeClient`], the one component of the bridge
//! that talks to Spotify. It covers:
//!
//! - **Authorization URL**: builds the consent-screen URL the user is sent to
//! - **Code exchange**: trades a single-use authorization code for tokens
//! - **Token refresh**: trades a refresh token for a fresh access token
//! - **Search and play**: finds the best matching track and starts playback
//!
//! ## Statelessness
//!
//! The client holds only its credentials, the endpoint locations and a pooled
//! `reqwest::Client`. Tokens are always passed in by the caller and handed
//! back, never stored, so a single client can be shared behind an `Arc` by any
//! number of concurrent requests without coordination.
//!
//! ## Timeouts and cancellation
//!
//! Every outbound call is bounded by the timeout given at construction (10
//! seconds by default). A timed out call is reported as a network failure,
//! see [`ClientError::is_retryable`]. Dropping a returned future cancels the
//! request in flight.
//!
//! Response bodies are read up to [`MAX_BODY_BYTES`] (1 MiB); a larger body is
//! reported as malformed without being buffered further.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use spotbridge::{spotify::AuthExchangeClient, types::{ClientCredentials, ProviderEndpoints}};
//!
//! let credentials = ClientCredentials::new("id", "secret", "http://127.0.0.1:3000/callback");
//! let client = AuthExchangeClient::new(credentials, ProviderEndpoints::default())?;
//! let tokens = client.exchange_code_for_tokens(&code).await?;
//! let track = client.search_and_play(&tokens.access_token, "daft punk around the world").await?;
//! ```

mod auth;
mod player;

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::{
    config::{DEFAULT_TIMEOUT, Settings},
    error::{ClientError, Failure, ProviderError},
    types::{ClientCredentials, ProviderEndpoints},
};

/// Largest provider response body the client will read.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

pub struct AuthExchangeClient {
    credentials: ClientCredentials,
    endpoints: ProviderEndpoints,
    http: Client,
    max_body_bytes: usize,
}

impl AuthExchangeClient {
    /// Creates a client with the default 10 second timeout per outbound call.
    pub fn new(
        credentials: ClientCredentials,
        endpoints: ProviderEndpoints,
    ) -> Result<Self, ClientError> {
        Self::with_timeout(credentials, endpoints, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        credentials: ClientCredentials,
        endpoints: ProviderEndpoints,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(ClientError::HttpClient)?;

        Ok(Self {
            credentials,
            endpoints,
            http,
            max_body_bytes: MAX_BODY_BYTES,
        })
    }

    /// Overrides the response body limit.
    pub fn with_body_limit(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ClientError> {
        Self::with_timeout(
            settings.credentials.clone(),
            settings.endpoints.clone(),
            settings.timeout,
        )
    }

    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    pub fn endpoints(&self) -> &ProviderEndpoints {
        &self.endpoints
    }
}

impl std::fmt::Debug for AuthExchangeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthExchangeClient")
            .field("credentials", &self.credentials)
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

/// Reads the body, at most `limit` bytes of it, and turns any non-2xx status
/// into a provider failure.
async fn read_success_body(
    mut response: Response,
    limit: usize,
) -> Result<(StatusCode, String), Failure> {
    let status = response.status();
    let too_large = || Failure::Malformed {
        reason: format!("HTTP {}: response body exceeds {limit} bytes", status.as_u16()),
        body: String::new(),
    };

    if let Some(length) = response.content_length() {
        if length > limit as u64 {
            return Err(too_large());
        }
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(Failure::Network)? {
        if bytes.len() + chunk.len() > limit {
            return Err(too_large());
        }
        bytes.extend_from_slice(&chunk);
    }
    let body = String::from_utf8_lossy(&bytes).into_owned();

    if !status.is_success() {
        return Err(Failure::Provider(ProviderError::from_response(
            status.as_u16(),
            body,
        )));
    }

    Ok((status, body))
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, Failure> {
    serde_json::from_str(body).map_err(|e| Failure::Malformed {
        reason: e.to_string(),
        body: body.to_string(),
    })
}
