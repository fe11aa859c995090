use reqwest::header::AUTHORIZATION;
use tracing::{debug, instrument, warn};

use super::{AuthExchangeClient, parse_body, read_success_body};
use crate::{
    error::{ClientError, Failure},
    types::{AccessToken, Scopes, TokenPair, TokenResponse},
    utils,
};

impl AuthExchangeClient {
    /// Builds the URL of the provider's consent screen.
    ///
    /// The result depends only on the arguments and the client's credentials,
    /// so the same input always yields the same URL. `state` should be an
    /// unguessable token (see [`utils::generate_state`]) that the callback
    /// handler checks before exchanging the code. With `show_dialog` set the
    /// provider asks the user to approve again even if they already did.
    pub fn build_authorization_url(
        &self,
        scopes: &Scopes,
        state: &str,
        show_dialog: bool,
    ) -> String {
        let scope = scopes.joined();
        let mut params = vec![
            ("response_type", "code"),
            ("client_id", self.credentials.client_id.as_str()),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("state", state),
        ];
        if show_dialog {
            params.push(("show_dialog", "true"));
        }

        utils::append_query(&self.endpoints.authorize_url, &params)
    }

    /// Exchanges a single-use authorization code for an access and refresh token.
    ///
    /// The code is sent exactly once. If the provider rejects it (already used,
    /// expired, redirect URI mismatch) the rejection is returned as
    /// [`ClientError::Exchange`] with the provider's payload attached.
    #[instrument(name = "exchange_code", skip_all)]
    pub async fn exchange_code_for_tokens(&self, code: &str) -> Result<TokenPair, ClientError> {
        let response = self
            .token_request(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ])
            .await
            .map_err(|failure| {
                warn!(error = %failure, "authorization code exchange failed");
                ClientError::Exchange(failure)
            })?;

        debug!(
            has_refresh_token = response.refresh_token.is_some(),
            "authorization code exchanged"
        );

        Ok(TokenPair {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            token_type: response.token_type,
            scope: response.scope,
            expires_in: response.expires_in,
        })
    }

    /// Obtains a new access token with a long-lived refresh token.
    ///
    /// Any refresh token in the response is dropped; callers keep using the
    /// one they already hold.
    #[instrument(name = "refresh_token", skip_all)]
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<AccessToken, ClientError> {
        let response = self
            .token_request(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .await
            .map_err(|failure| {
                warn!(error = %failure, "access token refresh failed");
                ClientError::Refresh(failure)
            })?;

        debug!("access token refreshed");

        Ok(AccessToken {
            access_token: response.access_token,
            expires_in: response.expires_in,
        })
    }

    async fn token_request(&self, form: &[(&str, &str)]) -> Result<GrantedToken, Failure> {
        let response = self
            .http
            .post(&self.endpoints.token_url)
            .header(AUTHORIZATION, utils::basic_auth_header(&self.credentials))
            .form(form)
            .send()
            .await
            .map_err(Failure::Network)?;

        let (status, body) = read_success_body(response, self.max_body_bytes).await?;
        debug!(status = status.as_u16(), "token endpoint responded");

        let parsed: TokenResponse = parse_body(&body)?;
        GrantedToken::try_from_response(parsed, body)
    }
}

/// A token endpoint response known to carry an access token.
struct GrantedToken {
    access_token: String,
    refresh_token: Option<String>,
    token_type: Option<String>,
    scope: Option<String>,
    expires_in: Option<u64>,
}

impl GrantedToken {
    fn try_from_response(response: TokenResponse, body: String) -> Result<Self, Failure> {
        let access_token = match response.access_token {
            Some(token) if !token.is_empty() => token,
            _ => {
                return Err(Failure::Malformed {
                    reason: "missing access_token".to_string(),
                    body,
                });
            }
        };

        Ok(Self {
            access_token,
            refresh_token: response.refresh_token,
            token_type: response.token_type,
            scope: response.scope,
            expires_in: response.expires_in,
        })
    }
}
