use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use super::ApiError;
use crate::{server::AppState, utils};

#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Completes the login started by `/login`.
///
/// The `state` must be one this server issued and has not seen back yet.
/// On success the tokens are returned as JSON, or, when a frontend URI is
/// configured, the browser is redirected there with the refresh token.
pub async fn callback(
    State(app): State<AppState>,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let Some(state) = params.state.as_deref().filter(|s| !s.is_empty()) else {
        return Err(ApiError::bad_request("Missing state parameter."));
    };

    if !app.pending.consume(state).await {
        warn!("callback with unknown or expired state");
        return Err(ApiError::bad_request("Unknown or expired state."));
    }

    if let Some(error) = params.error {
        warn!(%error, "authorization was not granted");
        return Err(ApiError::bad_request(format!(
            "Authorization failed: {error}"
        )));
    }

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        return Err(ApiError::bad_request("Missing authorization code."));
    };

    let tokens = app.client.exchange_code_for_tokens(&code).await?;
    info!("login completed");

    if let (Some(frontend), Some(refresh_token)) = (&app.frontend_uri, &tokens.refresh_token) {
        let target = utils::append_query(frontend, &[("refresh_token", refresh_token.as_str())]);
        return Ok(Redirect::to(&target).into_response());
    }

    Ok(Json(tokens).into_response())
}
