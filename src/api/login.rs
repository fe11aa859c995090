use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Redirect,
};
use serde::Deserialize;
use tracing::info;

use super::ApiError;
use crate::server::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LoginParams {
    #[serde(default)]
    pub show_dialog: bool,
}

/// Sends the browser to the Spotify consent screen with a fresh `state`.
pub async fn login(
    State(app): State<AppState>,
    params: Result<Query<LoginParams>, QueryRejection>,
) -> Result<Redirect, ApiError> {
    let Query(params) = params?;
    let state = app.pending.issue().await;
    let url = app
        .client
        .build_authorization_url(&app.scopes, &state, params.show_dialog);

    info!(
        show_dialog = params.show_dialog,
        "redirecting to authorization endpoint"
    );
    Ok(Redirect::to(&url))
}
