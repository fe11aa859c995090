use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::{server::AppState, types::SearchResult};

#[derive(Debug, Default, Deserialize)]
pub struct PlayParams {
    pub query: Option<String>,
    /// A refresh token; a short-lived access token is minted from it per call.
    pub token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayResponse {
    pub ok: bool,
    pub title: String,
    pub track: SearchResult,
}

/// Refreshes the caller's access token, then searches for `query` and plays
/// the first hit.
pub async fn play(
    State(app): State<AppState>,
    params: Result<Query<PlayParams>, QueryRejection>,
) -> Result<Json<PlayResponse>, ApiError> {
    let Query(params) = params?;
    let query = params.query.filter(|q| !q.trim().is_empty());
    let token = params.token.filter(|t| !t.is_empty());
    let (Some(query), Some(token)) = (query, token) else {
        return Err(ApiError::bad_request("Missing query or token parameter."));
    };

    let access = app.client.refresh_access_token(&token).await?;
    let track = app
        .client
        .search_and_play(&access.access_token, query.trim())
        .await?;

    Ok(Json(PlayResponse {
        ok: true,
        title: track.display_title(),
        track,
    }))
}
