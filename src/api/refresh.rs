use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use super::ApiError;
use crate::{server::AppState, types::AccessToken};

#[derive(Debug, Default, Deserialize)]
pub struct RefreshParams {
    pub refresh_token: Option<String>,
}

pub async fn refresh_token(
    State(app): State<AppState>,
    params: Result<Query<RefreshParams>, QueryRejection>,
) -> Result<Json<AccessToken>, ApiError> {
    let Query(params) = params?;
    let Some(refresh_token) = params.refresh_token.filter(|t| !t.is_empty()) else {
        return Err(ApiError::bad_request("Missing refresh_token parameter."));
    };

    let token = app.client.refresh_access_token(&refresh_token).await?;
    Ok(Json(token))
}
