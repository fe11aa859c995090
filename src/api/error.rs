use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::ClientError;

/// An error answered to the HTTP caller as `{"ok": false, "error": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub code: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            code: None,
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        let status = if err.is_network() {
            StatusCode::GATEWAY_TIMEOUT
        } else {
            match &err {
                ClientError::NotFound { .. } => StatusCode::NOT_FOUND,
                ClientError::Playback(_) => StatusCode::CONFLICT,
                ClientError::Exchange(_) | ClientError::Refresh(_) | ClientError::Search(_) => {
                    StatusCode::BAD_GATEWAY
                }
                ClientError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        };

        Self {
            status,
            code: err.error_code().map(str::to_string),
            message: err.to_string(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
            code: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.code {
            Some(code) => json!({ "ok": false, "error": self.message, "code": code }),
            None => json!({ "ok": false, "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}
