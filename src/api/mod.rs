//! # API Module
//!
//! HTTP endpoints of the bridge server. Each handler is a thin adapter that
//! pulls parameters out of the request, calls the
//! [`AuthExchangeClient`](crate::spotify::AuthExchangeClient) and shapes the
//! answer.
//!
//! ## Endpoints
//!
//! - [`login`] - `GET /login`: redirects to the Spotify consent screen with a
//!   freshly issued `state` (`?show_dialog=true` forces the approval dialog)
//! - [`callback`] - `GET /callback`: checks `state`, exchanges the code and
//!   returns the tokens (or redirects to the configured frontend)
//! - [`refresh_token`] - `GET /refresh_token?refresh_token=...`: new access token
//! - [`play`] - `GET /play?query=...&token=...`: refresh, search, play
//! - [`health`] - `GET /health`: liveness and version
//!
//! ## Errors
//!
//! Failures are answered as `{"ok": false, "error": "...", "code": "..."}`
//! through [`ApiError`]:
//!
//! | failure | status |
//! |---|---|
//! | missing or invalid parameters, unknown `state` | 400 |
//! | no track matched the query | 404 |
//! | track found but playback refused | 409 |
//! | provider rejected the request | 502 |
//! | provider unreachable or timed out | 504 |
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use spotbridge::server::{AppState, router};
//!
//! let app = router(AppState::new(client, settings.scopes.clone(), None));
//! ```

mod callback;
mod error;
mod health;
mod login;
mod play;
mod refresh;

pub use callback::{CallbackParams, callback};
pub use error::ApiError;
pub use health::{HealthResponse, health};
pub use login::{LoginParams, login};
pub use play::{PlayParams, PlayResponse, play};
pub use refresh::{RefreshParams, refresh_token};
