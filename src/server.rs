use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    Res, api,
    config::Settings,
    spotify::AuthExchangeClient,
    state::PendingStates,
    types::Scopes,
};

/// Shared by every handler. Only `pending` changes over time.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: Arc<AuthExchangeClient>,
    pub pending: PendingStates,
    pub scopes: Scopes,
    pub frontend_uri: Option<String>,
}

impl AppState {
    pub fn new(client: AuthExchangeClient, scopes: Scopes, frontend_uri: Option<String>) -> Self {
        Self {
            client: Arc::new(client),
            pending: PendingStates::default(),
            scopes,
            frontend_uri,
        }
    }

    pub fn from_settings(settings: &Settings) -> Res<Self> {
        let client = AuthExchangeClient::from_settings(settings)?;
        Ok(Self::new(
            client,
            settings.scopes.clone(),
            settings.frontend_uri.clone(),
        ))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::health))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/refresh_token", get(api::refresh_token))
        .route("/play", get(api::play))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn start_api_server(settings: &Settings) -> Res<()> {
    let state = AppState::from_settings(settings)?;
    let listener = TcpListener::bind(settings.server_addr).await?;
    info!(addr = %listener.local_addr()?, "bridge server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("bridge server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no signal handler available; run until the process is killed
        std::future::pending::<()>().await;
    }
}
