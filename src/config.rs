//! Configuration management for the Spotify authorization bridge.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. They are read once, at startup, into an immutable [`Settings`]
//! value that is passed explicitly to the client and the server:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use crate::{
    error::ConfigError,
    types::{
        ClientCredentials, ProviderEndpoints, SPOTIFY_API_URL, SPOTIFY_AUTHORIZE_URL,
        SPOTIFY_TOKEN_URL, Scopes,
    },
};

pub const ENV_CLIENT_ID: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
pub const ENV_REDIRECT_URI: &str = "SPOTIFY_API_REDIRECT_URI";
pub const ENV_SCOPE: &str = "SPOTIFY_API_AUTH_SCOPE";
pub const ENV_AUTH_URL: &str = "SPOTIFY_API_AUTH_URL";
pub const ENV_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";
pub const ENV_API_URL: &str = "SPOTIFY_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "SPOTIFY_API_TIMEOUT_SECS";
pub const ENV_SERVER_ADDRESS: &str = "SERVER_ADDRESS";
pub const ENV_FRONTEND_URI: &str = "FRONTEND_URI";

pub const DEFAULT_SCOPE: &str = "user-read-playback-state user-modify-playback-state streaming";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Loads `.env` files into the process environment.
///
/// The file in the local data directory (`<data_local_dir>/spotbridge/.env`)
/// is read first, then one in the working directory. Variables already set
/// in the environment are never overwritten, and a missing file is not an
/// error.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Location of the user-level `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotbridge/.env");
    path
}

/// Everything the bridge needs at runtime.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: ClientCredentials,
    pub endpoints: ProviderEndpoints,
    pub scopes: Scopes,
    pub timeout: Duration,
    pub server_addr: SocketAddr,
    pub frontend_uri: Option<String>,
}

impl Settings {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the settings through `lookup`, which returns the value of a
    /// variable if it is set. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let credentials = ClientCredentials::new(
            require(ENV_CLIENT_ID)?,
            require(ENV_CLIENT_SECRET)?,
            require(ENV_REDIRECT_URI)?,
        );

        let endpoints = ProviderEndpoints {
            authorize_url: get(ENV_AUTH_URL)
                .unwrap_or_else(|| SPOTIFY_AUTHORIZE_URL.to_string()),
            token_url: get(ENV_TOKEN_URL).unwrap_or_else(|| SPOTIFY_TOKEN_URL.to_string()),
            api_url: get(ENV_API_URL).unwrap_or_else(|| SPOTIFY_API_URL.to_string()),
        };

        let scopes = Scopes::parse(&get(ENV_SCOPE).unwrap_or_else(|| DEFAULT_SCOPE.to_string()));

        let timeout = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT,
        };

        let server_addr =
            get(ENV_SERVER_ADDRESS).unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let server_addr = SocketAddr::from_str(&server_addr).map_err(|e| ConfigError::Invalid {
            var: ENV_SERVER_ADDRESS,
            reason: e.to_string(),
        })?;

        Ok(Self {
            credentials,
            endpoints,
            scopes,
            timeout,
            server_addr,
            frontend_uri: get(ENV_FRONTEND_URI),
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
        var: ENV_TIMEOUT_SECS,
        reason: e.to_string(),
    })?;

    if secs == 0 {
        return Err(ConfigError::Invalid {
            var: ENV_TIMEOUT_SECS,
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(Duration::from_secs(secs))
}
