//! Spotify Authorization Bridge Library
//!
//! This library mediates the OAuth 2.0 "Authorization Code" flow against the
//! Spotify accounts service and forwards a small set of Web API calls (token
//! refresh, search-and-play) on behalf of a caller that holds the tokens.
//!
//! # Modules
//!
//! - `api` - HTTP handlers exposed by the local bridge server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loading from `.env` files and the environment
//! - `error` - Typed errors surfaced by the Spotify client
//! - `server` - Router construction and the listening loop
//! - `spotify` - The [`AuthExchangeClient`](spotify::AuthExchangeClient)
//! - `state` - Bookkeeping for issued OAuth `state` tokens
//! - `types` - Data structures and wire types
//! - `utils` - State token generation and header helpers
//!
//! # Example
//!
//! ```
//! use spotbridge::{config, spotify::AuthExchangeClient};
//!
//! #[tokio::main]
//! async fn main() -> spotbridge::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     let client = AuthExchangeClient::from_settings(&settings)?;
//!     // Use the client...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod state;
pub mod types;
pub mod utils;

/// A convenient Result type alias for the binary's glue code.
///
/// The Spotify client itself returns [`error::ClientError`]; this alias is
/// used by entry points that only need to report a failure, such as server
/// startup and configuration loading in `main`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Used for unrecoverable errors in the command-line front end only. Library
/// code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
