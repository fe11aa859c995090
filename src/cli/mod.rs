//! # CLI Module
//!
//! Command implementations behind the `spotbridge` binary. Each command reads
//! the already loaded [`Settings`], builds an
//! [`AuthExchangeClient`](crate::spotify::AuthExchangeClient) and reports the
//! outcome with the console macros (`info!`, `success!`, `warning!`,
//! `error!`). Fatal failures exit with status 1; a search without results
//! exits with status 2.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the bridge server, optionally opening `/login` in the browser
//! - [`authorize_url`] - Prints an authorization URL and the `state` it embeds
//! - [`exchange`] - Exchanges an authorization code and prints the tokens
//! - [`refresh`] - Refreshes an access token and prints it
//! - [`play`] - Searches for a track and starts playback
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotbridge serve --open                     # log in through the local server
//! spotbridge authorize-url --show-dialog      # or build the URL yourself...
//! spotbridge exchange --code AQD...           # ...and trade the code by hand
//! spotbridge refresh --refresh-token AQB...
//! spotbridge play --access-token BQC... daft punk around the world
//! ```

mod authorize;
mod play;
mod serve;
mod token;

pub use authorize::authorize_url;
pub use play::play;
pub use serve::serve;
pub use token::exchange;
pub use token::refresh;

use crate::{config::Settings, error, spotify::AuthExchangeClient};

fn client(settings: &Settings) -> AuthExchangeClient {
    match AuthExchangeClient::from_settings(settings) {
        Ok(client) => client,
        Err(e) => error!("Cannot create Spotify client: {}", e),
    }
}
