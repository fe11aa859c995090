use crate::{config::Settings, error, success, warning};

use super::client;

pub async fn play(settings: &Settings, access_token: &str, query: &str) {
    match client(settings).search_and_play(access_token, query).await {
        Ok(track) => success!("Now playing: {}", track.display_title()),
        Err(e) if e.is_not_found() => {
            warning!("No track found for \"{}\".", query);
            std::process::exit(2);
        }
        Err(e) if e.is_retryable() => error!("{} (the request may be retried)", e),
        Err(e) => error!("{}", e),
    }
}
