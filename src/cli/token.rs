use serde::Serialize;

use crate::{config::Settings, error, success};

use super::client;

pub async fn exchange(settings: &Settings, code: &str) {
    match client(settings).exchange_code_for_tokens(code).await {
        Ok(tokens) => {
            success!("Authorization code exchanged.");
            print_json(&tokens);
        }
        Err(e) => error!("{}", e),
    }
}

pub async fn refresh(settings: &Settings, refresh_token: &str) {
    match client(settings).refresh_access_token(refresh_token).await {
        Ok(token) => {
            success!("Access token refreshed.");
            print_json(&token);
        }
        Err(e) => error!("{}", e),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize response: {}", e),
    }
}
