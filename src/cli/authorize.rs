use crate::{config::Settings, info, utils};

use super::client;

pub fn authorize_url(settings: &Settings, show_dialog: bool, state: Option<String>) {
    let state = state.unwrap_or_else(|| utils::generate_state(utils::STATE_LENGTH));
    let url = client(settings).build_authorization_url(&settings.scopes, &state, show_dialog);

    info!("State: {}", state);
    println!("{}", url);
}
