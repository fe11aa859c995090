use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};

use crate::types::ClientCredentials;

/// Length of the `state` token issued for each login.
pub const STATE_LENGTH: usize = 16;

/// Generates a random alphanumeric token of `len` characters, suitable as an
/// OAuth `state` value.
pub fn generate_state(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// `Basic base64(client_id:client_secret)` for the token endpoint.
pub fn basic_auth_header(credentials: &ClientCredentials) -> String {
    let raw = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", STANDARD.encode(raw))
}

/// Appends `key=value` pairs to `base`, percent-encoding every value.
///
/// Spaces are encoded as `%20`, never `+`.
pub fn append_query(base: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        return base.to_string();
    }

    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}

/// Trims a trailing slash so endpoint paths can be appended with `format!`.
pub fn trim_base_url(url: &str) -> &str {
    url.trim_end_matches('/')
}
