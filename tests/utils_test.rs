use base64::{Engine, engine::general_purpose::STANDARD};
use spotbridge::types::{ClientCredentials, Scopes, SearchResult, Track, TrackArtist};
use spotbridge::utils::*;
use std::collections::HashSet;

// Helper function to create test credentials
fn create_test_credentials() -> ClientCredentials {
    ClientCredentials::new("my-client", "s3cr3t", "http://127.0.0.1:3000/callback")
}

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, uri: Option<&str>, artists: &[&str]) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        uri: uri.map(str::to_string),
        artists: artists
            .iter()
            .map(|name| TrackArtist {
                name: name.to_string(),
            })
            .collect(),
    }
}

#[test]
fn test_generate_state() {
    let state = generate_state(STATE_LENGTH);

    // Should be exactly the requested length
    assert_eq!(state.len(), 16);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated states should be different
    let states: HashSet<String> = (0..50).map(|_| generate_state(STATE_LENGTH)).collect();
    assert_eq!(states.len(), 50);

    // Other lengths are honoured
    assert_eq!(generate_state(64).len(), 64);
    assert!(generate_state(0).is_empty());
}

#[test]
fn test_basic_auth_header() {
    let header = basic_auth_header(&create_test_credentials());

    assert!(header.starts_with("Basic "));

    let encoded = header.trim_start_matches("Basic ");
    let decoded = STANDARD.decode(encoded).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "my-client:s3cr3t");
}

#[test]
fn test_append_query_encodes_values() {
    let url = append_query(
        "https://example.com/authorize",
        &[("scope", "a b"), ("redirect_uri", "http://x/cb?y=1&z")],
    );

    // Spaces become %20, reserved characters are escaped
    assert_eq!(
        url,
        "https://example.com/authorize?scope=a%20b&redirect_uri=http%3A%2F%2Fx%2Fcb%3Fy%3D1%26z"
    );
}

#[test]
fn test_append_query_existing_query_and_empty_params() {
    // Base already has a query string
    let url = append_query("https://app.example/?tab=player", &[("refresh_token", "R")]);
    assert_eq!(url, "https://app.example/?tab=player&refresh_token=R");

    // No params leaves the base unchanged
    assert_eq!(append_query("https://a.b/c", &[]), "https://a.b/c");
}

#[test]
fn test_trim_base_url() {
    assert_eq!(trim_base_url("https://api.spotify.com/v1/"), "https://api.spotify.com/v1");
    assert_eq!(trim_base_url("https://api.spotify.com/v1"), "https://api.spotify.com/v1");
}

#[test]
fn test_scopes_parse_keeps_order_and_dedups() {
    let scopes = Scopes::parse("  streaming user-read-playback-state\tstreaming  ");

    assert_eq!(
        scopes.iter().collect::<Vec<_>>(),
        vec!["streaming", "user-read-playback-state"]
    );
    assert_eq!(scopes.joined(), "streaming user-read-playback-state");
    assert_eq!(scopes.to_string(), scopes.joined());

    // Empty input gives empty scopes
    assert!(Scopes::parse("   ").is_empty());
}

#[test]
fn test_scopes_from_iter() {
    let scopes: Scopes = ["b", "a", "b", ""].into_iter().collect();
    assert_eq!(scopes.joined(), "b a");
}

#[test]
fn test_credentials_debug_redacts_secret() {
    let debug = format!("{:?}", create_test_credentials());

    assert!(debug.contains("my-client"));
    assert!(!debug.contains("s3cr3t"));
}

#[test]
fn test_track_playback_uri() {
    // Prefers the uri reported by the API
    let track = create_test_track("abc", "Song", Some("spotify:track:abc"), &[]);
    assert_eq!(track.playback_uri(), "spotify:track:abc");

    // Falls back to one built from the id
    let track = create_test_track("xyz", "Song", None, &[]);
    assert_eq!(track.playback_uri(), "spotify:track:xyz");
}

#[test]
fn test_search_result_from_track() {
    let track = create_test_track("id1", "One More Time", None, &["Daft Punk", "Romanthony"]);
    let result = SearchResult::from(&track);

    assert_eq!(result.track_id, "id1");
    assert_eq!(result.title, "One More Time");
    assert_eq!(result.artists, vec!["Daft Punk", "Romanthony"]);
    assert_eq!(result.display_title(), "One More Time - Daft Punk, Romanthony");

    // Serialized with camelCase keys
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["trackId"], "id1");
}
