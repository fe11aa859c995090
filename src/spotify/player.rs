use tracing::{debug, info, instrument, warn};

use super::{AuthExchangeClient, parse_body, read_success_body};
use crate::{
    error::{ClientError, Failure},
    types::{SearchResponse, SearchResult, StartPlaybackRequest, Track},
    utils,
};

impl AuthExchangeClient {
    /// Searches for `query` and starts playback of the best match on the
    /// user's active device.
    ///
    /// Only the first hit is considered, in the provider's own relevance
    /// order. An empty result is [`ClientError::NotFound`] and no playback
    /// request is made. A failure to start playback (no active device,
    /// premium required) is [`ClientError::Playback`].
    #[instrument(skip(self, access_token))]
    pub async fn search_and_play(
        &self,
        access_token: &str,
        query: &str,
    ) -> Result<SearchResult, ClientError> {
        let track = self
            .search_track(access_token, query)
            .await?
            .ok_or_else(|| ClientError::NotFound {
                query: query.to_string(),
            })?;

        self.start_playback(access_token, &[track.playback_uri()], None)
            .await?;

        let result = SearchResult::from(&track);
        info!(track_id = %result.track_id, "playback started");
        Ok(result)
    }

    /// Returns the top track for `query`, or `None` when nothing matches.
    pub async fn search_track(
        &self,
        access_token: &str,
        query: &str,
    ) -> Result<Option<Track>, ClientError> {
        let url = format!("{}/search", utils::trim_base_url(&self.endpoints.api_url));

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| ClientError::Search(Failure::Network(e)))?;

        let (_, body) = read_success_body(response, self.max_body_bytes)
            .await
            .map_err(ClientError::Search)?;
        let parsed: SearchResponse = parse_body(&body).map_err(ClientError::Search)?;

        let track = parsed.tracks.items.into_iter().next();
        debug!(found = track.is_some(), "search completed");
        Ok(track)
    }

    /// Starts playback of `uris` on the active device, or on `device_id`
    /// when given.
    pub async fn start_playback(
        &self,
        access_token: &str,
        uris: &[String],
        device_id: Option<&str>,
    ) -> Result<(), ClientError> {
        let url = format!(
            "{}/me/player/play",
            utils::trim_base_url(&self.endpoints.api_url)
        );

        let mut request = self
            .http
            .put(&url)
            .bearer_auth(access_token)
            .json(&StartPlaybackRequest {
                uris: uris.to_vec(),
            });
        if let Some(device_id) = device_id {
            request = request.query(&[("device_id", device_id)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Playback(Failure::Network(e)))?;

        read_success_body(response, self.max_body_bytes).await.map_err(|failure| {
            warn!(error = %failure, "playback request rejected");
            ClientError::Playback(failure)
        })?;

        Ok(())
    }
}
