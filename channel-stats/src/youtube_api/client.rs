//! The HTTP implementation of [`ChannelProvider`] on top of the YouTube Data API v3.

use crate::error::ProviderError;
use crate::provider::{ChannelProvider, MAX_RESULTS_PER_PAGE};
use crate::youtube_api::{
    channels::ChannelListResponse, comment_threads::CommentThreadListResponse,
    playlist_items::PlaylistItemListResponse, videos::VideoListResponse,
};
use http::Method;
use serde::de::DeserializeOwned;
use tracing::instrument;

/// Where the YouTube Data API v3 lives.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Number of comment threads requested per video. The endpoint allows up to 100.
const COMMENT_THREADS_PER_PAGE: u32 = 100;

/// YouTube Data API client for reading public channel and video metadata.
///
/// Requests are authenticated with an API key, which is enough for everything public.
/// The key is appended to each request and never logged.
#[derive(Clone)]
pub struct YouTubeClient {
    api_key: String,
    base_url: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl YouTubeClient {
    /// Creates a client that talks to the public API endpoint with a fresh HTTP client.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_http_client(api_key, reqwest::Client::new())
    }

    /// Creates a client that shares an existing HTTP client (and its connection pool).
    pub fn with_http_client(api_key: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Points the client at a different API root, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Makes a keyed request to one API endpoint and decodes the JSON body.
    ///
    /// Transport failures, non-success statuses (bad key, exhausted quota, ...) and
    /// undecodable bodies all surface as [`ProviderError`].
    #[instrument(skip(self), level = tracing::Level::TRACE)]
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query_params: &[(&str, &str)],
    ) -> crate::Result<T> {
        let method = Method::GET;
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .request(method.clone(), &url)
            .query(query_params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                method: method.clone(),
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::Status {
                method,
                status,
                body,
            }
            .into());
        }

        let parsed = response
            .json()
            .await
            .map_err(|source| ProviderError::Decode { endpoint, source })?;
        Ok(parsed)
    }
}

impl ChannelProvider for YouTubeClient {
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    async fn list_channels(&self, channel_id: &str) -> crate::Result<ChannelListResponse> {
        let query_params = [
            ("part", "snippet,contentDetails,statistics"),
            ("id", channel_id),
        ];
        let channels: ChannelListResponse = self.get("channels", &query_params).await?;

        tracing::debug!(
            channel_id,
            returned_items = channels.items.len(),
            "fetched channel"
        );

        Ok(channels)
    }

    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<String>,
    ) -> crate::Result<PlaylistItemListResponse> {
        let max_results_string = max_results.min(MAX_RESULTS_PER_PAGE).to_string();
        let mut query_params = vec![
            ("part", "contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", max_results_string.as_str()),
        ];

        if let Some(ref token) = page_token {
            query_params.push(("pageToken", token.as_str()));
        }

        let items: PlaylistItemListResponse = self.get("playlistItems", &query_params).await?;

        tracing::debug!(
            total_results = items.page_info.total_results,
            returned_items = items.items.len(),
            has_next_page = items.next_page_token.is_some(),
            "fetched playlist items"
        );

        Ok(items)
    }

    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self, video_ids), fields(requested = video_ids.len()))]
    async fn list_videos(&self, video_ids: &[String]) -> crate::Result<VideoListResponse> {
        let ids = video_ids.join(",");
        let query_params = [
            ("part", "snippet,contentDetails,statistics"),
            ("id", ids.as_str()),
        ];

        let videos: VideoListResponse = self.get("videos", &query_params).await?;

        tracing::debug!(returned_items = videos.items.len(), "fetched video details");

        Ok(videos)
    }

    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/commentThreads/list>
    #[instrument(skip(self))]
    async fn list_comment_threads(
        &self,
        video_id: &str,
    ) -> crate::Result<CommentThreadListResponse> {
        let max_results_string = COMMENT_THREADS_PER_PAGE.to_string();
        let query_params = [
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", max_results_string.as_str()),
            ("textFormat", "plainText"),
        ];

        let threads: CommentThreadListResponse = self.get("commentThreads", &query_params).await?;

        tracing::debug!(
            video_id,
            returned_items = threads.items.len(),
            "fetched comment threads"
        );

        Ok(threads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let client = YouTubeClient::new("secret").with_base_url("http://127.0.0.1:8080/v3/");
        assert_eq!(client.base_url, "http://127.0.0.1:8080/v3");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = YouTubeClient::new("super-secret-key");
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains(DEFAULT_BASE_URL));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_provider_error() {
        // nothing listens on the discard port
        let client = YouTubeClient::new("key").with_base_url("http://127.0.0.1:9");
        let err = client.list_channels("UC123").await.unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Provider(ProviderError::Http { .. })
        ));
    }
}
