//! The channel metadata provider capability.
//!
//! The fetch layer never talks HTTP itself. It is handed something that implements
//! [`ChannelProvider`], which is [`YouTubeClient`](crate::youtube_api::YouTubeClient)
//! in production and an in-memory stub in tests.

use crate::youtube_api::{
    ChannelListResponse, CommentThreadListResponse, PlaylistItemListResponse, VideoListResponse,
};
use std::future::Future;

/// Largest page the list endpoints hand out, and the most IDs `videos.list` accepts.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// Read access to the four YouTube Data API list endpoints the statistics need.
///
/// Each method corresponds to exactly one API call. Implementations do not retry and
/// do not follow cursors; that is left to [`crate::fetch`].
pub trait ChannelProvider: Send + Sync {
    /// `channels.list` for one channel ID with `snippet,contentDetails,statistics`.
    fn list_channels(
        &self,
        channel_id: &str,
    ) -> impl Future<Output = crate::Result<ChannelListResponse>> + Send;

    /// One page of `playlistItems.list`.
    ///
    /// `page_token` is `None` for the first page and otherwise a `nextPageToken` from a
    /// previous response.
    fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<String>,
    ) -> impl Future<Output = crate::Result<PlaylistItemListResponse>> + Send;

    /// `videos.list` for at most [`MAX_RESULTS_PER_PAGE`] IDs with
    /// `snippet,contentDetails,statistics`.
    fn list_videos(
        &self,
        video_ids: &[String],
    ) -> impl Future<Output = crate::Result<VideoListResponse>> + Send;

    /// The first page of `commentThreads.list` for a video.
    fn list_comment_threads(
        &self,
        video_id: &str,
    ) -> impl Future<Output = crate::Result<CommentThreadListResponse>> + Send;
}
