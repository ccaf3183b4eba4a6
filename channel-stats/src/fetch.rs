//! Retrieval of everything a statistics run needs from a [`ChannelProvider`].
//!
//! Calls are made one at a time and in order. Nothing here retries: the first
//! provider error aborts the operation and is handed back to the caller.

use crate::error::{Error, Result};
use crate::model::{ChannelInfo, VideoComments, VideoRecord};
use crate::provider::{ChannelProvider, MAX_RESULTS_PER_PAGE};
use crate::youtube_api::PagedStream;
use std::collections::{HashSet, VecDeque};
use tokio_stream::StreamExt;
use tracing::instrument;

/// Looks up a channel and summarises it.
///
/// Fails with [`Error::ChannelNotFound`] if the ID matches nothing.
#[instrument(skip(provider))]
pub async fn fetch_channel_info<P: ChannelProvider>(
    provider: &P,
    channel_id: &str,
) -> Result<ChannelInfo> {
    let response = provider.list_channels(channel_id).await?;
    let channel = response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| Error::ChannelNotFound(channel_id.to_string()))?;

    let info = ChannelInfo::try_from(channel)?;
    tracing::debug!(
        channel_name = info.channel_name,
        videos_count = info.videos_count,
        "fetched channel info"
    );
    Ok(info)
}

/// Collects the IDs of every video in a channel's uploads playlist, in playlist order.
///
/// Pages of [`MAX_RESULTS_PER_PAGE`] are requested until the API stops returning a
/// `nextPageToken`; the count is never used to decide when to stop.
///
/// `expected_count` (the channel's reported video count) only decides whether to look
/// past the first page at all. When it is at most one page worth, the first page is
/// taken as complete. A stale count can therefore miss videos; this is logged but
/// not corrected.
#[instrument(skip(provider))]
pub async fn fetch_all_video_ids<P: ChannelProvider>(
    provider: &P,
    uploads_playlist_id: &str,
    expected_count: u64,
) -> Result<Vec<String>> {
    if expected_count <= u64::from(MAX_RESULTS_PER_PAGE) {
        let page = provider
            .list_playlist_items(uploads_playlist_id, MAX_RESULTS_PER_PAGE, None)
            .await?;
        if page.next_page_token.is_some() {
            tracing::warn!(
                expected_count,
                fetched = page.items.len(),
                "channel reports a single page of videos but the playlist has more; only the first page is used"
            );
        }
        return Ok(page
            .items
            .into_iter()
            .map(|item| item.content_details.video_id)
            .collect());
    }

    let pages = PagedStream::new(move |page_token| async move {
        let response = provider
            .list_playlist_items(uploads_playlist_id, MAX_RESULTS_PER_PAGE, page_token)
            .await?;
        let ids: VecDeque<String> = response
            .items
            .into_iter()
            .map(|item| item.content_details.video_id)
            .collect();
        Ok((ids, response.next_page_token))
    });
    let mut pages = std::pin::pin!(pages);

    let mut video_ids = Vec::new();
    while let Some(video_id) = pages.next().await {
        video_ids.push(video_id?);
    }

    if video_ids.len() as u64 != expected_count {
        tracing::debug!(
            expected_count,
            fetched = video_ids.len(),
            "uploads playlist size differs from reported video count"
        );
    }

    Ok(video_ids)
}

/// Fetches full details for the given videos, [`MAX_RESULTS_PER_PAGE`] IDs per call.
///
/// Records come back batch by batch in request order, and within a batch in whatever
/// order the API returned them. IDs the API does not know are absent from the result.
/// A video the API returns twice is kept only once.
#[instrument(skip(provider, video_ids), fields(videos = video_ids.len()))]
pub async fn fetch_video_details<P: ChannelProvider>(
    provider: &P,
    video_ids: &[String],
) -> Result<Vec<VideoRecord>> {
    let mut records = Vec::with_capacity(video_ids.len());
    let mut seen = HashSet::with_capacity(video_ids.len());

    for (batch, chunk) in video_ids.chunks(MAX_RESULTS_PER_PAGE as usize).enumerate() {
        let response = provider.list_videos(chunk).await?;
        tracing::debug!(
            batch,
            requested = chunk.len(),
            returned = response.items.len(),
            "fetched video batch"
        );

        for video in response.items {
            if !seen.insert(video.id.clone()) {
                tracing::warn!(video_id = video.id, "dropping duplicate video");
                continue;
            }
            records.push(VideoRecord::try_from(video)?);
        }
    }

    Ok(records)
}

/// Fetches the first page of top-level comments for each video, one call per video.
#[instrument(skip(provider, video_ids), fields(videos = video_ids.len()))]
pub async fn fetch_comments<P: ChannelProvider>(
    provider: &P,
    video_ids: &[String],
) -> Result<Vec<VideoComments>> {
    let mut all_comments = Vec::with_capacity(video_ids.len());
    for video_id in video_ids {
        let response = provider.list_comment_threads(video_id).await?;
        all_comments.push(VideoComments::from_response(video_id.as_str(), response));
    }
    Ok(all_comments)
}
