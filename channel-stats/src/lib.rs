//! Descriptive statistics for a public YouTube channel.
//!
//! A run looks up the channel, walks its uploads playlist to find every video,
//! fetches the videos' details 50 at a time, writes the resulting table to a
//! [`VideoSink`], and summarises it as an [`InsightsReport`].
//!
//! The remote API is reached only through the [`ChannelProvider`] trait, so every
//! step can be exercised without a network.

use crate::export::VideoSink;
use crate::fetch::{fetch_all_video_ids, fetch_channel_info, fetch_comments, fetch_video_details};
use crate::insights::InsightsReport;
use crate::model::{ChannelInfo, VideoComments, VideoRecord};
use crate::provider::ChannelProvider;
use tracing::instrument;

pub mod error;
pub mod export;
pub mod fetch;
pub mod insights;
pub mod model;
pub mod provider;
pub mod youtube_api;

pub use error::{Error, ProviderError, Result};

/// Fetches a channel and all of its videos, exports the video table, and computes insights.
///
/// Either everything succeeds, or the first error is returned and no report is
/// produced. The table is only exported once the insights have been computed.
#[instrument(skip(provider, sink))]
pub async fn channel_stats<P, S>(
    provider: &P,
    sink: &mut S,
    channel_id: &str,
) -> Result<(ChannelInfo, InsightsReport)>
where
    P: ChannelProvider,
    S: VideoSink,
{
    let channel_info = fetch_channel_info(provider, channel_id).await?;

    let video_ids = fetch_all_video_ids(
        provider,
        &channel_info.playlist_uploads_id,
        channel_info.videos_count,
    )
    .await?;
    tracing::info!(videos = video_ids.len(), "collected video IDs");

    let videos = fetch_video_details(provider, &video_ids).await?;
    let insights = InsightsReport::from_videos(&videos)?;

    sink.write_videos(&videos)?;

    Ok((channel_info, insights))
}

/// Fetches the first page of top-level comments for every exported video.
///
/// Takes the table [`channel_stats`] handed to its sink, so the uploads playlist
/// is not walked a second time.
#[instrument(skip_all, fields(videos = videos.len()))]
pub async fn channel_comments<P: ChannelProvider>(
    provider: &P,
    videos: &[VideoRecord],
) -> Result<Vec<VideoComments>> {
    let video_ids: Vec<String> = videos.iter().map(|v| v.video_id.clone()).collect();
    fetch_comments(provider, &video_ids).await
}
