//! YouTube Data API v3 client library.
//!
//! Only the read-only list endpoints needed to describe a public channel are covered:
//!
//! - [`channels`]: channel title, statistics and the ID of its uploads playlist
//! - [`playlist_items`]: the (paginated) contents of that playlist
//! - [`videos`]: snippet, content details and statistics for up to 50 videos per call
//! - [`comment_threads`]: top-level comments on a video
//!
//! Every count the API returns (views, likes, subscribers, ...) is a decimal string;
//! the types here keep it that way and leave parsing to [`crate::model`].
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use youtube_channel_stats::provider::ChannelProvider;
//! use youtube_channel_stats::youtube_api::YouTubeClient;
//!
//! # async fn example() -> youtube_channel_stats::Result<()> {
//! let client = YouTubeClient::new("my-api-key");
//! let response = client.list_channels("UC_x5XG1OV2P6uZZ5FSM9Ttw").await?;
//! for channel in response.items {
//!     println!("{}: {} videos", channel.snippet.title, channel.statistics.video_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod comment_threads;
pub mod playlist_items;
pub mod types;
pub mod videos;

pub use client::YouTubeClient;
pub use types::{PageInfo, PagedStream, Thumbnails};

pub use channels::{Channel, ChannelListResponse, ChannelSnippet, ChannelStatistics};
pub use comment_threads::{CommentThread, CommentThreadListResponse};
pub use playlist_items::{PlaylistItem, PlaylistItemListResponse};
pub use videos::{Video, VideoListResponse, VideoSnippet, VideoStatistics};
