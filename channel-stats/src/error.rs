//! Error types shared by the fetch, aggregation, and export layers.

use std::num::ParseIntError;

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can abort a statistics run.
///
/// No variant is recoverable locally: the first error encountered is propagated
/// to the caller and no partial report is produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A call to the channel metadata provider failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The channel lookup returned no items.
    #[error("channel not found: {0}")]
    ChannelNotFound(String),

    /// A video's `contentDetails.duration` is not a usable ISO 8601 duration.
    #[error("video {video_id} has malformed duration {duration:?}")]
    MalformedDuration {
        video_id: String,
        duration: String,
        #[source]
        source: crate::model::DurationError,
    },

    /// A numeric statistic arrived as text that is not a non-negative integer.
    #[error("{resource} has malformed {field} {value:?}")]
    MalformedStatistic {
        resource: String,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Insights were requested for a table with no videos in it.
    #[error("cannot compute insights for a channel without videos")]
    NoVideos,

    #[error("write video table")]
    Export(#[from] csv::Error),

    #[error("encode video tags as JSON")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failure talking to the remote API: transport, HTTP status, or response body.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("send {method} request to YouTube API: {url}")]
    Http {
        method: http::Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status; covers bad keys, exhausted quota, and unknown resources.
    #[error("YouTube API {method} request failed with status {status}: {body}")]
    Status {
        method: http::Method,
        status: http::StatusCode,
        body: String,
    },

    #[error("parse YouTube {endpoint} API response as JSON")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
