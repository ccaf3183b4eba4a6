//! The uniform records the rest of the crate works with.
//!
//! API responses are loosely shaped: counts are strings, some fields are left out
//! when the uploader hides them, durations are ISO 8601 text. The `TryFrom`
//! conversions here are the single place where that is normalised, so that nothing
//! downstream has to check for presence again.

use crate::error::Error;
use crate::youtube_api::{Channel, CommentThreadListResponse, Video};
use jiff::fmt::temporal::SpanParser;
use jiff::{SpanRelativeTo, Timestamp, Unit};
use serde::Serialize;

pub use crate::youtube_api::videos::Definition;

/// Stand-in for a channel that has not set a country.
pub const UNKNOWN_COUNTRY: &str = "-";

/// Summary of a channel, taken from a single `channels.list` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelInfo {
    pub channel_name: String,
    pub subscribers: u64,
    pub total_views: u64,
    pub videos_count: u64,
    /// The playlist holding every upload, newest first.
    pub playlist_uploads_id: String,
    pub profile_pic_url: String,
    pub country: String,
}

impl TryFrom<Channel> for ChannelInfo {
    type Error = Error;

    fn try_from(channel: Channel) -> Result<Self, Self::Error> {
        let stats = &channel.statistics;
        let subscribers = match &stats.subscriber_count {
            Some(count) => parse_count(&channel.id, "subscriberCount", count)?,
            None => 0,
        };
        let total_views = parse_count(&channel.id, "viewCount", &stats.view_count)?;
        let videos_count = parse_count(&channel.id, "videoCount", &stats.video_count)?;

        Ok(Self {
            profile_pic_url: channel.snippet.thumbnails.default_url().to_string(),
            channel_name: channel.snippet.title,
            subscribers,
            total_views,
            videos_count,
            playlist_uploads_id: channel.content_details.related_playlists.uploads,
            country: channel
                .snippet
                .country
                .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
        })
    }
}

/// One row of the video table.
///
/// Field names on the wire (CSV header, JSON keys) follow the API's own spelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRecord {
    pub video_id: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    pub title: String,
    pub description: String,
    /// `None` when the uploader set no tags.
    pub tags: Option<Vec<String>>,
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    pub thumbnail_url: String,
    #[serde(rename = "viewCount")]
    pub view_count: u64,
    #[serde(rename = "likeCount")]
    pub like_count: u64,
    #[serde(rename = "favoriteCount")]
    pub favorite_count: u64,
    #[serde(rename = "commentCount")]
    pub comment_count: u64,
    /// Length in seconds.
    pub duration: f64,
    pub definition: Definition,
}

impl TryFrom<Video> for VideoRecord {
    type Error = Error;

    fn try_from(video: Video) -> Result<Self, Self::Error> {
        let Video {
            id,
            snippet,
            content_details,
            statistics,
        } = video;

        // hidden likes and disabled comments are simply left out by the API
        let count = |field, value: &Option<String>| match value {
            Some(value) => parse_count(&id, field, value),
            None => Ok(0),
        };
        let view_count = count("viewCount", &statistics.view_count)?;
        let like_count = count("likeCount", &statistics.like_count)?;
        let favorite_count = count("favoriteCount", &statistics.favorite_count)?;
        let comment_count = count("commentCount", &statistics.comment_count)?;

        let duration = parse_duration(&content_details.duration).map_err(|source| {
            Error::MalformedDuration {
                video_id: id.clone(),
                duration: content_details.duration.clone(),
                source,
            }
        })?;

        Ok(Self {
            thumbnail_url: snippet.thumbnails.default_url().to_string(),
            video_id: id,
            channel_title: snippet.channel_title,
            title: snippet.title,
            description: snippet.description,
            tags: snippet.tags,
            published_at: snippet.published_at,
            view_count,
            like_count,
            favorite_count,
            comment_count,
            duration,
            definition: content_details.definition,
        })
    }
}

/// Top-level comments on one video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoComments {
    pub video_id: String,
    pub comments: Vec<String>,
}

impl VideoComments {
    pub fn from_response(video_id: impl Into<String>, response: CommentThreadListResponse) -> Self {
        Self {
            video_id: video_id.into(),
            comments: response
                .items
                .into_iter()
                .map(|thread| thread.snippet.top_level_comment.snippet.text_original)
                .collect(),
        }
    }
}

fn parse_count(resource: &str, field: &'static str, value: &str) -> Result<u64, Error> {
    value
        .parse()
        .map_err(|source| Error::MalformedStatistic {
            resource: resource.to_string(),
            field,
            value: value.to_string(),
            source,
        })
}

/// Why a duration string could not be turned into seconds.
#[derive(Debug, thiserror::Error)]
pub enum DurationError {
    #[error(transparent)]
    Parse(#[from] jiff::Error),
    #[error("duration is negative")]
    Negative,
}

/// Converts an ISO 8601 duration such as `PT1H2M10S` or `P1DT3M` to seconds.
///
/// Only the ISO 8601 format is accepted; jiff's friendly format (`2h 30m`) is not.
/// Days and weeks count as 24 hours and 7 days. Calendar units (years, months)
/// have no fixed length and are rejected, as are negative durations.
pub fn parse_duration(iso: &str) -> Result<f64, DurationError> {
    static PARSER: SpanParser = SpanParser::new();

    let span = PARSER.parse_span(iso)?;
    if span.is_negative() {
        return Err(DurationError::Negative);
    }
    Ok(span.total((Unit::Second, SpanRelativeTo::days_are_24_hours()))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn video(statistics: serde_json::Value) -> Video {
        serde_json::from_value(json!({
            "kind": "youtube#video",
            "id": "abc123",
            "snippet": {
                "publishedAt": "2023-04-05T17:30:00Z",
                "channelTitle": "Some Channel",
                "title": "A video",
                "description": "about things",
                "thumbnails": { "default": { "url": "https://i.ytimg.com/vi/abc123/default.jpg" } },
                "tags": ["rust", "cli"]
            },
            "contentDetails": { "duration": "PT1H2M10S", "definition": "hd" },
            "statistics": statistics
        }))
        .unwrap()
    }

    #[test]
    fn video_record_from_complete_response() {
        let record = VideoRecord::try_from(video(json!({
            "viewCount": "1200",
            "likeCount": "34",
            "favoriteCount": "0",
            "commentCount": "5"
        })))
        .unwrap();

        assert_eq!(record.video_id, "abc123");
        assert_eq!(record.channel_title, "Some Channel");
        assert_eq!(
            record.tags,
            Some(vec!["rust".to_string(), "cli".to_string()])
        );
        assert_eq!(
            record.thumbnail_url,
            "https://i.ytimg.com/vi/abc123/default.jpg"
        );
        assert_eq!(record.view_count, 1200);
        assert_eq!(record.like_count, 34);
        assert_eq!(record.comment_count, 5);
        assert_approx_eq!(f64, record.duration, 3730.0);
        assert_eq!(record.definition, Definition::Hd);
        assert_eq!(
            record.published_at,
            "2023-04-05T17:30:00Z".parse::<Timestamp>().unwrap()
        );
    }

    #[test]
    fn hidden_likes_and_disabled_comments_default_to_zero() {
        let record = VideoRecord::try_from(video(json!({
            "viewCount": "10",
            "favoriteCount": "0"
        })))
        .unwrap();
        assert_eq!(record.like_count, 0);
        assert_eq!(record.comment_count, 0);
        assert_eq!(record.view_count, 10);
    }

    #[test]
    fn garbage_statistic_is_an_error() {
        let err = VideoRecord::try_from(video(json!({ "viewCount": "lots" }))).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedStatistic { field: "viewCount", .. }
        ));
    }

    #[test]
    fn malformed_duration_is_reported_not_zeroed() {
        let mut v = video(json!({ "viewCount": "1" }));
        v.content_details.duration = "one hour".to_string();
        match VideoRecord::try_from(v).unwrap_err() {
            Error::MalformedDuration {
                video_id, duration, ..
            } => {
                assert_eq!(video_id, "abc123");
                assert_eq!(duration, "one hour");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn durations() {
        assert_approx_eq!(f64, parse_duration("PT15M33S").unwrap(), 933.0);
        assert_approx_eq!(f64, parse_duration("PT45S").unwrap(), 45.0);
        assert_approx_eq!(f64, parse_duration("P1DT2H").unwrap(), 93600.0);
        assert_approx_eq!(f64, parse_duration("P0D").unwrap(), 0.0);
        assert!(parse_duration("").is_err());
        assert!(parse_duration("15:33").is_err());
        assert!(parse_duration("P1M").is_err());
        assert!(parse_duration("2h").is_err());
        assert!(parse_duration("1h 30m").is_err());
        assert!(matches!(
            parse_duration("-PT5S"),
            Err(DurationError::Negative)
        ));
    }

    #[test]
    fn channel_info_normalises_missing_country() {
        let channel: Channel = serde_json::from_value(json!({
            "id": "UC1",
            "snippet": {
                "title": "Channel One",
                "thumbnails": { "default": { "url": "https://yt3.ggpht.com/pic" } }
            },
            "contentDetails": { "relatedPlaylists": { "uploads": "UU1" } },
            "statistics": {
                "viewCount": "1000",
                "subscriberCount": "42",
                "hiddenSubscriberCount": false,
                "videoCount": "7"
            }
        }))
        .unwrap();

        assert_eq!(
            ChannelInfo::try_from(channel).unwrap(),
            ChannelInfo {
                channel_name: "Channel One".to_string(),
                subscribers: 42,
                total_views: 1000,
                videos_count: 7,
                playlist_uploads_id: "UU1".to_string(),
                profile_pic_url: "https://yt3.ggpht.com/pic".to_string(),
                country: UNKNOWN_COUNTRY.to_string(),
            }
        );
    }
}
