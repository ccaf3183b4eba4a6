//! Descriptive statistics over a channel's video table.
//!
//! Everything here is a pure function of the records it is given. The input is only
//! read; where an ordering is needed a sorted view of references is built instead.

use crate::error::{Error, Result};
use crate::model::VideoRecord;
use indexmap::IndexMap;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// How many tags [`InsightsReport::top_hashtags`] holds at most.
pub const TOP_HASHTAGS: usize = 10;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Weekday names in the order they are bucketed, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Summary statistics for one channel.
///
/// Despite their names, the `avg_*_per_video` and `avg_video_duration` figures are
/// medians.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct InsightsReport {
    pub total_likes: u64,
    /// `None` when every upload happened within a single day.
    pub avg_uploads_per_month: Option<f64>,
    pub avg_uploads_per_week: Option<f64>,
    pub avg_uploads_per_day: Option<f64>,
    pub avg_views_per_video: f64,
    pub avg_likes_per_video: f64,
    pub avg_comments_per_video: f64,
    /// Seconds.
    pub avg_video_duration: f64,
    pub top_hashtags: Vec<String>,
    pub weekdays_dist: WeekdayDistribution,
    /// Publication dates (`YYYY-MM-DD`), oldest first.
    pub dates: Vec<String>,
    /// Publication times of day (`HH:MM`), index-aligned with `dates`.
    pub times: Vec<String>,
}

impl InsightsReport {
    /// Computes the report for a complete video table.
    ///
    /// The result does not depend on the order of `videos`. Fails with
    /// [`Error::NoVideos`] for an empty table.
    pub fn from_videos(videos: &[VideoRecord]) -> Result<Self> {
        if videos.is_empty() {
            return Err(Error::NoVideos);
        }

        let total_likes = videos.iter().map(|v| v.like_count).sum();

        // newest first, as the uploads playlist is usually (but not reliably) ordered
        let mut newest_first: Vec<&VideoRecord> = videos.iter().collect();
        newest_first.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        let cadence = UploadCadence::from_newest_first(&newest_first);

        let (mut dates, mut times): (Vec<_>, Vec<_>) = newest_first
            .iter()
            .map(|v| {
                let published = in_upstream_zone(v.published_at);
                (
                    published.strftime("%Y-%m-%d").to_string(),
                    published.strftime("%H:%M").to_string(),
                )
            })
            .unzip();
        dates.reverse();
        times.reverse();

        Ok(Self {
            total_likes,
            avg_uploads_per_month: cadence.per_month,
            avg_uploads_per_week: cadence.per_week,
            avg_uploads_per_day: cadence.per_day,
            avg_views_per_video: median(videos.iter().map(|v| v.view_count as f64))
                .ok_or(Error::NoVideos)?,
            avg_likes_per_video: median(videos.iter().map(|v| v.like_count as f64))
                .ok_or(Error::NoVideos)?,
            avg_comments_per_video: median(videos.iter().map(|v| v.comment_count as f64))
                .ok_or(Error::NoVideos)?,
            avg_video_duration: median(videos.iter().map(|v| v.duration))
                .ok_or(Error::NoVideos)?,
            top_hashtags: top_tags(newest_first.iter().copied(), TOP_HASHTAGS),
            weekdays_dist: WeekdayDistribution::from_videos(videos),
            dates,
            times,
        })
    }
}

/// The API reports every timestamp in UTC, so that is the zone dates are shown in.
fn in_upstream_zone(timestamp: Timestamp) -> Zoned {
    timestamp.to_zoned(TimeZone::UTC)
}

/// Uploads per month (30 days), week, and day over the channel's active span.
#[derive(Debug, Clone, Copy, PartialEq)]
struct UploadCadence {
    per_month: Option<f64>,
    per_week: Option<f64>,
    per_day: Option<f64>,
}

impl UploadCadence {
    /// The span is measured in whole days between the newest and the oldest upload.
    /// A span of zero days leaves all three rates undefined.
    fn from_newest_first(videos: &[&VideoRecord]) -> Self {
        let (Some(newest), Some(oldest)) = (videos.first(), videos.last()) else {
            return Self::undefined();
        };
        let span_days = newest
            .published_at
            .duration_since(oldest.published_at)
            .as_secs()
            / SECONDS_PER_DAY;
        if span_days <= 0 {
            tracing::debug!("all uploads fall within one day, upload cadence is undefined");
            return Self::undefined();
        }

        let total = videos.len() as f64;
        let days = span_days as f64;
        Self {
            per_month: Some(total / (days / 30.0)),
            per_week: Some(total / (days / 7.0)),
            per_day: Some(total / days),
        }
    }

    fn undefined() -> Self {
        Self {
            per_month: None,
            per_week: None,
            per_day: None,
        }
    }
}

/// Number of uploads per weekday. Every weekday is always present, even at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayDistribution([u64; 7]);

impl WeekdayDistribution {
    pub fn from_videos(videos: &[VideoRecord]) -> Self {
        let mut counts = [0; 7];
        for video in videos {
            let weekday = in_upstream_zone(video.published_at).weekday();
            counts[weekday.to_monday_zero_offset() as usize] += 1;
        }
        Self(counts)
    }

    /// Count for a weekday name such as `"Friday"`.
    pub fn get(&self, name: &str) -> Option<u64> {
        WEEKDAY_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| self.0[i])
    }

    /// `(name, count)` pairs, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        WEEKDAY_NAMES.iter().copied().zip(self.0.iter().copied())
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

impl Serialize for WeekdayDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(WEEKDAY_NAMES.len()))?;
        for (name, count) in self.iter() {
            map.serialize_entry(name, &count)?;
        }
        map.end()
    }
}

/// The median of `values`: the middle value, or the mean of the two middle values
/// when there is an even number of them. `None` if there are no values.
pub fn median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut values: Vec<f64> = values.into_iter().collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// The `limit` most used tags across all videos, most frequent first.
///
/// Tags with equal counts keep the order in which they were first seen.
pub fn top_tags<'a>(
    videos: impl IntoIterator<Item = &'a VideoRecord>,
    limit: usize,
) -> Vec<String> {
    let mut counts: IndexMap<&'a str, usize> = IndexMap::new();
    for tag in videos.into_iter().filter_map(|v| v.tags.as_ref()).flatten() {
        *counts.entry(tag.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // stable, so ties stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(limit)
        .map(|(tag, _)| tag.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Definition;
    use float_cmp::assert_approx_eq;
    use insta::assert_json_snapshot;
    use pretty_assertions::assert_eq;

    fn record(id: &str, published_at: &str, likes: u64, tags: Option<&[&str]>) -> VideoRecord {
        VideoRecord {
            video_id: id.to_string(),
            channel_title: "Channel".to_string(),
            title: format!("Video {id}"),
            description: String::new(),
            tags: tags.map(|t| t.iter().map(|s| s.to_string()).collect()),
            published_at: published_at.parse().unwrap(),
            thumbnail_url: String::new(),
            view_count: 100,
            like_count: likes,
            favorite_count: 0,
            comment_count: 2,
            duration: 60.0,
            definition: Definition::Hd,
        }
    }

    /// Newest first, the way the uploads playlist hands them out.
    fn sample() -> Vec<VideoRecord> {
        vec![
            record("d", "2024-01-31T12:00:00Z", 7, Some(&["rust", "async"])),
            record("c", "2024-01-11T09:05:00Z", 0, None),
            record("b", "2024-01-07T18:45:00Z", 3, Some(&[])),
            record("a", "2024-01-01T10:00:00Z", 5, Some(&["rust", "cli"])),
        ]
    }

    #[test]
    fn total_likes_is_sum() {
        let report = InsightsReport::from_videos(&sample()).unwrap();
        assert_eq!(report.total_likes, 15);
    }

    #[test]
    fn cadence_over_whole_days() {
        let report = InsightsReport::from_videos(&sample()).unwrap();
        // 2024-01-01T10:00 .. 2024-01-31T12:00 is 30 whole days
        assert_approx_eq!(f64, report.avg_uploads_per_month.unwrap(), 4.0);
        assert_approx_eq!(f64, report.avg_uploads_per_week.unwrap(), 4.0 / (30.0 / 7.0));
        assert_approx_eq!(f64, report.avg_uploads_per_day.unwrap(), 4.0 / 30.0);
    }

    #[test]
    fn same_day_cadence_is_undefined() {
        let videos = vec![
            record("b", "2024-03-05T20:00:00Z", 1, None),
            record("a", "2024-03-05T08:00:00Z", 1, None),
        ];
        let report = InsightsReport::from_videos(&videos).unwrap();
        assert_eq!(report.avg_uploads_per_month, None);
        assert_eq!(report.avg_uploads_per_week, None);
        assert_eq!(report.avg_uploads_per_day, None);

        let single = InsightsReport::from_videos(&videos[..1]).unwrap();
        assert_eq!(single.avg_uploads_per_day, None);
    }

    #[test]
    fn undefined_cadence_serializes_as_null() {
        let videos = vec![record("a", "2024-03-05T08:00:00Z", 1, None)];
        let json = serde_json::to_value(InsightsReport::from_videos(&videos).unwrap()).unwrap();
        assert!(json["avg_uploads_per_month"].is_null());
        assert!(json["avg_uploads_per_week"].is_null());
        assert!(json["avg_uploads_per_day"].is_null());
    }

    #[test]
    fn medians() {
        assert_eq!(median(Vec::new()), None);
        assert_approx_eq!(f64, median([7.0]).unwrap(), 7.0);
        assert_approx_eq!(f64, median([3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_approx_eq!(f64, median([4.0, 1.0, 3.0, 10.0]).unwrap(), 3.5);

        let report = InsightsReport::from_videos(&sample()).unwrap();
        // likes 7, 0, 3, 5
        assert_approx_eq!(f64, report.avg_likes_per_video, 4.0);
        assert_approx_eq!(f64, report.avg_views_per_video, 100.0);
        assert_approx_eq!(f64, report.avg_comments_per_video, 2.0);
        assert_approx_eq!(f64, report.avg_video_duration, 60.0);
    }

    #[test]
    fn top_tags_rank_by_count_then_first_seen() {
        let report = InsightsReport::from_videos(&sample()).unwrap();
        assert_eq!(report.top_hashtags, vec!["rust", "async", "cli"]);
    }

    #[test]
    fn top_tags_are_capped() {
        let tags: Vec<String> = (0..15).map(|i| format!("tag{i}")).collect();
        let tag_refs: Vec<&str> = tags.iter().map(String::as_str).collect();
        let videos = vec![
            record("a", "2024-01-01T00:00:00Z", 0, Some(&tag_refs)),
            record("b", "2024-01-02T00:00:00Z", 0, Some(&["tag14"])),
        ];

        let top = top_tags(&videos, TOP_HASHTAGS);
        assert_eq!(top.len(), TOP_HASHTAGS);
        assert_eq!(top[0], "tag14");
        assert_eq!(top[1..], tags[..9]);
        for tag in &top {
            assert!(tags.contains(tag));
        }
    }

    #[test]
    fn weekday_distribution_has_every_day() {
        let report = InsightsReport::from_videos(&sample()).unwrap();
        assert_eq!(report.weekdays_dist.total(), 4);
        assert_json_snapshot!(report.weekdays_dist, @r#"
        {
          "Monday": 1,
          "Tuesday": 0,
          "Wednesday": 1,
          "Thursday": 1,
          "Friday": 0,
          "Saturday": 0,
          "Sunday": 1
        }
        "#);
    }

    #[test]
    fn dates_and_times_run_oldest_to_newest() {
        let report = InsightsReport::from_videos(&sample()).unwrap();
        assert_eq!(
            report.dates,
            vec!["2024-01-01", "2024-01-07", "2024-01-11", "2024-01-31"]
        );
        assert_eq!(report.times, vec!["10:00", "18:45", "09:05", "12:00"]);
    }

    #[test]
    fn input_order_does_not_matter() {
        let videos = sample();
        let mut reversed = videos.clone();
        reversed.reverse();

        assert_eq!(
            InsightsReport::from_videos(&videos).unwrap(),
            InsightsReport::from_videos(&reversed).unwrap()
        );
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            InsightsReport::from_videos(&[]),
            Err(Error::NoVideos)
        ));
    }
}
