//! Flat-file export of the video table.

use crate::error::Result;
use crate::model::{Definition, VideoRecord};
use jiff::Timestamp;
use serde::Serialize;
use std::io;
use std::path::PathBuf;

/// Where the CLI writes the table unless told otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "output/download.csv";

/// Column names, in column order.
pub const HEADER: [&str; 13] = [
    "video_id",
    "channelTitle",
    "title",
    "description",
    "tags",
    "publishedAt",
    "thumbnail_url",
    "viewCount",
    "likeCount",
    "favoriteCount",
    "commentCount",
    "duration",
    "definition",
];

/// Somewhere the finished video table can be written to.
pub trait VideoSink {
    /// Writes one row per record, in the given order.
    fn write_videos(&mut self, videos: &[VideoRecord]) -> Result<()>;
}

/// Writes the table as UTF-8 CSV with a header row to a file, replacing it if present.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VideoSink for CsvSink {
    fn write_videos(&mut self, videos: &[VideoRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::File::create(&self.path)?;
        write_csv(io::BufWriter::new(file), videos)?;

        tracing::info!(path = %self.path.display(), rows = videos.len(), "wrote video table");
        Ok(())
    }
}

/// A record as it appears in one CSV row.
#[derive(Serialize)]
struct CsvRow<'a> {
    video_id: &'a str,
    channel_title: &'a str,
    title: &'a str,
    description: &'a str,
    /// JSON array, or empty when the video has no tags.
    tags: String,
    published_at: Timestamp,
    thumbnail_url: &'a str,
    view_count: u64,
    like_count: u64,
    favorite_count: u64,
    comment_count: u64,
    duration: f64,
    definition: Definition,
}

impl<'a> CsvRow<'a> {
    fn new(video: &'a VideoRecord) -> Result<Self> {
        let tags = match &video.tags {
            Some(tags) => serde_json::to_string(tags)?,
            None => String::new(),
        };
        Ok(Self {
            video_id: &video.video_id,
            channel_title: &video.channel_title,
            title: &video.title,
            description: &video.description,
            tags,
            published_at: video.published_at,
            thumbnail_url: &video.thumbnail_url,
            view_count: video.view_count,
            like_count: video.like_count,
            favorite_count: video.favorite_count,
            comment_count: video.comment_count,
            duration: video.duration,
            definition: video.definition,
        })
    }
}

/// Writes the header row followed by one row per record.
///
/// The header is written even when there are no records.
pub fn write_csv<W: io::Write>(writer: W, videos: &[VideoRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for video in videos {
        writer.serialize(CsvRow::new(video)?)?;
    }
    writer.flush()?;
    Ok(())
}
