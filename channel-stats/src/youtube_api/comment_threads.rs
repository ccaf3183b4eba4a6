//! YouTube CommentThreads API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `commentThreads.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub items: VecDeque<CommentThread>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A top-level comment and, optionally, some of its replies.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThread {
    pub id: String,
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreadSnippet {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: Comment,
    #[serde(rename = "totalReplyCount", default)]
    pub total_reply_count: u64,
}

/// See: <https://developers.google.com/youtube/v3/docs/comments#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub snippet: CommentSnippet,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentSnippet {
    #[serde(rename = "authorDisplayName")]
    pub author_display_name: Option<String>,
    /// The comment text exactly as the author wrote it.
    #[serde(rename = "textOriginal")]
    pub text_original: String,
    #[serde(rename = "likeCount", default)]
    pub like_count: u64,
}
