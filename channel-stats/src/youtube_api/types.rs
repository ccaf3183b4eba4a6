//! Shared types and streaming infrastructure for the YouTube API client.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};
use tokio_stream::Stream;

type OneFuturePage<'a, F, T> =
    Pin<Box<dyn Future<Output = crate::Result<(F, (VecDeque<T>, Option<String>))>> + 'a + Send>>;

/// A stream that walks a cursor-paginated list endpoint to exhaustion.
///
/// Items are yielded one by one. When the current page runs dry, the next page is
/// requested with the `nextPageToken` of the previous response, and the stream ends
/// once a response arrives without one. A token is never invented: the fetcher sees
/// `None` exactly once (for the first page) and afterwards only tokens the API returned.
pub struct PagedStream<'a, T, F> {
    current_items: VecDeque<T>,
    pending_request: Option<OneFuturePage<'a, F, T>>,
    is_done: bool,
}

impl<'a, T, F> PagedStream<'a, T, F> {
    /// Create a stream whose first page is fetched by calling `fetcher(None)`.
    pub fn new<Fut>(fetcher: F) -> Self
    where
        F: Fn(Option<String>) -> Fut,
        F: Send + 'a,
        Fut: Future<Output = crate::Result<(VecDeque<T>, Option<String>)>> + Send + 'a,
    {
        let first_page = async move {
            let results = fetcher(None).await?;
            Ok((fetcher, results))
        };
        Self {
            pending_request: Some(Box::pin(first_page)),
            current_items: VecDeque::new(),
            is_done: false,
        }
    }
}

impl<'a, T: Unpin, F> Unpin for PagedStream<'a, T, F> {}

impl<'a, T: Unpin, F, Fut> Stream for PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut,
    F: Send + 'a,
    Fut: Future<Output = crate::Result<(VecDeque<T>, Option<String>)>> + Send + 'a,
{
    type Item = crate::Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(item) = self.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if self.is_done {
                return Poll::Ready(None);
            }

            let Some(pending) = self.pending_request.as_mut() else {
                self.is_done = true;
                return Poll::Ready(None);
            };

            match pending.as_mut().poll(cx) {
                Poll::Ready(Ok((fetcher, (items, next_token)))) => {
                    self.current_items.extend(items);

                    match next_token {
                        Some(next_token) => {
                            // queued, but only polled once this page is drained
                            self.pending_request = Some(Box::pin(async move {
                                let results = fetcher(Some(next_token)).await?;
                                Ok((fetcher, results))
                            }));
                        }
                        None => {
                            self.is_done = true;
                            self.pending_request = None;
                        }
                    }
                }
                Poll::Ready(Err(e)) => {
                    self.pending_request = None;
                    self.is_done = true;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Paging details for lists of resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}

/// The set of thumbnail images attached to a channel or video.
///
/// Only the `default` resolution is used here; the API also returns `medium`,
/// `high`, `standard` and `maxres` variants.
///
/// See: <https://developers.google.com/youtube/v3/docs/thumbnails>
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Thumbnails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
}

impl Thumbnails {
    /// URL of the default-resolution thumbnail, or `""` if the API sent none.
    pub fn default_url(&self) -> &str {
        self.default.as_ref().map_or("", |t| t.url.as_str())
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use tokio_stream::StreamExt;

    #[tokio::test]
    async fn follows_cursors_until_exhausted() {
        let seen = Mutex::new(Vec::new());
        let stream = PagedStream::new(|token: Option<String>| {
            seen.lock().unwrap().push(token.clone());
            async move {
                Ok(match token.as_deref() {
                    None => (VecDeque::from([1, 2]), Some("b".to_string())),
                    Some("b") => (VecDeque::from([3]), Some("c".to_string())),
                    Some("c") => (VecDeque::from([4, 5]), None),
                    Some(other) => panic!("unexpected token {other}"),
                })
            }
        });

        let items: Vec<u32> = stream.map(|r| r.unwrap()).collect().await;
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some("b".to_string()), Some("c".to_string())]
        );
    }

    #[tokio::test]
    async fn stops_after_error() {
        let stream = PagedStream::new(|token: Option<String>| async move {
            match token {
                None => Ok((VecDeque::from([1]), Some("next".to_string()))),
                Some(_) => Err(crate::Error::NoVideos),
            }
        });
        let results: Vec<crate::Result<u32>> = stream.collect().await;
        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Ok(1)));
        assert!(matches!(results[1], Err(crate::Error::NoVideos)));
    }

    #[test]
    fn missing_default_thumbnail_is_empty() {
        assert_eq!(Thumbnails::default().default_url(), "");
    }
}
