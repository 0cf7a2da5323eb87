//! Paginated stream for lazy iteration over search results.
//!
//! This module provides a [`PaginatedStream`] that implements the `Stream` trait,
//! fetching one page at a time and yielding the items it contains.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;

use crate::Result;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// One fetched page.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total_items: u64,
}

/// Position of a page within a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Current page (0-indexed).
    pub page: u32,
    /// Items per page.
    pub size: u32,
    /// Total number of items across all pages.
    pub total_items: u64,
}

impl PaginationInfo {
    /// Check if there are more pages after the current one.
    pub fn has_more(&self) -> bool {
        (u64::from(self.page) + 1) * u64::from(self.size) < self.total_items
    }

    /// Get the next page, if available.
    pub fn next_page(&self) -> Option<u32> {
        if self.has_more() {
            Some(self.page + 1)
        } else {
            None
        }
    }
}

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;
type PageFetcher<T> = Box<dyn Fn(u32) -> BoxFuture<Result<Page<T>>> + Send + Sync>;

/// A stream that lazily fetches pages from a paginated endpoint.
///
/// Pages are requested in order starting at page 0. The stream ends after
/// an empty page, after the page that reaches `total_items`, or after the
/// first error, which is yielded once.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use userhub_rs::api::UserSearch;
///
/// # async fn example(client: userhub_rs::UserHubClient) -> userhub_rs::Result<()> {
/// let mut stream = client
///     .users()
///     .search_stream(UserSearch::new().status("ACTIVE").size(50));
///
/// while let Some(user) = stream.next().await {
///     println!("{:?}", user?.email);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    fetch_page: PageFetcher<T>,
    page_size: u32,
    current_items: VecDeque<T>,
    next_page: Option<u32>,
    pending_fetch: Option<(u32, BoxFuture<Result<Page<T>>>)>,
}

impl<T> PaginatedStream<T> {
    /// Create a new paginated stream from a page fetcher.
    ///
    /// `fetch_page` receives the 0-based page to load.
    pub fn new<F, Fut>(page_size: u32, fetch_page: F) -> Self
    where
        F: Fn(u32) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Page<T>>> + Send + 'static,
    {
        Self {
            fetch_page: Box::new(move |page| Box::pin(fetch_page(page))),
            page_size: page_size.max(1),
            current_items: VecDeque::new(),
            next_page: Some(0),
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some((page, ref mut fut)) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(response)) => {
                        this.pending_fetch = None;

                        let info = PaginationInfo {
                            page,
                            size: this.page_size,
                            total_items: response.total_items,
                        };
                        this.next_page = if response.items.is_empty() {
                            None
                        } else {
                            info.next_page()
                        };
                        this.current_items = response.items.into();

                        if this.current_items.is_empty() {
                            return Poll::Ready(None);
                        }
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(page) = this.next_page.take() {
                this.pending_fetch = Some((page, (this.fetch_page)(page)));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

impl<T> std::fmt::Debug for PaginatedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedStream")
            .field("page_size", &self.page_size)
            .field("buffered", &self.current_items.len())
            .field("next_page", &self.next_page)
            .finish()
    }
}
