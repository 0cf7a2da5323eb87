//! Job title lookups.

use std::sync::Arc;

use futures_util::stream::{self, BoxStream};
use futures_util::StreamExt;
use reqwest::Method;

use crate::client::{ClientInner, Headers};
use crate::models::JobTitle;
use crate::Result;

/// Service for the job-title lookup.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: userhub_rs::UserHubClient) -> userhub_rs::Result<()> {
/// let titles = client.job_titles().list().await?;
///
/// let mut stream = client.job_titles().stream();
/// while let Some(title) = stream.next().await {
///     println!("{:?}", title?.field("name"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct JobTitlesService {
    inner: Arc<ClientInner>,
}

impl JobTitlesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch every job title at once.
    pub async fn list(&self) -> Result<Vec<JobTitle>> {
        fetch_all(&self.inner).await
    }

    /// Stream job titles one at a time.
    ///
    /// Nothing is requested until the stream is first polled. A failed
    /// request yields a single error and ends the stream. The stream is
    /// boxed, so it is `Unpin` and can be driven with `next()` directly.
    pub fn stream(&self) -> BoxStream<'static, Result<JobTitle>> {
        let inner = self.inner.clone();

        stream::once(async move { fetch_all(&inner).await }).flat_map(|result| match result {
            Ok(titles) => stream::iter(titles.into_iter().map(Ok)).left_stream(),
            Err(e) => stream::iter(std::iter::once(Err(e))).right_stream(),
        })
        .boxed()
    }
}

async fn fetch_all(inner: &ClientInner) -> Result<Vec<JobTitle>> {
    inner
        .json(inner.request(Method::GET, ["jobTitles"], Headers::Plain))
        .await
}
