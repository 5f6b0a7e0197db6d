use std::sync::Arc;

use diverman_core::{extract, ExtractionResult};
use diverman_logging::{diag_debug, diag_info, diag_warn};
use futures_util::stream::{self, StreamExt};

use crate::fetch::Fetcher;
use crate::{AggregateReport, FailureKind, FetchError, UrlFailure};

pub const DEFAULT_CONCURRENCY: usize = 5;

/// Runs fetch-and-extract pipelines over many URLs and merges their tokens.
#[derive(Clone)]
pub struct Aggregator {
    fetcher: Arc<dyn Fetcher>,
}

impl Aggregator {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetches a single URL and extracts its tokens, keeping discovery order.
    pub async fn fetch_one(&self, url: &str) -> Result<ExtractionResult, FetchError> {
        pipeline(self.fetcher.as_ref(), url).await
    }

    /// Fetches every URL with at most `concurrency` requests in flight.
    ///
    /// Returns once all URLs have finished. A failing URL is logged and
    /// recorded in the report; it never stops the others.
    pub async fn fetch_all(&self, urls: &[String], concurrency: usize) -> AggregateReport {
        let concurrency = concurrency.max(1);
        diag_info!("Fetching {} urls with {concurrency} workers", urls.len());

        let mut outcomes = stream::iter(urls.iter().cloned())
            .map(|url| {
                let fetcher = Arc::clone(&self.fetcher);
                async move {
                    let task_url = url.clone();
                    let joined =
                        tokio::spawn(async move { pipeline(fetcher.as_ref(), &task_url).await })
                            .await;
                    let outcome = joined.unwrap_or_else(|err| {
                        Err(FetchError::new(
                            FailureKind::Request,
                            format!("worker aborted: {err}"),
                        ))
                    });
                    (url, outcome)
                }
            })
            .buffer_unordered(concurrency);

        let mut report = AggregateReport::default();
        while let Some((url, outcome)) = outcomes.next().await {
            match outcome {
                Ok(result) => {
                    diag_debug!(
                        "{url}: {} words, {} hyphenated, {} filenames",
                        result.words.len(),
                        result.hyphen_words.len(),
                        result.filenames.len()
                    );
                    report.harvest.absorb(result);
                    report.succeeded += 1;
                }
                Err(error) => {
                    diag_warn!("Failed to retrieve data from URL {url}: {error}");
                    report.failures.push(UrlFailure { url, error });
                }
            }
        }
        report.failures.sort_by(|a, b| a.url.cmp(&b.url));
        report
    }
}

async fn pipeline(fetcher: &dyn Fetcher, url: &str) -> Result<ExtractionResult, FetchError> {
    let fetched = fetcher.fetch(url).await?;
    Ok(extract(&fetched.text))
}
