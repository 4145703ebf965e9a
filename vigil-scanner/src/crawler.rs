use crate::error::{Result, ScanError};
use crate::extract::{canonicalize, extract_links};
use crate::fetch::{FetchResult, build_client, fetch};
use crate::frontier::{bound, normalize_origin};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use url::Url;

pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// Scheme + host pair: the identity boundary for same-origin membership.
/// Captured from the homepage's post-redirect URL and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub scheme: String,
    pub host: String,
}

impl Origin {
    pub fn of(url: &Url) -> Option<Self> {
        Some(Self {
            scheme: url.scheme().to_string(),
            host: url.host_str()?.to_string(),
        })
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

/// Everything one bounded traversal produced: the origin identity, the
/// ordered frontier, and one fetch result per attempted frontier URL in
/// frontier order. Under a deadline, `pages` may be shorter than
/// `frontier` - unattempted URLs simply have no result.
#[derive(Debug, Clone)]
pub struct SiteSurvey {
    pub origin: Origin,
    pub frontier: Vec<String>,
    pub pages: Vec<FetchResult>,
}

pub struct SiteCrawler {
    client: Client,
    max_pages: usize,
    concurrency: usize,
    deadline: Option<Duration>,
    cancel: Arc<AtomicBool>,
    progress_callback: Option<ProgressCallback>,
}

impl SiteCrawler {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            client: build_client(timeout_secs),
            max_pages: 10,
            concurrency: 4,
            deadline: None,
            cancel: Arc::new(AtomicBool::new(false)),
            progress_callback: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Handle callers can flip to abort the run; workers drain promptly
    /// and whatever completed still yields a partial survey.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    /// Run one bounded traversal of `raw_origin`.
    ///
    /// The homepage is fetched exactly once; its result is reused for
    /// frontier slot 0. An unusable homepage is the only fetch failure
    /// that is fatal - with no origin content there is nothing to bound.
    pub async fn survey(&self, raw_origin: &str) -> Result<SiteSurvey> {
        if self.max_pages == 0 {
            return Err(ScanError::InvalidConfiguration(
                "max-pages must be a positive integer".to_string(),
            ));
        }
        if self.concurrency == 0 {
            return Err(ScanError::InvalidConfiguration(
                "concurrency must be a positive integer".to_string(),
            ));
        }

        let origin_url = normalize_origin(raw_origin)?;
        info!("Surveying {} (max {} pages)", origin_url, self.max_pages);

        let mut home = fetch(&self.client, origin_url.as_str()).await;
        if !home.usable() {
            let reason = home
                .error
                .take()
                .unwrap_or_else(|| "empty response".to_string());
            return Err(ScanError::HomepageUnreachable {
                url: origin_url.to_string(),
                reason,
            });
        }

        // Redirects may have moved us; identity comes from the final URL.
        let final_url = Url::parse(&home.final_url).map_err(|e| {
            ScanError::Other(format!("unparseable final URL '{}': {}", home.final_url, e))
        })?;
        let origin = Origin::of(&final_url).ok_or_else(|| {
            ScanError::Other(format!("final URL '{}' has no host", home.final_url))
        })?;

        let links = extract_links(&home.body, &final_url);
        let homepage = canonicalize(&final_url);
        let frontier = bound(&homepage, &links, self.max_pages)?;
        debug!(
            "Bounded frontier holds {} of {} discovered links",
            frontier.len() - 1,
            links.len()
        );

        home.url = homepage;
        let pages = self.fetch_frontier(&frontier, home).await?;

        info!("Survey complete: {} of {} URLs attempted", pages.len(), frontier.len());
        Ok(SiteSurvey {
            origin,
            frontier,
            pages,
        })
    }

    /// Fetch every frontier URL past the homepage on a fixed-size worker
    /// pool, then restore frontier order. The frontier itself is read-only
    /// here; each worker only appends its own indexed results.
    async fn fetch_frontier(
        &self,
        frontier: &[String],
        home: FetchResult,
    ) -> Result<Vec<FetchResult>> {
        let queue: Arc<Mutex<VecDeque<(usize, String)>>> = Arc::new(Mutex::new(
            frontier
                .iter()
                .enumerate()
                .skip(1)
                .map(|(index, url)| (index, url.clone()))
                .collect(),
        ));
        let collected: Arc<Mutex<Vec<(usize, FetchResult)>>> =
            Arc::new(Mutex::new(vec![(0, home)]));

        let deadline = self.deadline.map(|d| tokio::time::Instant::now() + d);
        let workers = self.concurrency.min(frontier.len().saturating_sub(1)).max(1);

        let mut handles = Vec::new();
        for worker_id in 0..workers {
            let client = self.client.clone();
            let queue = queue.clone();
            let collected = collected.clone();
            let cancel = self.cancel.clone();
            let progress_callback = self.progress_callback.clone();

            handles.push(tokio::spawn(async move {
                debug!("Worker {} started", worker_id);

                loop {
                    let expired = deadline.is_some_and(|d| tokio::time::Instant::now() >= d);
                    if expired || cancel.load(Ordering::Relaxed) {
                        debug!("Worker {} stopping early", worker_id);
                        break;
                    }

                    let work_item = {
                        let mut queue = queue.lock().await;
                        queue.pop_front()
                    };
                    let Some((index, url)) = work_item else {
                        break;
                    };

                    if let Some(ref callback) = progress_callback {
                        callback(worker_id, url.clone());
                    }

                    let result = match deadline {
                        Some(d) => match tokio::time::timeout_at(d, fetch(&client, &url)).await {
                            Ok(result) => result,
                            Err(_) => FetchResult::failed(&url, "run deadline exceeded".to_string()),
                        },
                        None => fetch(&client, &url).await,
                    };

                    if let Some(ref error) = result.error {
                        warn!("Fetch failed for {}: {}", url, error);
                    }

                    collected.lock().await.push((index, result));
                }

                debug!("Worker {} finished", worker_id);
            }));
        }

        for join_result in futures::future::join_all(handles).await {
            join_result?;
        }

        let mut pages = collected.lock().await.clone();
        pages.sort_by_key(|(index, _)| *index);
        Ok(pages.into_iter().map(|(_, result)| result).collect())
    }
}

impl Default for SiteCrawler {
    fn default() -> Self {
        Self::new()
    }
}
