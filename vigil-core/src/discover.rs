use crate::brief::{DiscoveryBrief, FetchFailure, ScoredPage, assemble};
use crate::classify::classify;
use crate::doctrine::DOCTRINE;
use crate::severity::propose;
use crate::signal::detect;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;
use vigil_scanner::{Result, SiteCrawler};

/// Options for configuring a discovery run
pub struct DiscoveryOptions {
    pub origin: String,
    pub max_pages: usize,
    pub strict: bool,
    pub workers: usize,
    pub timeout_secs: u64,
    pub deadline: Option<Duration>,
}

impl DiscoveryOptions {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            max_pages: 10,
            strict: false,
            workers: 4,
            timeout_secs: 10,
            deadline: None,
        }
    }
}

/// Callback for reporting discovery progress
pub type DiscoveryProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Execute a full discovery run and assemble the brief.
///
/// Fetch failures past the homepage degrade the brief instead of aborting
/// it; the homepage itself failing is the one fatal fetch.
pub async fn execute_discovery(
    options: DiscoveryOptions,
    progress_callback: Option<DiscoveryProgressCallback>,
) -> Result<DiscoveryBrief> {
    let mut crawler = SiteCrawler::with_timeout(options.timeout_secs)
        .with_max_pages(options.max_pages)
        .with_concurrency(options.workers);
    if let Some(deadline) = options.deadline {
        crawler = crawler.with_deadline(deadline);
    }
    if let Some(ref callback) = progress_callback {
        let callback = callback.clone();
        crawler = crawler.with_progress_callback(Arc::new(move |_worker_id, url| {
            callback(format!("Fetching {}", url));
        }));
    }

    let survey = crawler.survey(&options.origin).await?;
    info!(
        "Survey of {} complete: {} of {} frontier URLs attempted",
        survey.origin,
        survey.pages.len(),
        survey.frontier.len()
    );

    // Archetype guessing reads the homepage; it sits at frontier slot 0.
    let homepage_text = survey
        .pages
        .first()
        .map(|page| page.body.clone())
        .unwrap_or_default();

    let mut scored = Vec::new();
    let mut failures = Vec::new();

    for result in survey.pages {
        if !result.usable() {
            failures.push(FetchFailure {
                error: result.error.unwrap_or_else(|| "empty response".to_string()),
                url: result.url,
                status: result.status,
            });
            continue;
        }

        // A redirect that leaves the origin means the content is not ours
        // to classify: recorded as a failure, not a page.
        let final_host = Url::parse(&result.final_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string));
        if final_host.as_deref() != Some(survey.origin.host.as_str()) {
            warn!("{} redirected off-origin to {}", result.url, result.final_url);
            failures.push(FetchFailure {
                error: format!("redirected off-origin to {}", result.final_url),
                url: result.url,
                status: result.status,
            });
            continue;
        }

        if let Some(ref callback) = progress_callback {
            callback(format!("Analyzing {}", result.url));
        }

        let trust_domain = classify(&result.url);
        let signals = detect(&result.body);
        let (attention_band, confidence) = propose(&signals, options.strict);

        scored.push(ScoredPage {
            url: result.url,
            trust_domain,
            signals,
            attention_band,
            confidence,
        });
    }

    Ok(assemble(
        survey.origin,
        &homepage_text,
        scored,
        failures,
        &DOCTRINE,
    ))
}
