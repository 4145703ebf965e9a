use crate::classify::TrustDomain;
use crate::doctrine::Doctrine;
use crate::severity::AttentionBand;
use crate::signal::{Confidence, Signal};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use vigil_scanner::Origin;

/// A classified, scored page before the review prompt is attached.
#[derive(Debug, Clone)]
pub struct ScoredPage {
    pub url: String,
    pub trust_domain: TrustDomain,
    pub signals: Vec<Signal>,
    pub attention_band: AttentionBand,
    pub confidence: Confidence,
}

/// One page of the brief. Created once per successfully fetched page and
/// never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: String,
    pub trust_domain: TrustDomain,
    pub signals: Vec<Signal>,
    pub attention_band: AttentionBand,
    pub confidence: Confidence,
    pub review_prompt: String,
}

/// Per-URL fetch failure carried in the brief. Never aborts a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchFailure {
    pub url: String,
    pub status: u16,
    pub error: String,
}

/// Visibility metric reflecting crawl yield, independent of risk content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscoveryHealth {
    High,
    Medium,
    Limited,
}

impl DiscoveryHealth {
    pub fn label(&self) -> &'static str {
        match self {
            DiscoveryHealth::High => "High",
            DiscoveryHealth::Medium => "Medium",
            DiscoveryHealth::Limited => "Limited",
        }
    }
}

/// Aggregate root for one discovery run. Read-only after assembly; the
/// presentation layer never re-derives bands or confidence from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryBrief {
    pub origin: Origin,
    pub discovery_health: DiscoveryHealth,
    pub archetype: String,
    pub pages: Vec<PageRecord>,
    pub fetch_errors: Vec<FetchFailure>,
    pub timestamp: String,
}

/// Purely a function of fetch yield - visibility and risk are kept
/// orthogonal.
pub fn discovery_health(fetched_pages: usize) -> DiscoveryHealth {
    if fetched_pages >= 6 {
        DiscoveryHealth::High
    } else if fetched_pages >= 2 {
        DiscoveryHealth::Medium
    } else {
        DiscoveryHealth::Limited
    }
}

const ARCHETYPE_BUCKETS: &[(&str, &[&str])] = &[
    (
        "Regulated / Medical",
        &["health", "medical", "clinic", "patient", "treatment", "insurance", "hipaa"],
    ),
    (
        "Commercial / Transactional",
        &["buy", "shop", "cart", "checkout", "pricing", "store", "order"],
    ),
    (
        "B2B / Enterprise",
        &["enterprise", "platform", "api", "solutions", "integration", "saas"],
    ),
];

/// Advisory archetype guess from homepage text. Never feeds back into
/// scoring.
pub fn guess_archetype(homepage_text: &str) -> String {
    let lowered = homepage_text.to_lowercase();

    for (archetype, keywords) in ARCHETYPE_BUCKETS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return archetype.to_string();
        }
    }
    "General".to_string()
}

/// Build the final discovery record: pages grouped by trust domain in
/// fixed domain order, per-domain insertion order preserved, review
/// prompts attached from the injected doctrine.
pub fn assemble(
    origin: Origin,
    homepage_text: &str,
    scored_pages: Vec<ScoredPage>,
    fetch_errors: Vec<FetchFailure>,
    doctrine: &Doctrine,
) -> DiscoveryBrief {
    let mut pages = Vec::with_capacity(scored_pages.len());
    for domain in TrustDomain::ALL {
        for page in scored_pages.iter().filter(|p| p.trust_domain == domain) {
            pages.push(PageRecord {
                url: page.url.clone(),
                trust_domain: page.trust_domain,
                signals: page.signals.clone(),
                attention_band: page.attention_band,
                confidence: page.confidence,
                review_prompt: doctrine.review_prompt(domain).to_string(),
            });
        }
    }

    DiscoveryBrief {
        origin,
        discovery_health: discovery_health(pages.len()),
        archetype: guess_archetype(homepage_text),
        pages,
        fetch_errors,
        timestamp: Utc::now().to_rfc3339(),
    }
}
