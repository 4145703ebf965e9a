use serde::{Deserialize, Serialize};
use url::Url;

/// Trust domains findings are grouped under. Every URL maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrustDomain {
    BrandCredibility,
    TransactionSafety,
    SupportReliability,
}

impl TrustDomain {
    /// Fixed grouping order used when assembling a brief.
    pub const ALL: [TrustDomain; 3] = [
        TrustDomain::BrandCredibility,
        TrustDomain::TransactionSafety,
        TrustDomain::SupportReliability,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TrustDomain::BrandCredibility => "Brand Credibility",
            TrustDomain::TransactionSafety => "Transaction Safety",
            TrustDomain::SupportReliability => "Support Reliability",
        }
    }
}

// Support/legal terms are checked before commercial ones: a path matching
// both tables classifies as SupportReliability, because trust-critical
// informational pages outrank commercial classification.
const SUPPORT_TERMS: &[&str] = &[
    "support", "help", "faq", "contact", "privacy", "terms", "legal", "policy",
    "refund", "returns", "warranty", "accessibility",
];

const TRANSACTION_TERMS: &[&str] = &[
    "checkout", "cart", "billing", "pricing", "price", "payment", "pay", "plans",
    "subscribe", "order", "buy", "shop",
];

/// Map a URL's path to a trust domain. Pure, total, and deterministic:
/// unparseable input falls through to the default domain like any other
/// path without a keyword match.
pub fn classify(url: &str) -> TrustDomain {
    let path = Url::parse(url)
        .map(|u| u.path().to_lowercase())
        .unwrap_or_else(|_| url.to_lowercase());

    if SUPPORT_TERMS.iter().any(|term| path.contains(term)) {
        return TrustDomain::SupportReliability;
    }
    if TRANSACTION_TERMS.iter().any(|term| path.contains(term)) {
        return TrustDomain::TransactionSafety;
    }
    TrustDomain::BrandCredibility
}
