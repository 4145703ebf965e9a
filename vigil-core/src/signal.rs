use serde::{Deserialize, Serialize};

/// How strongly a rule's pattern implies its stated concern. A static
/// property of the rule, never of the page it fired on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Moderate,
    High,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Moderate => "Moderate",
            Confidence::High => "High",
        }
    }
}

/// How a signal was substantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceType {
    DirectObservation,
    PatternConsistency,
    ClearUserImpactPath,
    GroundedProfessionalInference,
}

impl EvidenceType {
    pub fn label(&self) -> &'static str {
        match self {
            EvidenceType::DirectObservation => "Direct Observation",
            EvidenceType::PatternConsistency => "Pattern Consistency",
            EvidenceType::ClearUserImpactPath => "Clear User Impact Path",
            EvidenceType::GroundedProfessionalInference => "Grounded Professional Inference",
        }
    }
}

/// An evidence-backed indicator found in page markup. Immutable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub description: String,
    pub evidence_type: EvidenceType,
    pub rationale: String,
    pub confidence: Confidence,
}

/// How a rule decides whether a page exhibits its indicator.
enum Matcher {
    /// Case-insensitive substring match on any of the keywords.
    AnyKeyword(&'static [&'static str]),
    /// At least `min` opening tags of the given name.
    TagCountAtLeast(&'static str, usize),
}

impl Matcher {
    fn matches(&self, lowered: &str) -> bool {
        match self {
            Matcher::AnyKeyword(keywords) => {
                keywords.iter().any(|keyword| lowered.contains(keyword))
            }
            Matcher::TagCountAtLeast(tag, min) => {
                let open = format!("<{}", tag);
                lowered.matches(open.as_str()).count() >= *min
            }
        }
    }
}

struct SignalRule {
    matcher: Matcher,
    description: &'static str,
    evidence_type: EvidenceType,
    rationale: &'static str,
    confidence: Confidence,
}

// Evaluated top to bottom, each rule contributing zero or one signal.
// Rules never suppress each other; adding a rule is a data change, not a
// control-flow change.
const RULES: &[SignalRule] = &[
    SignalRule {
        matcher: Matcher::AnyKeyword(&["beta", "preview", "coming soon", "early access"]),
        description: "Pre-release language visible on a public page",
        evidence_type: EvidenceType::DirectObservation,
        rationale: "The markup itself announces unfinished functionality",
        confidence: Confidence::High,
    },
    SignalRule {
        matcher: Matcher::AnyKeyword(&[
            "guarantee", "guaranteed", "100%", "risk-free", "world's best", "#1",
            "best in class",
        ]),
        description: "Superlative or guarantee-style marketing claim",
        evidence_type: EvidenceType::PatternConsistency,
        rationale: "Absolute claims tend to recur where messaging outruns verification",
        confidence: Confidence::Moderate,
    },
    SignalRule {
        matcher: Matcher::TagCountAtLeast("h1", 2),
        description: "Multiple top-level headings on one page",
        evidence_type: EvidenceType::DirectObservation,
        rationale: "Competing h1 elements suggest unreviewed page structure",
        confidence: Confidence::Moderate,
    },
    SignalRule {
        matcher: Matcher::AnyKeyword(&[
            "privacy policy", "terms of service", "terms and conditions",
            "refund policy", "disclaimer",
        ]),
        description: "Policy or legal commitments referenced",
        evidence_type: EvidenceType::GroundedProfessionalInference,
        rationale: "Stated commitments create obligations worth verifying",
        confidence: Confidence::Low,
    },
    SignalRule {
        matcher: Matcher::AnyKeyword(&[
            "contact us", "customer support", "submit a ticket", "live chat",
            "escalate",
        ]),
        description: "Support or escalation pathway advertised",
        evidence_type: EvidenceType::ClearUserImpactPath,
        rationale: "Users are pointed at a pathway whose reliability is unverified",
        confidence: Confidence::Moderate,
    },
];

/// Scan raw HTML against the rule table. Idempotent: identical input
/// yields an identical signal sequence in rule-table order. Never fails
/// on well-formed input.
pub fn detect(html: &str) -> Vec<Signal> {
    let lowered = html.to_lowercase();

    RULES
        .iter()
        .filter(|rule| rule.matcher.matches(&lowered))
        .map(|rule| Signal {
            description: rule.description.to_string(),
            evidence_type: rule.evidence_type,
            rationale: rule.rationale.to_string(),
            confidence: rule.confidence,
        })
        .collect()
}
