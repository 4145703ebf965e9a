use crate::classify::TrustDomain;

/// Process-wide read-only doctrine: the evidence bar, scope-control
/// exclusions, and the fixed senior-review prompts. Injected where
/// needed, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Doctrine {
    pub evidence_bar: &'static str,
    pub exclusions: &'static [&'static str],
    pub disclaimer: &'static str,
}

pub const DOCTRINE: Doctrine = Doctrine {
    evidence_bar: "Every signal must cite observable page evidence; unstated inference does not clear the bar.",
    exclusions: &[
        "no script execution or page rendering",
        "no cross-origin traversal",
        "no final severity verdicts",
        "no legal or regulatory compliance determinations",
    ],
    disclaimer: "Discovery-level intelligence to support senior QA judgment. Final authority rests with the human auditor.",
};

impl Doctrine {
    /// Fixed review prompt for a trust domain, supplied verbatim to the
    /// presentation layer.
    pub fn review_prompt(&self, domain: TrustDomain) -> &'static str {
        match domain {
            TrustDomain::BrandCredibility => {
                "Senior review: does public messaging promise more certainty than the product delivers, and is the claim trail consistent across pages?"
            }
            TrustDomain::TransactionSafety => {
                "Senior review: walk the money path end to end; verify pricing, billing, and checkout commitments match observed behavior."
            }
            TrustDomain::SupportReliability => {
                "Senior review: confirm advertised support and policy pathways are reachable, current, and honored in practice."
            }
        }
    }
}
