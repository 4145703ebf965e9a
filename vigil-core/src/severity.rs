use crate::signal::{Confidence, Signal};
use serde::{Deserialize, Serialize};

/// Indicative, confidence-capped severity proxy. Explicitly not a final
/// defect severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttentionBand {
    Low,
    Medium,
    High,
    Critical,
}

impl AttentionBand {
    pub fn label(&self) -> &'static str {
        match self {
            AttentionBand::Low => "Low",
            AttentionBand::Medium => "Medium",
            AttentionBand::High => "High",
            AttentionBand::Critical => "Critical",
        }
    }
}

/// Raw band from signal count alone. This stage never emits Critical:
/// that band is reserved for explicit human escalation.
pub fn raw_band(signal_count: usize, strict: bool) -> AttentionBand {
    if strict {
        if signal_count >= 4 {
            AttentionBand::High
        } else if signal_count >= 2 {
            AttentionBand::Medium
        } else {
            AttentionBand::Low
        }
    } else if signal_count >= 3 {
        AttentionBand::Medium
    } else {
        AttentionBand::Low
    }
}

/// Ceiling a proposed band by the confidence backing it. Low confidence
/// caps at Medium, Moderate at High, High at Critical.
pub fn cap_band(raw: AttentionBand, confidence: Confidence) -> AttentionBand {
    let ceiling = match confidence {
        Confidence::Low => AttentionBand::Medium,
        Confidence::Moderate => AttentionBand::High,
        Confidence::High => AttentionBand::Critical,
    };
    raw.min(ceiling)
}

/// Propose an attention band and overall confidence for one page.
///
/// Overall confidence is the maximum individual signal confidence, and
/// no signals at all is itself a high-confidence observation. The
/// propose-then-cap split guarantees high alarm is never presented from
/// low-confidence evidence, however the counting logic evolves.
pub fn propose(signals: &[Signal], strict: bool) -> (AttentionBand, Confidence) {
    let Some(confidence) = signals.iter().map(|signal| signal.confidence).max() else {
        return (AttentionBand::Low, Confidence::High);
    };

    (cap_band(raw_band(signals.len(), strict), confidence), confidence)
}
