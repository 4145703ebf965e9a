// Tests for the propose-then-cap severity pipeline

use vigil_core::severity::{AttentionBand, cap_band, propose, raw_band};
use vigil_core::signal::{Confidence, EvidenceType, Signal};

fn signal(confidence: Confidence) -> Signal {
    Signal {
        description: "indicator".to_string(),
        evidence_type: EvidenceType::DirectObservation,
        rationale: "rationale".to_string(),
        confidence,
    }
}

fn signals(count: usize, confidence: Confidence) -> Vec<Signal> {
    (0..count).map(|_| signal(confidence)).collect()
}

#[test]
fn test_no_signals_is_a_high_confidence_low_band() {
    assert_eq!(propose(&[], false), (AttentionBand::Low, Confidence::High));
    assert_eq!(propose(&[], true), (AttentionBand::Low, Confidence::High));
}

#[test]
fn test_raw_band_non_strict_thresholds() {
    assert_eq!(raw_band(0, false), AttentionBand::Low);
    assert_eq!(raw_band(2, false), AttentionBand::Low);
    assert_eq!(raw_band(3, false), AttentionBand::Medium);
    assert_eq!(raw_band(10, false), AttentionBand::Medium);
}

#[test]
fn test_raw_band_strict_thresholds() {
    assert_eq!(raw_band(1, true), AttentionBand::Low);
    assert_eq!(raw_band(2, true), AttentionBand::Medium);
    assert_eq!(raw_band(3, true), AttentionBand::Medium);
    assert_eq!(raw_band(4, true), AttentionBand::High);
}

#[test]
fn test_raw_band_never_emits_critical() {
    for count in 0..=32 {
        for strict in [false, true] {
            assert_ne!(raw_band(count, strict), AttentionBand::Critical);
        }
    }
}

#[test]
fn test_raw_band_is_monotonic_in_signal_count() {
    for strict in [false, true] {
        let mut previous = AttentionBand::Low;
        for count in 0..=16 {
            let band = raw_band(count, strict);
            assert!(band >= previous, "band regressed at count {}", count);
            previous = band;
        }
    }
}

#[test]
fn test_low_confidence_caps_at_medium() {
    assert_eq!(
        cap_band(AttentionBand::High, Confidence::Low),
        AttentionBand::Medium
    );
    assert_eq!(
        cap_band(AttentionBand::Critical, Confidence::Low),
        AttentionBand::Medium
    );
    assert_eq!(
        cap_band(AttentionBand::Low, Confidence::Low),
        AttentionBand::Low
    );
}

#[test]
fn test_moderate_confidence_caps_at_high() {
    assert_eq!(
        cap_band(AttentionBand::Critical, Confidence::Moderate),
        AttentionBand::High
    );
    assert_eq!(
        cap_band(AttentionBand::Medium, Confidence::Moderate),
        AttentionBand::Medium
    );
}

#[test]
fn test_high_confidence_leaves_bands_uncapped() {
    assert_eq!(
        cap_band(AttentionBand::Critical, Confidence::High),
        AttentionBand::Critical
    );
    assert_eq!(
        cap_band(AttentionBand::High, Confidence::High),
        AttentionBand::High
    );
}

#[test]
fn test_cap_invariant_low_confidence_never_high_or_critical() {
    // Strict mode with four low-confidence signals proposes High raw,
    // but the cap pulls it back to Medium.
    let (band, confidence) = propose(&signals(4, Confidence::Low), true);
    assert_eq!(confidence, Confidence::Low);
    assert!(matches!(band, AttentionBand::Low | AttentionBand::Medium));
    assert_eq!(band, AttentionBand::Medium);
}

#[test]
fn test_strict_mode_can_reach_high_with_moderate_confidence() {
    let (band, confidence) = propose(&signals(4, Confidence::Moderate), true);
    assert_eq!(band, AttentionBand::High);
    assert_eq!(confidence, Confidence::Moderate);
}

#[test]
fn test_confidence_aggregation_is_optimistic() {
    let mixed = vec![
        signal(Confidence::Low),
        signal(Confidence::High),
        signal(Confidence::Moderate),
    ];
    let (_, confidence) = propose(&mixed, false);
    assert_eq!(confidence, Confidence::High);
}

#[test]
fn test_two_signal_page_stays_low_in_non_strict_mode() {
    // The two-h1-plus-beta scenario: count below threshold, band Low,
    // confidence lifted by the stronger signal.
    let page = vec![signal(Confidence::High), signal(Confidence::Moderate)];
    assert_eq!(propose(&page, false), (AttentionBand::Low, Confidence::High));
}

#[test]
fn test_proposer_never_emits_critical() {
    for count in 0..=12 {
        for strict in [false, true] {
            for confidence in [Confidence::Low, Confidence::Moderate, Confidence::High] {
                let (band, _) = propose(&signals(count, confidence), strict);
                assert_ne!(band, AttentionBand::Critical);
            }
        }
    }
}
