// Tests for report generation

use vigil_core::brief::{DiscoveryBrief, FetchFailure, ScoredPage, assemble};
use vigil_core::classify::TrustDomain;
use vigil_core::doctrine::DOCTRINE;
use vigil_core::report::{ReportFormat, generate_json_report, generate_text_report};
use vigil_core::severity::AttentionBand;
use vigil_core::signal::{Confidence, EvidenceType, Signal};
use vigil_scanner::Origin;

fn sample_brief() -> DiscoveryBrief {
    let origin = Origin {
        scheme: "https".to_string(),
        host: "example.com".to_string(),
    };
    let pages = vec![
        ScoredPage {
            url: "https://example.com".to_string(),
            trust_domain: TrustDomain::BrandCredibility,
            signals: vec![Signal {
                description: "Pre-release language visible on a public page".to_string(),
                evidence_type: EvidenceType::DirectObservation,
                rationale: "The markup itself announces unfinished functionality".to_string(),
                confidence: Confidence::High,
            }],
            attention_band: AttentionBand::Low,
            confidence: Confidence::High,
        },
        ScoredPage {
            url: "https://example.com/checkout".to_string(),
            trust_domain: TrustDomain::TransactionSafety,
            signals: Vec::new(),
            attention_band: AttentionBand::Low,
            confidence: Confidence::High,
        },
    ];
    let errors = vec![FetchFailure {
        url: "https://example.com/broken".to_string(),
        status: 503,
        error: "unusable response: status 503".to_string(),
    }];

    assemble(origin, "welcome to our store", pages, errors, &DOCTRINE)
}

#[test]
fn test_report_format_from_str() {
    assert!(matches!(ReportFormat::from_str("text"), Some(ReportFormat::Text)));
    assert!(matches!(ReportFormat::from_str("JSON"), Some(ReportFormat::Json)));
    assert!(ReportFormat::from_str("csv").is_none());
}

#[test]
fn test_text_report_contains_summary_and_groups() {
    let report = generate_text_report(&sample_brief());

    assert!(report.contains("VIGIL DISCOVERY BRIEF"));
    assert!(report.contains("https://example.com"));
    assert!(report.contains("Brand Credibility"));
    assert!(report.contains("Transaction Safety"));
    assert!(report.contains("Pre-release language visible on a public page"));
    assert!(report.contains("Fetch failures"));
    assert!(report.contains("503"));
}

#[test]
fn test_text_report_carries_doctrine_footer() {
    let report = generate_text_report(&sample_brief());

    assert!(report.contains(DOCTRINE.evidence_bar));
    assert!(report.contains(DOCTRINE.disclaimer));
    for exclusion in DOCTRINE.exclusions {
        assert!(report.contains(exclusion));
    }
}

#[test]
fn test_json_report_envelope_and_round_trip() {
    let brief = sample_brief();
    let json = generate_json_report(&brief).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["report"]["metadata"]["generator"], "Vigil");
    assert_eq!(value["report"]["metadata"]["format"], "json");

    let parsed: DiscoveryBrief =
        serde_json::from_value(value["report"]["brief"].clone()).unwrap();
    assert_eq!(parsed.pages.len(), brief.pages.len());
    assert_eq!(parsed.origin, brief.origin);
    assert_eq!(parsed.fetch_errors.len(), 1);
}

#[test]
fn test_empty_brief_still_renders() {
    let origin = Origin {
        scheme: "https".to_string(),
        host: "example.com".to_string(),
    };
    let brief = assemble(origin, "", Vec::new(), Vec::new(), &DOCTRINE);
    let report = generate_text_report(&brief);

    assert!(report.contains("Pages analyzed:    0"));
    assert!(report.contains("Limited"));
}
