// Report generation from an assembled brief

use crate::brief::{DiscoveryBrief, PageRecord};
use crate::classify::TrustDomain;
use crate::doctrine::DOCTRINE;
use crate::severity::AttentionBand;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

fn band_tag(band: AttentionBand) -> String {
    let tag = format!("[{}]", band.label().to_uppercase());
    match band {
        AttentionBand::Low => tag.green().to_string(),
        AttentionBand::Medium => tag.yellow().to_string(),
        AttentionBand::High => tag.red().to_string(),
        AttentionBand::Critical => tag.bright_red().bold().to_string(),
    }
}

fn render_page(report: &mut String, page: &PageRecord) {
    report.push_str(&format!(
        "  {} {}  (confidence: {})\n",
        band_tag(page.attention_band),
        page.url,
        page.confidence.label()
    ));

    if page.signals.is_empty() {
        report.push_str("      no indicators detected\n");
    }
    for signal in &page.signals {
        report.push_str(&format!(
            "      - {} [{}, {}]\n",
            signal.description,
            signal.evidence_type.label(),
            signal.confidence.label()
        ));
        report.push_str(&format!("        {}\n", signal.rationale));
    }

    report.push_str(&format!("      Review: {}\n\n", page.review_prompt));
}

pub fn generate_text_report(brief: &DiscoveryBrief) -> String {
    let mut report = String::new();

    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("                VIGIL DISCOVERY BRIEF\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    report.push_str(&format!("Origin:            {}\n", brief.origin));
    report.push_str(&format!("Generated:         {}\n", brief.timestamp));
    report.push_str(&format!(
        "Discovery health:  {}\n",
        brief.discovery_health.label()
    ));
    report.push_str(&format!("Archetype guess:   {}\n", brief.archetype));
    report.push_str(&format!("Pages analyzed:    {}\n", brief.pages.len()));
    report.push_str(&format!("Fetch failures:    {}\n\n", brief.fetch_errors.len()));

    for domain in TrustDomain::ALL {
        let pages: Vec<&PageRecord> = brief
            .pages
            .iter()
            .filter(|page| page.trust_domain == domain)
            .collect();
        if pages.is_empty() {
            continue;
        }

        report.push_str(&format!("## {}\n", domain.label()));
        report.push_str(&format!("  {} page(s)\n\n", pages.len()));
        for page in pages {
            render_page(&mut report, page);
        }
    }

    if !brief.fetch_errors.is_empty() {
        report.push_str("## Fetch failures\n");
        for failure in &brief.fetch_errors {
            let status = if failure.status == 0 {
                "-".to_string()
            } else {
                failure.status.to_string()
            };
            report.push_str(&format!("  {} {} {}\n", status, failure.url, failure.error));
        }
        report.push('\n');
    }

    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str(&format!("Evidence bar: {}\n", DOCTRINE.evidence_bar));
    report.push_str("Out of scope:\n");
    for exclusion in DOCTRINE.exclusions {
        report.push_str(&format!("  - {}\n", exclusion));
    }
    report.push_str(&format!("\n{}\n", DOCTRINE.disclaimer));

    report
}

pub fn generate_json_report(brief: &DiscoveryBrief) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Vigil",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": brief.timestamp,
                "format": "json",
                "disclaimer": DOCTRINE.disclaimer
            },
            "brief": brief
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
