pub mod brief;
pub mod classify;
pub mod discover;
pub mod doctrine;
pub mod report;
pub mod severity;
pub mod signal;

pub use brief::{DiscoveryBrief, DiscoveryHealth, FetchFailure, PageRecord};
pub use classify::TrustDomain;
pub use severity::AttentionBand;
pub use signal::{Confidence, EvidenceType, Signal};

use colored::Colorize;

pub fn print_banner() {
    println!(
        "{}",
        r#"
        _       _ _
 __   _(_) __ _(_) |
 \ \ / / |/ _` | | |
  \ V /| | (_| | | |
   \_/ |_|\__, |_|_|
          |___/
"#
        .bright_cyan()
    );
    println!("{}", "  trust & risk discovery".bright_white());
    println!("{}\n", format!("  v{}", env!("CARGO_PKG_VERSION")).dimmed());
}
