pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod frontier;

pub use crawler::{Origin, ProgressCallback, SiteCrawler, SiteSurvey};
pub use error::{Result, ScanError};
pub use fetch::FetchResult;
