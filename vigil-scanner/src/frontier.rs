use crate::error::{Result, ScanError};
use std::collections::HashSet;
use url::Url;

/// Canonicalize a raw user-supplied string into an absolute origin URL.
/// No network access happens here.
pub fn normalize_origin(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScanError::InvalidInput("origin must not be empty".to_string()));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate)
        .map_err(|e| ScanError::InvalidInput(format!("unparseable origin '{}': {}", trimmed, e)))?;

    if url.host_str().is_none() {
        return Err(ScanError::InvalidInput(format!(
            "origin '{}' has no host",
            trimmed
        )));
    }

    Ok(url)
}

/// Merge the homepage and extracted links into an ordered, deduplicated,
/// size-capped traversal list. Homepage first, then extracted links in
/// lexicographic order so identical input always yields identical output.
pub fn bound(
    origin_url: &str,
    extracted_links: &HashSet<String>,
    max_pages: usize,
) -> Result<Vec<String>> {
    if max_pages == 0 {
        return Err(ScanError::InvalidConfiguration(
            "max-pages must be a positive integer".to_string(),
        ));
    }

    let mut frontier = Vec::with_capacity(max_pages.min(extracted_links.len() + 1));
    frontier.push(origin_url.to_string());

    let mut links: Vec<&String> = extracted_links
        .iter()
        .filter(|link| link.as_str() != origin_url)
        .collect();
    links.sort();

    for link in links {
        if frontier.len() == max_pages {
            break;
        }
        frontier.push(link.clone());
    }

    Ok(frontier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_https_scheme() {
        let url = normalize_origin("example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        let url = normalize_origin("  example.com  ").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_normalize_keeps_existing_scheme() {
        let url = normalize_origin("http://example.com").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_normalize_rejects_empty_input() {
        assert!(matches!(
            normalize_origin("   "),
            Err(ScanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_hostless_input() {
        assert!(matches!(
            normalize_origin("https:///path-only"),
            Err(ScanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bound_places_origin_first() {
        let links: HashSet<String> = ["https://example.com/a", "https://example.com/b"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let frontier = bound("https://example.com", &links, 10).unwrap();
        assert_eq!(frontier[0], "https://example.com");
        assert_eq!(frontier.len(), 3);
    }

    #[test]
    fn test_bound_is_deterministic_and_ordered() {
        let links: HashSet<String> = [
            "https://example.com/c",
            "https://example.com/a",
            "https://example.com/b",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let first = bound("https://example.com", &links, 10).unwrap();
        let second = bound("https://example.com", &links, 10).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            &first[1..],
            &[
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string(),
                "https://example.com/c".to_string(),
            ]
        );
    }

    #[test]
    fn test_bound_truncates_at_max_pages() {
        let links: HashSet<String> = (0..20)
            .map(|i| format!("https://example.com/page{:02}", i))
            .collect();

        let frontier = bound("https://example.com", &links, 5).unwrap();
        assert_eq!(frontier.len(), 5);
        assert_eq!(frontier[0], "https://example.com");
    }

    #[test]
    fn test_bound_excludes_duplicate_origin() {
        let links: HashSet<String> =
            ["https://example.com", "https://example.com/about"]
                .iter()
                .map(|s| s.to_string())
                .collect();

        let frontier = bound("https://example.com", &links, 10).unwrap();
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_bound_rejects_zero_max_pages() {
        let links = HashSet::new();
        assert!(matches!(
            bound("https://example.com", &links, 0),
            Err(ScanError::InvalidConfiguration(_))
        ));
    }
}
