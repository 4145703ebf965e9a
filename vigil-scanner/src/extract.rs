use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// Canonical URL identity: query, fragment, and trailing slash removed.
/// Two URLs differing only in those parts are the same page.
pub fn canonicalize(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.to_string().trim_end_matches('/').to_string()
}

fn resolve(base: &Url, href: &str) -> Option<Url> {
    // Skip empty, fragment-only, javascript:, mailto:, tel: targets.
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return None;
    }

    base.join(href).ok()
}

/// Extract deduplicated same-origin links from an HTML document.
///
/// Hosts must match the base host exactly; a scheme mismatch alone does
/// not disqualify a link, and subdomains do not count as the same origin.
pub fn extract_links(html: &str, base_url: &Url) -> HashSet<String> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse("a[href]").unwrap();

    let Some(base_host) = base_url.host_str() else {
        return HashSet::new();
    };

    let mut links = HashSet::new();

    for element in document.select(&link_selector) {
        if let Some(href) = element.value().attr("href")
            && let Some(resolved) = resolve(base_url, href)
        {
            if resolved.host_str() == Some(base_host) {
                links.insert(canonicalize(&resolved));
            } else {
                debug!("Skipping off-origin link: {}", resolved);
            }
        }
    }

    links
}
