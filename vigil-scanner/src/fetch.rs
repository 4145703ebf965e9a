use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Outcome of one attempted fetch. `body` is non-empty only when the
/// response was usable HTML; every other outcome carries an error string
/// instead. One instance per attempted URL, never retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    pub url: String,
    pub final_url: String,
    pub status: u16,
    pub body: String,
    pub error: Option<String>,
}

impl FetchResult {
    pub fn failed(url: &str, error: String) -> Self {
        Self {
            url: url.to_string(),
            final_url: url.to_string(),
            status: 0,
            body: String::new(),
            error: Some(error),
        }
    }

    pub fn usable(&self) -> bool {
        self.error.is_none() && !self.body.is_empty()
    }
}

pub fn build_client(timeout_secs: u64) -> Client {
    Client::builder()
        .user_agent("Vigil/0.1 (https://github.com/trapdoorsec/vigil)")
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .expect("Failed to create HTTP client")
}

/// Perform exactly one GET for `url`. Redirects are followed and the
/// resolved URL is recorded in `final_url`; callers must use it for all
/// subsequent identity decisions. Failures of any kind come back inside
/// the result, never as an error to the caller.
pub async fn fetch(client: &Client, url: &str) -> FetchResult {
    debug!("Fetching {}", url);

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let reason = if e.is_timeout() {
                format!("request timed out: {}", e)
            } else if e.is_connect() {
                format!("connection failed: {}", e)
            } else {
                format!("request failed: {}", e)
            };
            return FetchResult::failed(url, reason);
        }
    };

    let final_url = response.url().to_string();
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            return FetchResult {
                url: url.to_string(),
                final_url,
                status,
                body: String::new(),
                error: Some(format!("failed to read body: {}", e)),
            };
        }
    };

    if status != 200 {
        return FetchResult {
            url: url.to_string(),
            final_url,
            status,
            body: String::new(),
            error: Some(format!("unusable response: status {}", status)),
        };
    }

    // Usable means HTML by header, or by a body sniff when the server
    // labels it poorly.
    let header_is_html = content_type
        .as_deref()
        .map(|ct| ct.contains("text/html"))
        .unwrap_or(false);
    let body_looks_html = body.to_lowercase().contains("<html");

    if !header_is_html && !body_looks_html {
        return FetchResult {
            url: url.to_string(),
            final_url,
            status,
            body: String::new(),
            error: Some(format!(
                "unusable response: not HTML ({})",
                content_type.as_deref().unwrap_or("no content-type")
            )),
        };
    }

    FetchResult {
        url: url.to_string(),
        final_url,
        status,
        body,
        error: None,
    }
}
