//! Web page text acquisition
//!
//! Fetches a page over HTTP(S) and reduces its markup to plain text:
//! `script`, `style` and `noscript` content is dropped, each line is trimmed,
//! runs of two or more spaces split a line into separate phrases, and blank
//! lines are removed.
//!
//! # Examples
//!
//! ```no_run
//! use precis_acquire::WebFetcher;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = WebFetcher::new()?;
//! let text = fetcher.fetch_text("https://example.com").await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

use crate::FetchError;
use reqwest::Url;
use scraper::{Html, Node};
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for page requests (20 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// User-Agent sent with every request; some sites refuse unknown clients
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Elements whose text never reaches the output
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// HTTP client for fetching page text
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: reqwest::Client,
}

impl WebFetcher {
    /// Create a fetcher with the default timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch `url` and return its visible text
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let url = validate_url(url)?;
        debug!(%url, "Fetching page");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, error = %e, "Request failed");
            FetchError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Non-success status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let text = html_to_text(&body);
        debug!(%url, html_bytes = body.len(), text_chars = text.chars().count(), "Page converted");

        if text.is_empty() {
            return Err(FetchError::NoText(url.to_string()));
        }
        Ok(text)
    }
}

/// Parse `url`, requiring an http or https scheme and a host
pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url.trim()).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            url,
            parsed.scheme()
        )));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl(format!("{}: missing host", url)));
    }

    Ok(parsed)
}

/// Reduce an HTML document to its visible text, one phrase per line
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut raw = String::new();
    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(e) if SKIPPED_ELEMENTS.contains(&e.name()))
        });
        if !hidden {
            raw.push_str(&**text);
        }
    }

    normalize_lines(&raw)
}

/// Trim lines, split on double spaces, drop blanks, join with newlines
pub fn normalize_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fetch a page with a default [`WebFetcher`]
pub async fn acquire_text_from_url(url: &str) -> Result<String, FetchError> {
    WebFetcher::new()?.fetch_text(url).await
}
