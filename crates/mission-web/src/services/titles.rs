//! Remote title resolution for captured links.
//!
//! Best effort by contract: the fetch shares the app-wide 5-second client
//! timeout, reads at most the first 50 KB of the body, and any failure at
//! all simply yields `None`, leaving the caller to fall back to the URL as
//! the title. Link creation must never fail because a page was slow.

use once_cell::sync::Lazy;
use regex::Regex;

/// How much of the response body is scanned for a `<title>` tag
pub const MAX_TITLE_SCAN_BYTES: usize = 50_000;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

/// Fetch the page behind `url` and pull the text of its `<title>` tag
pub async fn fetch_title(client: &reqwest::Client, url: &str) -> Option<String> {
    let mut response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!(url, error = %err, "title fetch failed");
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!(url, status = %response.status(), "title fetch got non-success status");
        return None;
    }

    let mut body: Vec<u8> = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                body.extend_from_slice(&chunk);
                if body.len() >= MAX_TITLE_SCAN_BYTES {
                    body.truncate(MAX_TITLE_SCAN_BYTES);
                    break;
                }
            }
            Ok(None) => break,
            Err(err) => {
                tracing::debug!(url, error = %err, "title fetch body read failed");
                return None;
            }
        }
    }

    extract_title_tag(&String::from_utf8_lossy(&body))
}

fn extract_title_tag(html: &str) -> Option<String> {
    TITLE_RE
        .captures(html)
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
}
