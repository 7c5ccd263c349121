// src/core/net.rs

// Blocking HTTP GET with a static browser header and fixed timeout.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// Fetch `url` and return the body. Non-2xx statuses are errors.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    debug!(url, "GET");
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: s!(url) });
    }
    let body = resp.text()?;
    debug!(url, bytes = body.len(), "fetched");
    Ok(body)
}

/// Prepend `https://` unless the text already names an http(s) scheme.
pub fn normalize_url(text: &str) -> String {
    let t = text.trim();
    let lc = t.to_ascii_lowercase();
    if lc.starts_with("http://") || lc.starts_with("https://") {
        s!(t)
    } else {
        join!("https://", t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_url_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://a.test/x"), "http://a.test/x");
        assert_eq!(normalize_url("HTTPS://a.test"), "HTTPS://a.test");
    }

    #[test]
    fn normalize_url_adds_https() {
        assert_eq!(normalize_url("books.toscrape.com"), "https://books.toscrape.com");
        assert_eq!(normalize_url("  shop.test/p  "), "https://shop.test/p");
    }
}
