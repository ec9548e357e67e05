//! Hosting API client
//!
//! Minimal authenticated client for the hosting REST API: single GETs,
//! link-header pagination with a page cap, and rate-limit tracking from
//! response headers. No retries are performed here; every failure is
//! surfaced to the caller as a typed error.

use chrono::{DateTime, Utc};
use core::fmt::{Display, Formatter};
use reqwest::header::{HeaderMap, LINK};
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};

const LOG_TARGET: &str = "    client";
const BASE_URL: &str = "https://api.github.com";
const PAGE_SIZE: u32 = 100;

/// Rate limit information tracked from the most recent response headers.
///
/// Advisory only: concurrent calls update it last-writer-wins and a stale
/// snapshot never gates correctness beyond the 403 disambiguation below.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitSnapshot {
    pub remaining: u64,
    pub limit: u64,
    pub reset_at: DateTime<Utc>,
}

/// A failed API call, classified by cause.
#[derive(Debug)]
pub enum FetchError {
    /// The requested resource does not exist (HTTP 404).
    NotFound,

    /// HTTP 403 while the tracked remaining quota is exactly zero.
    RateLimited { reset_at: Option<DateTime<Utc>> },

    /// Any other non-2xx status.
    Api { status: u16 },

    /// Connection, TLS, or body decoding failure.
    Transport(ohno::AppError),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "resource not found (404)"),
            Self::RateLimited { reset_at: Some(at) } => {
                write!(f, "API rate limit exhausted, resets at {}", at.format("%Y-%m-%d %H:%M:%S UTC"))
            }
            Self::RateLimited { reset_at: None } => write!(f, "API rate limit exhausted"),
            Self::Api { status } => write!(f, "API request failed with status {status}"),
            Self::Transport(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Hosting API client.
///
/// Cheap to clone; clones share the rate-limit snapshot.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    rate_limit: Arc<Mutex<Option<RateLimitSnapshot>>>,
}

impl Client {
    /// Create a client against the production API with an optional auth token.
    pub fn new(token: Option<&str>) -> crate::Result<Self> {
        Self::with_base_url(token, BASE_URL)
    }

    /// Create a client against a specific base URL. Used by tests to point at
    /// a local mock server.
    pub fn with_base_url(token: Option<&str>, base_url: impl Into<String>) -> crate::Result<Self> {
        use reqwest::header::{AUTHORIZATION, HeaderValue};

        let mut client_builder = reqwest::Client::builder().user_agent(concat!("repo-pulse/", env!("CARGO_PKG_VERSION")));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("token {t}"))?;
            auth_val.set_sensitive(true);

            let mut headers = HeaderMap::new();
            let _ = headers.insert(AUTHORIZATION, auth_val);

            client_builder = client_builder.default_headers(headers);
        }

        Ok(Self {
            client: client_builder.build()?,
            base_url: base_url.into(),
            rate_limit: Arc::new(Mutex::new(None)),
        })
    }

    /// The most recent rate-limit snapshot, if any response carried one.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimitSnapshot> {
        self.rate_limit.lock().ok().and_then(|guard| *guard)
    }

    /// Single authenticated GET for a JSON resource.
    pub async fn fetch_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{path}", self.base_url);
        let resp = self.send(&url).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(self.classify_status(status.as_u16()));
        }

        resp.json().await.map_err(|e| FetchError::Transport(e.into()))
    }

    /// Paginated GET: appends `per_page=100`, follows `rel="next"` links until
    /// none remain or `max_pages` pages have been consumed, whichever comes
    /// first. The page cap is deliberate, not an error.
    ///
    /// HTTP 409 signals an empty repository; whatever has accumulated so far
    /// is returned rather than failing.
    pub async fn fetch_paginated<T: DeserializeOwned>(&self, path: &str, max_pages: u32) -> Result<Vec<T>, FetchError> {
        let sep = if path.contains('?') { '&' } else { '?' };
        let mut url = format!("{}{path}{sep}per_page={PAGE_SIZE}", self.base_url);
        let mut items = Vec::new();
        let mut pages = 0u32;

        loop {
            let resp = self.send(&url).await?;

            let status = resp.status();
            if status.as_u16() == 409 {
                log::debug!(target: LOG_TARGET, "empty repository signal (409), returning {} accumulated item(s)", items.len());
                return Ok(items);
            }
            if !status.is_success() {
                return Err(self.classify_status(status.as_u16()));
            }

            let next = next_link(resp.headers());
            let page: Vec<T> = resp.json().await.map_err(|e| FetchError::Transport(e.into()))?;
            items.extend(page);
            pages += 1;

            match next {
                Some(next_url) if pages < max_pages => url = next_url,
                Some(_) => {
                    log::debug!(target: LOG_TARGET, "reached page cap ({max_pages}) with {} item(s), stopping pagination", items.len());
                    return Ok(items);
                }
                None => return Ok(items),
            }
        }
    }

    /// Issue the request and record the rate-limit snapshot from the response.
    async fn send(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.into()))?;

        if let Some(snapshot) = parse_rate_limit(resp.headers())
            && let Ok(mut guard) = self.rate_limit.lock()
        {
            *guard = Some(snapshot);
        }

        Ok(resp)
    }

    fn classify_status(&self, status: u16) -> FetchError {
        match status {
            404 => FetchError::NotFound,
            403 => {
                // 403 is only a rate limit when the tracked quota is spent;
                // otherwise it is an ordinary permission failure.
                match self.rate_limit() {
                    Some(snapshot) if snapshot.remaining == 0 => FetchError::RateLimited {
                        reset_at: Some(snapshot.reset_at),
                    },
                    _ => FetchError::Api { status },
                }
            }
            other => FetchError::Api { status: other },
        }
    }
}

/// Extract rate-limit information from API response headers.
fn parse_rate_limit(headers: &HeaderMap) -> Option<RateLimitSnapshot> {
    let remaining = headers.get("x-ratelimit-remaining")?.to_str().ok()?.parse::<u64>().ok()?;
    let limit = headers.get("x-ratelimit-limit")?.to_str().ok()?.parse::<u64>().ok()?;
    let reset_timestamp = headers.get("x-ratelimit-reset")?.to_str().ok()?.parse::<i64>().ok()?;
    let reset_at = DateTime::from_timestamp(reset_timestamp, 0)?;

    Some(RateLimitSnapshot { remaining, limit, reset_at })
}

/// Extract the `rel="next"` URL from a Link header, if present.
fn next_link(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;

    for part in link.split(',') {
        let part = part.trim();
        if !part.contains(r#"rel="next""#) {
            continue;
        }
        let start = part.find('<')? + 1;
        let end = part.find('>')?;
        if start < end {
            return Some(part[start..end].to_owned());
        }
    }

    None
}
