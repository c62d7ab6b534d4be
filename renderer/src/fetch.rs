//! Obtaining `home.json`.
//!
//! Remote documents are always fetched fresh: the URL gets a `v=<millis>`
//! query parameter and the request asks intermediaries not to reuse a cached
//! response. There is no timeout and no retry.

use std::path::PathBuf;

use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::debug;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::error::LoadError;
use crate::types::HomePayload;

/// Where the content document lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSource {
    /// Absolute `http(s)` URL
    Url(String),
    /// Local file (CLI previews)
    File(PathBuf),
}

impl ContentSource {
    /// Classify a user-supplied location: `http://` and `https://` are URLs,
    /// anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ContentSource::Url(raw.to_string())
        } else {
            ContentSource::File(PathBuf::from(raw))
        }
    }

    /// Load and normalize the document.
    pub async fn load(&self, http: &Client) -> Result<HomePayload, LoadError> {
        match self {
            ContentSource::Url(url) => fetch_home(http, url).await,
            ContentSource::File(path) => {
                let body = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
                    path: path.clone(),
                    source,
                })?;
                parse_home(&body)
            }
        }
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Url(url) => f.write_str(url),
            ContentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch `url` bypassing caches and parse the body.
pub async fn fetch_home(http: &Client, url: &str) -> Result<HomePayload, LoadError> {
    let url = cache_busted(url, now_millis());
    debug!(%url, "fetching home content");

    let response = http
        .get(&url)
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    parse_home(&body)
}

/// Parse a `home.json` body. Only malformed JSON fails; shape problems are
/// absorbed by normalization.
pub fn parse_home(body: &str) -> Result<HomePayload, LoadError> {
    Ok(serde_json::from_str(body)?)
}

/// Append the cache-defeating `v` parameter, keeping any existing query and
/// fragment intact.
pub fn cache_busted(url: &str, stamp: u128) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };
    let sep = if base.contains('?') { '&' } else { '?' };
    let mut busted = format!("{base}{sep}v={stamp}");
    if let Some(fragment) = fragment {
        busted.push('#');
        busted.push_str(fragment);
    }
    busted
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
