//! Sitemap-driven path discovery.
//!
//! The sitemap is a *source* of extra candidates, not a substitute for the
//! supplied wordlist. Fetch and parse failures fail open to an empty list.

use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::error::{Result, ScanError};

/// Outcome of a sitemap.xml fetch, mirroring [`crate::robots::PolicyOutcome`]:
/// `Unavailable` covers missing files, transport errors, and unparseable XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapOutcome {
    Discovered(Vec<String>),
    Unavailable,
}

impl SitemapOutcome {
    pub fn into_paths(self) -> Vec<String> {
        match self {
            SitemapOutcome::Discovered(paths) => paths,
            SitemapOutcome::Unavailable => Vec::new(),
        }
    }
}

/// Extract the path component of every `<loc>` entry, in document order.
///
/// Absolute locations are reduced to their path; scheme, host, and query are
/// discarded. Relative locations keep their path text as-is.
pub fn extract_paths(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut paths = Vec::new();
    let mut in_loc = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                in_loc = e.local_name().as_ref() == b"loc";
            }
            Ok(Event::End(_)) => {
                in_loc = false;
            }
            Ok(Event::Text(e)) if in_loc => {
                let text = e.unescape().map_err(|e| ScanError::ParseError(e.to_string()))?;
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                let path = match Url::parse(text) {
                    Ok(loc) => loc.path().to_string(),
                    // Relative <loc>: keep the path text, drop any query
                    Err(_) => text.split(['?', '#']).next().unwrap_or("").to_string(),
                };
                paths.push(path);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ScanError::ParseError(format!("XML parse error: {e}"))),
            _ => {}
        }
        buf.clear();
    }

    Ok(paths)
}

/// GET `{target}/sitemap.xml` once, with the client's configured timeout.
/// Non-200 status, transport error, timeout, or malformed XML all fail open.
/// No retries, no sitemap-index recursion.
pub async fn fetch_sitemap(client: &Client, target: &Url) -> SitemapOutcome {
    let sitemap_url = match target.join("/sitemap.xml") {
        Ok(url) => url,
        Err(_) => return SitemapOutcome::Unavailable,
    };
    debug!("Fetching {}", sitemap_url);

    let response = match client.get(sitemap_url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("sitemap.xml fetch failed: {}", e);
            return SitemapOutcome::Unavailable;
        }
    };

    if response.status() != StatusCode::OK {
        debug!("sitemap.xml returned {}", response.status());
        return SitemapOutcome::Unavailable;
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("sitemap.xml body read failed: {}", e);
            return SitemapOutcome::Unavailable;
        }
    };

    match extract_paths(&body) {
        Ok(paths) => SitemapOutcome::Discovered(paths),
        Err(e) => {
            warn!("sitemap.xml parse failed: {}", e);
            SitemapOutcome::Unavailable
        }
    }
}
