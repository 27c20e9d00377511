use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

/// Outcome of a robots.txt fetch.
///
/// `Unavailable` means the file could not be fetched or read and the scan
/// proceeds unrestricted. It is deliberately distinct from
/// `Fetched(RobotsPolicy)` with an empty set, so callers and tests can tell
/// "no robots.txt" apart from "robots.txt present but allows everything".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyOutcome {
    Fetched(RobotsPolicy),
    Unavailable,
}

impl PolicyOutcome {
    /// Collapse the fail-open distinction for callers that only need a
    /// policy to match against.
    pub fn into_policy(self) -> RobotsPolicy {
        match self {
            PolicyOutcome::Fetched(policy) => policy,
            PolicyOutcome::Unavailable => RobotsPolicy::default(),
        }
    }
}

/// Disallow prefixes parsed from robots.txt.
///
/// Matching is a case-sensitive literal string-prefix test on the path
/// component. No wildcard expansion and no path-segment awareness; an entry
/// `/admin` blocks `/administrator` too. That over-broad behavior is the
/// documented contract, not an oversight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsPolicy {
    disallow: Vec<String>,
}

impl RobotsPolicy {
    /// Parse robots.txt text. Blank lines and `#` comments are skipped;
    /// every non-empty `Disallow:` value is normalized to start with `/`.
    /// Rules from all user-agent groups are collected together.
    pub fn parse(text: &str) -> Self {
        let mut disallow: Vec<String> = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            if !key.trim().eq_ignore_ascii_case("disallow") {
                continue;
            }
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let prefix = if value.starts_with('/') {
                value.to_string()
            } else {
                format!("/{value}")
            };
            if !disallow.contains(&prefix) {
                disallow.push(prefix);
            }
        }

        Self { disallow }
    }

    /// True unless some disallow entry is a string prefix of `path`.
    /// Callers pass the path component only; an empty path counts as `/`.
    pub fn is_allowed(&self, path: &str) -> bool {
        let path = if path.is_empty() { "/" } else { path };
        !self.disallow.iter().any(|prefix| path.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.disallow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disallow.is_empty()
    }
}

/// GET `{target}/robots.txt` once, with the client's configured timeout.
/// Any non-200 status, transport error, or timeout fails open. No retries.
pub async fn fetch_policy(client: &Client, target: &Url) -> PolicyOutcome {
    let robots_url = match target.join("/robots.txt") {
        Ok(url) => url,
        Err(_) => return PolicyOutcome::Unavailable,
    };
    debug!("Fetching {}", robots_url);

    let response = match client.get(robots_url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("robots.txt fetch failed: {}", e);
            return PolicyOutcome::Unavailable;
        }
    };

    if response.status() != StatusCode::OK {
        debug!("robots.txt returned {}", response.status());
        return PolicyOutcome::Unavailable;
    }

    match response.text().await {
        Ok(body) => PolicyOutcome::Fetched(RobotsPolicy::parse(&body)),
        Err(e) => {
            warn!("robots.txt body read failed: {}", e);
            PolicyOutcome::Unavailable
        }
    }
}
