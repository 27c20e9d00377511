//! Target normalization and candidate path merging. Pure functions, no I/O.

use std::collections::HashSet;
use url::Url;

use crate::error::{Result, ScanError};

/// Normalize a user-supplied target into a base URL: scheme added when
/// missing, trailing slash ensured. Empty input is a fatal error; the scan
/// does not start without a target.
pub fn normalize_target(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ScanError::InvalidUrl("no target provided".to_string()));
    }

    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };
    let normalized = if with_scheme.ends_with('/') {
        with_scheme
    } else {
        format!("{with_scheme}/")
    };

    Url::parse(&normalized).map_err(|e| ScanError::InvalidUrl(format!("'{raw}': {e}")))
}

/// Merge sitemap-discovered and wordlist candidates into one deduplicated
/// sequence, sitemap entries first, both sources in their original order.
///
/// Entries are trimmed, empties dropped, and absolute URLs replaced by their
/// path component so that nothing downstream ever sees a full URL. Dedup is
/// order-preserving: each distinct normalized string appears exactly once,
/// at its first-seen position.
pub fn merge_candidates(sitemap_paths: &[String], wordlist_paths: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();

    for entry in sitemap_paths.iter().chain(wordlist_paths) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let candidate = if entry.starts_with("http://") || entry.starts_with("https://") {
            match Url::parse(entry) {
                Ok(url) => url.path().to_string(),
                Err(_) => entry.to_string(),
            }
        } else {
            entry.to_string()
        };
        if seen.insert(candidate.clone()) {
            merged.push(candidate);
        }
    }

    merged
}
