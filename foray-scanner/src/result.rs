use serde::{Deserialize, Serialize};

/// A single reachable path. Only constructed for responses with a status
/// code below 400; anything else is treated as not found and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Fully resolved absolute URL that was probed.
    pub url: String,
    pub status_code: u16,
    /// Content-Type response header, empty string when absent.
    pub content_type: String,
}

impl ProbeResult {
    pub fn new(url: String, status_code: u16, content_type: String) -> Self {
        Self {
            url,
            status_code,
            content_type,
        }
    }
}
