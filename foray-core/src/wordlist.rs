use std::fs;
use std::path::Path;

use foray_scanner::error::{Result, ScanError};

/// Compact built-in candidate list used when no wordlist file is supplied.
pub const DEFAULT_WORDLIST: &[&str] = &[
    "admin/",
    "administrator/",
    "login/",
    "dashboard/",
    "admin.php",
    "login.php",
    "backup.zip",
    "backup.bak",
    ".git/",
    ".env",
    "config.php",
];

pub fn default_wordlist() -> Vec<String> {
    DEFAULT_WORDLIST.iter().map(|s| s.to_string()).collect()
}

/// Parse wordlist content: one path per line, blank lines and `#` comments
/// skipped. May legitimately return an empty list.
pub fn parse_wordlist(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load candidate paths from a plaintext file.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        ScanError::Other(format!("Failed to read wordlist {}: {}", path.display(), e))
    })?;
    Ok(parse_wordlist(&content))
}
