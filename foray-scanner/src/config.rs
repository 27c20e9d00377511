use std::time::Duration;

/// Hard ceiling on in-flight probe requests unless overridden.
pub const DEFAULT_CONCURRENCY: usize = 12;

/// Total per-request budget, shared by the HEAD attempt and the GET fallback.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Knobs for a single scan run. Passed into the orchestrator explicitly;
/// nothing here lives in module-level state.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum number of probe requests simultaneously in flight.
    pub concurrency: usize,
    /// Per-request timeout for every HTTP call the scan issues.
    pub timeout: Duration,
    /// Identifying agent string sent on every request.
    pub user_agent: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!(
                "Foray/{} (+https://github.com/trapdoorsec/foray)",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}
