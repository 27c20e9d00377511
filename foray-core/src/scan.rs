//! Scan orchestration: policy, discovery, merge, probe.

use foray_scanner::error::Result;
use foray_scanner::paths::{merge_candidates, normalize_target};
use foray_scanner::robots::{PolicyOutcome, RobotsPolicy, fetch_policy};
use foray_scanner::sitemap::{SitemapOutcome, fetch_sitemap};
use foray_scanner::{ProbeResult, Prober, ScanConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// Options for configuring a scan run
pub struct ScanOptions {
    /// Raw target as supplied by the user; normalized before use.
    pub target: String,
    /// Supplied candidate paths, merged after any sitemap discoveries.
    pub wordlist: Vec<String>,
    pub config: ScanConfig,
    pub show_progress_bars: bool,
}

/// Callback invoked for each reachable path as soon as it is recorded.
/// Lets callers keep their own copy of the hits, so an interrupted scan
/// still has everything completed up to that point.
pub type ScanResultCallback = Arc<dyn Fn(ProbeResult) + Send + Sync>;

/// Execute a full scan: normalize the target, fetch the robots policy and
/// sitemap once each, merge and dedupe candidates, then run the bounded
/// probe sweep. Returns reachable paths in completion order.
pub async fn execute_scan(
    options: ScanOptions,
    result_callback: Option<ScanResultCallback>,
) -> Result<Vec<ProbeResult>> {
    let ScanOptions {
        target,
        wordlist,
        config,
        show_progress_bars,
    } = options;

    let target = normalize_target(&target)?;
    info!("Starting scan of {}", target);

    let mut prober = Prober::new(&config)?;

    let policy = match fetch_policy(prober.client(), &target).await {
        PolicyOutcome::Fetched(policy) => {
            info!("robots.txt fetched, {} disallow entries", policy.len());
            policy
        }
        PolicyOutcome::Unavailable => {
            info!("robots.txt unavailable, scanning unrestricted");
            RobotsPolicy::default()
        }
    };

    let sitemap_paths = match fetch_sitemap(prober.client(), &target).await {
        SitemapOutcome::Discovered(paths) => {
            info!("sitemap.xml contributed {} paths", paths.len());
            paths
        }
        SitemapOutcome::Unavailable => {
            debug!("sitemap.xml unavailable");
            Vec::new()
        }
    };

    let candidates = merge_candidates(&sitemap_paths, &wordlist);
    info!(
        "Scanning {} paths (robots disallowed: {})",
        candidates.len(),
        policy.len()
    );

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting probe sweep...");
        Some(Arc::new(pb))
    } else {
        None
    };

    if let Some(pb) = progress_bar.clone() {
        let processed = Arc::new(AtomicUsize::new(0));
        let total = candidates.len();
        prober = prober.with_progress_callback(Arc::new(move |_url: String| {
            let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
            pb.set_message(format!("Probing... {done}/{total} paths"));
            pb.tick();
        }));
    }
    if let Some(callback) = result_callback {
        prober = prober.with_result_callback(callback);
    }

    let results = prober.sweep(&target, candidates, &policy).await?;

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    info!("Scan complete. {} reachable paths", results.len());
    Ok(results)
}
