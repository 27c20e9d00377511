use crate::config::ScanConfig;
use crate::error::Result;
use crate::result::ProbeResult;
use crate::robots::RobotsPolicy;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, info};
use url::Url;

pub type ProgressCallback = Arc<dyn Fn(String) + Send + Sync>;
pub type ResultCallback = Arc<dyn Fn(ProbeResult) + Send + Sync>;

/// Bounded-concurrency HEAD-then-GET sweep over a set of candidate paths.
///
/// One probe task per allowed path, gated by a semaphore sized to the
/// configured concurrency. Tasks run in a [`JoinSet`], so dropping an
/// in-progress sweep aborts every outstanding probe; results recorded up to
/// that point stay valid and remain readable via [`Prober::collected`].
pub struct Prober {
    client: Client,
    results: Arc<Mutex<Vec<ProbeResult>>>,
    concurrency: usize,
    progress_callback: Option<ProgressCallback>,
    result_callback: Option<ResultCallback>,
}

impl Prober {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let concurrency = config.concurrency.max(1);
        // Pool capacity must cover the semaphore bound, or the two limiting
        // layers can deadlock against each other.
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .connect_timeout(config.timeout / 2)
            .pool_max_idle_per_host(concurrency)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            results: Arc::new(Mutex::new(Vec::new())),
            concurrency,
            progress_callback: None,
            result_callback: None,
        })
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn with_result_callback(mut self, callback: ResultCallback) -> Self {
        self.result_callback = Some(callback);
        self
    }

    /// The client used for probes, shared with the discovery fetches so the
    /// whole scan rides one connection pool.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Results recorded so far. Valid even after a cancelled sweep.
    pub async fn collected(&self) -> Vec<ProbeResult> {
        self.results.lock().await.clone()
    }

    /// Probe every allowed candidate against `target`. Results arrive in
    /// completion order; callers must not assume any relation to input order.
    pub async fn sweep(
        &self,
        target: &Url,
        paths: Vec<String>,
        policy: &RobotsPolicy,
    ) -> Result<Vec<ProbeResult>> {
        info!("Probing {} candidate paths on {}", paths.len(), target);

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks: JoinSet<()> = JoinSet::new();

        for path in paths {
            let Ok(resolved) = target.join(&path) else {
                debug!("Skipping unjoinable candidate '{}'", path);
                continue;
            };
            // Policy check happens before any slot is taken; a disallowed
            // path consumes no network resource at all.
            if !policy.is_allowed(resolved.path()) {
                debug!("Robots policy excludes {}", resolved.path());
                continue;
            }

            let client = self.client.clone();
            let results = self.results.clone();
            let semaphore = semaphore.clone();
            let progress = self.progress_callback.clone();
            let on_result = self.result_callback.clone();

            tasks.spawn(async move {
                // Permit is held for the whole probe and released on drop,
                // including abort and error paths.
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return;
                };

                if let Some((status_code, content_type)) =
                    head_or_get(&client, resolved.clone()).await
                    && status_code < 400
                {
                    let result =
                        ProbeResult::new(resolved.to_string(), status_code, content_type);
                    results.lock().await.push(result.clone());
                    if let Some(callback) = &on_result {
                        callback(result);
                    }
                }

                if let Some(callback) = &progress {
                    callback(resolved.into());
                }
            });
        }

        while let Some(joined) = tasks.join_next().await {
            joined?;
        }

        Ok(self.collected().await)
    }
}

/// HEAD first to save bandwidth; some servers reject HEAD outright, so a
/// transport failure or timeout gets exactly one GET retry with the same
/// budget. `None` when both fail - a dead path is not a scan error.
async fn head_or_get(client: &Client, url: Url) -> Option<(u16, String)> {
    match client.head(url.clone()).send().await {
        Ok(response) => Some(describe(response)),
        Err(e) => {
            debug!("HEAD {} failed ({}), retrying as GET", url, e);
            match client.get(url.clone()).send().await {
                Ok(response) => Some(describe(response)),
                Err(e) => {
                    debug!("GET {} failed: {}", url, e);
                    None
                }
            }
        }
    }
}

fn describe(response: reqwest::Response) -> (u16, String) {
    let status_code = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    (status_code, content_type)
}
