//! Memoizing response cache over HEAD probes.
//!
//! One cache lives for one audit run and is passed by reference to every
//! inspection task. The at-most-one-fetch invariant: all map mutation
//! happens synchronously under the lock before any await, so N concurrent
//! callers for the same normalized key share a single in-flight request.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio_retry::Retry;
use url::Url;

use super::ProbeResponse;
use crate::config::{HTTP_STATUS_NOT_FOUND, HTTP_STATUS_REQUEST_TIMEOUT, PROBE_TIMEOUT};
use crate::error_handling::{categorize_probe_error, probe_retry_strategy, AuditStats, ProbeFailureKind};
use crate::inspect::parse_link;
use crate::rules::util::{is_non_fetchable, percent_decode, trim_trailing_slash};

type SharedProbe = Shared<BoxFuture<'static, ProbeResponse>>;

/// Settings for one cache instance.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Whether foreign-origin links are probed at all. When false, external
    /// links resolve to an optimistic synthetic 200.
    pub fetch_remote: bool,
    /// Base URL that relative links resolve against.
    pub base_url: Url,
    /// Paths known to be served from static storage; probing them is
    /// pointless, so they resolve to a tagged synthetic 200.
    pub prerendered: HashSet<String>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: PROBE_TIMEOUT,
            fetch_remote: false,
            base_url: Url::parse("http://localhost:3000").expect("static URL parses"),
            prerendered: HashSet::new(),
        }
    }
}

/// Per-run memoizing probe cache.
pub struct ResponseCache {
    client: reqwest::Client,
    options: ProbeOptions,
    stats: Option<Arc<AuditStats>>,
    inflight: Mutex<HashMap<String, SharedProbe>>,
}

impl ResponseCache {
    /// Creates a cache around an existing HTTP client.
    pub fn new(client: reqwest::Client, options: ProbeOptions) -> Self {
        Self {
            client,
            options,
            stats: None,
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Attaches a statistics tracker for probe failure counting.
    pub fn with_stats(mut self, stats: Arc<AuditStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Number of distinct links probed (or in flight) so far.
    pub fn len(&self) -> usize {
        self.inflight.lock().expect("cache lock poisoned").len()
    }

    /// Whether no probe has been issued yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves the probe result for `link`, fetching at most once per
    /// normalized key.
    ///
    /// Short-circuits without touching the network for non-fetchable links,
    /// known-prerendered paths, and (unless `fetch_remote` is set) links to
    /// foreign origins.
    pub async fn get(&self, link: &str) -> ProbeResponse {
        if is_non_fetchable(link) {
            return ProbeResponse::ok();
        }

        let key = normalize_key(link);
        let parsed = parse_link(&key);

        if self
            .options
            .prerendered
            .contains(trim_trailing_slash(&parsed.pathname))
        {
            return ProbeResponse::prerendered();
        }

        let base_host = self.options.base_url.host_str().unwrap_or_default();
        let external = parsed
            .hostname()
            .is_some_and(|host| !host.eq_ignore_ascii_case(base_host));
        if external && !self.options.fetch_remote {
            return ProbeResponse::ok();
        }

        let target = match self.options.base_url.join(&key) {
            Ok(url) => url.to_string(),
            Err(error) => {
                log::debug!("cannot resolve {key:?} against base URL: {error}");
                return ProbeResponse::with_status(HTTP_STATUS_NOT_FOUND, "Not Found");
            }
        };

        let shared = {
            let mut inflight = self.inflight.lock().expect("cache lock poisoned");
            match inflight.get(&key) {
                Some(existing) => existing.clone(),
                None => {
                    let future = probe(
                        self.client.clone(),
                        target,
                        self.options.timeout,
                        self.stats.clone(),
                    )
                    .boxed()
                    .shared();
                    inflight.insert(key, future.clone());
                    future
                }
            }
        };
        shared.await
    }
}

/// Cache key normalization: the fragment never affects the server response,
/// and percent-encoding variants of one path are the same resource.
fn normalize_key(link: &str) -> String {
    let without_fragment = link.split('#').next().unwrap_or(link);
    percent_decode(without_fragment.trim())
}

enum ProbeFailure {
    TimedOut,
    Failed(ProbeFailureKind),
}

async fn probe(
    client: reqwest::Client,
    url: String,
    timeout: Duration,
    stats: Option<Arc<AuditStats>>,
) -> ProbeResponse {
    let started = std::time::Instant::now();

    let result = Retry::spawn(probe_retry_strategy(), || {
        let client = client.clone();
        let url = url.clone();
        async move {
            match tokio::time::timeout(timeout, client.head(&url).send()).await {
                Ok(Ok(response)) => Ok(ProbeResponse::from_response(&response)),
                Ok(Err(error)) => {
                    log::debug!("probe attempt failed for {url}: {error}");
                    Err(ProbeFailure::Failed(categorize_probe_error(&error)))
                }
                Err(_) => Err(ProbeFailure::TimedOut),
            }
        }
    })
    .await;

    let elapsed_ms = started.elapsed().as_millis();
    match result {
        Ok(response) => {
            log::debug!("HEAD {url} -> {} in {elapsed_ms}ms", response.status);
            response
        }
        Err(ProbeFailure::TimedOut) => {
            log::warn!("HEAD {url} timed out after {elapsed_ms}ms");
            if let Some(stats) = &stats {
                stats.record_probe_failure(ProbeFailureKind::Timeout);
            }
            ProbeResponse::with_status(HTTP_STATUS_REQUEST_TIMEOUT, "Request Timeout")
        }
        Err(ProbeFailure::Failed(kind)) => {
            log::warn!("HEAD {url} failed ({kind}) after {elapsed_ms}ms");
            if let Some(stats) = &stats {
                stats.record_probe_failure(kind);
            }
            ProbeResponse::with_status(HTTP_STATUS_NOT_FOUND, "Not Found")
        }
    }
}
