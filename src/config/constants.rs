//! Configuration constants.
//!
//! This module defines the operational parameters used throughout the
//! application: probe timeouts, retry policy, fuzzy-match thresholds, and
//! link-text quality rules.

use std::time::Duration;

/// Maximum concurrent inspection tasks (semaphore limit).
pub const SEMAPHORE_LIMIT: usize = 30;

/// Progress logging interval in seconds.
pub const LOGGING_INTERVAL_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("site-audit/", env!("CARGO_PKG_VERSION"));

// Probe behavior
/// Per-probe timeout for HEAD requests.
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(5000);
/// Fixed delay between probe retry attempts.
pub const PROBE_RETRY_DELAY: Duration = Duration::from_millis(250);
/// Maximum number of probe attempts (including the initial attempt).
pub const PROBE_RETRY_MAX_ATTEMPTS: usize = 3;

// Link sanity limits
/// Maximum link length accepted for inspection. Longer links are truncated in
/// log output and rejected up front, matching common server URL limits.
pub const MAX_LINK_LENGTH: usize = 2048;

// Fuzzy suggestion thresholds.
//
// The two call sites tolerate different false-positive rates: an anchor id is
// matched against a small in-page id set, a page path against the whole site.
/// Minimum similarity for "did you mean" anchor-id suggestions.
pub const ANCHOR_SIMILARITY_THRESHOLD: f64 = 0.6;
/// Minimum similarity for "did you mean" page-path suggestions.
pub const PAGE_PATH_SIMILARITY_THRESHOLD: f64 = 0.5;

// HTTP status codes surfaced as synthetic probe results
/// Synthetic status for a probe that timed out.
pub const HTTP_STATUS_REQUEST_TIMEOUT: u16 = 408;
/// Synthetic status for a probe that failed without a response.
pub const HTTP_STATUS_NOT_FOUND: u16 = 404;

/// Header attached to synthetic responses for paths served from static
/// storage, so downstream consumers can tell them from live probes.
pub const PRERENDERED_HEADER: &str = "x-prerendered";

/// Link texts that carry no information about the destination.
///
/// Compared against the lowercased, trimmed accessible text of a link.
pub const GENERIC_LINK_TEXT: &[&str] = &[
    "click here",
    "click this",
    "go",
    "here",
    "this",
    "start",
    "right here",
    "more",
    "learn more",
    "read more",
    "continue reading",
    "link",
    "check out",
];
