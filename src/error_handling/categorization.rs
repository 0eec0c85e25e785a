//! Probe error categorization and retry strategy.

use std::time::Duration;

use tokio_retry::strategy::FixedInterval;

use super::types::ProbeFailureKind;
use crate::config::{PROBE_RETRY_DELAY, PROBE_RETRY_MAX_ATTEMPTS};

/// Maps a transport-level error to its statistics category.
pub fn categorize_probe_error(error: &reqwest::Error) -> ProbeFailureKind {
    if error.is_timeout() {
        ProbeFailureKind::Timeout
    } else if error.is_connect() {
        ProbeFailureKind::Connect
    } else if error.is_redirect() {
        ProbeFailureKind::Redirect
    } else {
        ProbeFailureKind::Request
    }
}

/// The retry schedule for probe requests: fixed delay, bounded attempts.
///
/// Yields one delay per retry, so the total attempt count (including the
/// initial attempt) is `PROBE_RETRY_MAX_ATTEMPTS`.
pub fn probe_retry_strategy() -> impl Iterator<Item = Duration> {
    FixedInterval::new(PROBE_RETRY_DELAY).take(PROBE_RETRY_MAX_ATTEMPTS.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_strategy_length_and_delay() {
        let delays: Vec<Duration> = probe_retry_strategy().collect();
        assert_eq!(delays.len(), PROBE_RETRY_MAX_ATTEMPTS - 1);
        for delay in delays {
            assert_eq!(delay, PROBE_RETRY_DELAY);
        }
    }
}
