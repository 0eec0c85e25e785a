//! HTTP probing with a per-run response cache.
//!
//! Probes are lightweight HEAD requests used to learn a link's live status
//! without downloading its body. All network failure modes are normalized
//! into response-shaped values (synthetic 408 for a timeout, 404 otherwise);
//! the inspection pipeline never observes a raw transport error.

mod cache;

pub use cache::{ProbeOptions, ResponseCache};

use std::collections::HashMap;

use crate::config::PRERENDERED_HEADER;

/// The normalized outcome of probing one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP status code (or a synthetic one for normalized failures).
    pub status: u16,
    /// Reason phrase matching `status`; may be empty.
    pub status_text: String,
    /// Response headers, keys lowercased.
    pub headers: HashMap<String, String>,
}

impl ProbeResponse {
    /// A synthetic plain 200.
    pub fn ok() -> Self {
        Self::with_status(200, "OK")
    }

    /// A synthetic 200 tagged as served from static storage.
    pub fn prerendered() -> Self {
        Self::ok().with_header(PRERENDERED_HEADER, "1")
    }

    /// A response with the given status line and no headers.
    pub fn with_status(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a header, lowercasing the key.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into().to_lowercase(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Whether the status is in the 2xx/3xx range.
    pub fn is_success_or_redirect(&self) -> bool {
        (200..400).contains(&self.status)
    }

    /// Converts a live response into the normalized form.
    pub(crate) fn from_response(response: &reqwest::Response) -> Self {
        let status = response.status();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_lowercase(), value.to_string());
            }
        }
        Self {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_ok() {
        let response = ProbeResponse::ok();
        assert_eq!(response.status, 200);
        assert!(response.is_success_or_redirect());
        assert!(response.headers.is_empty());
    }

    #[test]
    fn test_prerendered_carries_marker_header() {
        let response = ProbeResponse::prerendered();
        assert_eq!(response.header(PRERENDERED_HEADER), Some("1"));
        assert_eq!(response.status, 200);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = ProbeResponse::ok().with_header("Location", "/new");
        assert_eq!(response.header("location"), Some("/new"));
        assert_eq!(response.header("LOCATION"), Some("/new"));
        assert_eq!(response.header("missing"), None);
    }

    #[test]
    fn test_status_ranges() {
        assert!(ProbeResponse::with_status(204, "").is_success_or_redirect());
        assert!(ProbeResponse::with_status(301, "").is_success_or_redirect());
        assert!(!ProbeResponse::with_status(404, "").is_success_or_redirect());
        assert!(!ProbeResponse::with_status(408, "").is_success_or_redirect());
        assert!(!ProbeResponse::with_status(500, "").is_success_or_redirect());
    }
}
