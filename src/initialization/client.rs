//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client used for page fetches and probes.
///
/// Redirects are not followed automatically: the probe layer needs to see
/// 301/302 responses (with their Location header) as-is to report them.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_millis(config.timeout_ms))
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes a client that follows redirects, for fetching page HTML.
pub fn init_page_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_millis(config.timeout_ms))
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clients_build_from_default_config() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
        assert!(init_page_client(&config).is_ok());
    }
}
