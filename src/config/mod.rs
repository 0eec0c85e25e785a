//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, thresholds, limits)
//! - CLI option types and parsing
//! - Site-level settings consulted by inspection rules

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel, SiteConfig};
