//! Error handling and audit statistics.
//!
//! This module provides:
//! - Typed errors for initialization and report output
//! - Probe failure categorization and the probe retry strategy
//! - Audit statistics tracking (probe failures, per-rule findings)
//!
//! Per-link malformedness is never an error here: it flows through rule
//! findings and synthetic probe responses.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_probe_error, probe_retry_strategy};
pub use stats::AuditStats;
pub use types::{InitializationError, ProbeFailureKind, ReportError};
