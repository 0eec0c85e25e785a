//! Error type definitions.
//!
//! Expected per-link failure modes are values (rule findings, synthetic probe
//! results), never exceptions; the types here cover the remaining failure
//! classes: resource initialization, report output, and probe-level failure
//! categories tracked for statistics.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured site URL does not parse.
    #[error("Invalid site URL: {0}")]
    InvalidSiteUrl(#[from] url::ParseError),
}

/// Error types for report output.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error writing the report file.
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing the report.
    #[error("Report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Categories of probe-level network failure.
///
/// These never surface to rules -- the probe layer converts them into
/// synthetic response values -- but they are counted for end-of-run
/// statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProbeFailureKind {
    /// The probe exceeded its timeout.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// The request failed before or during transfer.
    Request,
    /// The redirect chain was too long or malformed.
    Redirect,
}

impl ProbeFailureKind {
    /// Human-readable label for statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeFailureKind::Timeout => "probe timeout",
            ProbeFailureKind::Connect => "connection failure",
            ProbeFailureKind::Request => "request failure",
            ProbeFailureKind::Redirect => "redirect failure",
        }
    }
}

impl std::fmt::Display for ProbeFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
