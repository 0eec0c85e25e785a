//! Configuration types and CLI options.
//!
//! This module defines the enums and structs used for command-line argument
//! parsing and for the site-level settings that inspection rules consult.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::config::constants::DEFAULT_USER_AGENT;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which finding scope causes a non-zero exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Fail the run when any error-scope finding exists (default)
    Error,
    /// Fail the run when any finding exists, warnings included
    Warning,
    /// Always exit zero regardless of findings
    Never,
}

/// Audit configuration, parsed from the command line.
#[derive(Debug, Clone, Parser)]
#[command(name = "site-audit", version, about)]
pub struct Config {
    /// File containing page URLs to audit, one per line ('-' for stdin)
    pub file: PathBuf,

    /// Base URL of the site under audit (e.g. https://example.com)
    #[arg(long)]
    pub site: String,

    /// Whether canonical internal links carry a trailing slash
    #[arg(long, default_value_t = false)]
    pub trailing_slash: bool,

    /// Probe external (foreign-origin) links over the network
    #[arg(long, default_value_t = false)]
    pub fetch_remote: bool,

    /// Maximum concurrent inspections
    #[arg(long, default_value_t = crate::config::constants::SEMAPHORE_LIMIT)]
    pub max_concurrency: usize,

    /// Per-probe timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub timeout_ms: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Rule names to skip (repeatable)
    #[arg(long = "skip", value_name = "RULE")]
    pub skip_inspections: Vec<String>,

    /// Write the full audit report as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Which finding scope fails the run
    #[arg(long, value_enum, default_value_t = FailOn::Error)]
    pub fail_on: FailOn,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Print per-rule finding statistics at the end of the run
    #[arg(long, default_value_t = false)]
    pub show_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("pages.txt"),
            site: "http://localhost:3000".to_string(),
            trailing_slash: false,
            fetch_remote: false,
            max_concurrency: crate::config::constants::SEMAPHORE_LIMIT,
            timeout_ms: 5000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            skip_inspections: Vec::new(),
            report: None,
            fail_on: FailOn::Error,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            show_stats: false,
        }
    }
}

/// Site-level settings consulted by inspection rules.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base URL of the site under audit.
    pub url: Url,
    /// Whether canonical internal links carry a trailing slash.
    pub trailing_slash: bool,
}

impl SiteConfig {
    /// Builds a site config from a base URL string.
    pub fn new(site: &str, trailing_slash: bool) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(site)?,
            trailing_slash,
        })
    }

    /// The host of the site under audit, if the base URL has one.
    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    /// Whether `host` names the site under audit.
    pub fn is_same_host(&self, host: &str) -> bool {
        self.host().is_some_and(|h| h.eq_ignore_ascii_case(host))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: Url::parse("http://localhost:3000").expect("static URL parses"),
            trailing_slash: false,
        }
    }
}

impl Config {
    /// The rule-name skip set, lowercased for case-insensitive matching.
    pub fn skip_set(&self) -> HashSet<String> {
        self.skip_inspections
            .iter()
            .map(|s| s.trim().to_lowercase())
            .collect()
    }
}
