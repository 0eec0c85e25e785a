//! CLI argument parsing tests.

use clap::Parser;
use site_audit::{Config, FailOn};

fn parse(args: &[&str]) -> Result<Config, clap::Error> {
    let mut full = vec!["site-audit"];
    full.extend_from_slice(args);
    Config::try_parse_from(full)
}

#[test]
fn minimal_invocation() {
    let config = parse(&["pages.txt", "--site", "https://example.com"]).unwrap();
    assert_eq!(config.file.to_str(), Some("pages.txt"));
    assert_eq!(config.site, "https://example.com");
    assert!(!config.trailing_slash);
    assert!(!config.fetch_remote);
    assert_eq!(config.fail_on, FailOn::Error);
    assert!(config.report.is_none());
}

#[test]
fn site_is_required() {
    assert!(parse(&["pages.txt"]).is_err());
}

#[test]
fn skip_flag_is_repeatable() {
    let config = parse(&[
        "pages.txt",
        "--site",
        "https://example.com",
        "--skip",
        "trailing-slash",
        "--skip",
        "no-underscores",
    ])
    .unwrap();
    assert_eq!(config.skip_inspections.len(), 2);
    let skip = config.skip_set();
    assert!(skip.contains("trailing-slash"));
    assert!(skip.contains("no-underscores"));
}

#[test]
fn fail_on_values() {
    for (value, expected) in [
        ("error", FailOn::Error),
        ("warning", FailOn::Warning),
        ("never", FailOn::Never),
    ] {
        let config = parse(&[
            "pages.txt",
            "--site",
            "https://example.com",
            "--fail-on",
            value,
        ])
        .unwrap();
        assert_eq!(config.fail_on, expected);
    }
    assert!(parse(&[
        "pages.txt",
        "--site",
        "https://example.com",
        "--fail-on",
        "sometimes"
    ])
    .is_err());
}

#[test]
fn numeric_options() {
    let config = parse(&[
        "pages.txt",
        "--site",
        "https://example.com",
        "--max-concurrency",
        "8",
        "--timeout-ms",
        "1500",
    ])
    .unwrap();
    assert_eq!(config.max_concurrency, 8);
    assert_eq!(config.timeout_ms, 1500);
}

#[test]
fn flags_and_report_path() {
    let config = parse(&[
        "pages.txt",
        "--site",
        "https://example.com",
        "--trailing-slash",
        "--fetch-remote",
        "--show-stats",
        "--report",
        "out.json",
    ])
    .unwrap();
    assert!(config.trailing_slash);
    assert!(config.fetch_remote);
    assert!(config.show_stats);
    assert_eq!(config.report.as_deref().map(|p| p.to_str()), Some(Some("out.json")));
}
