//! End-of-run statistics output.

use colored::*;
use strum::IntoEnumIterator;

use crate::error_handling::{AuditStats, ProbeFailureKind};

/// Prints the audit summary to stdout.
pub fn print_summary(stats: &AuditStats) {
    let inspected = stats.links_inspected();
    let passed = stats.links_passed();
    let flagged = inspected.saturating_sub(passed);

    println!(
        "{} {} pages fetched, {} links inspected: {} {}, {} {}",
        "audit complete:".bold(),
        stats.pages_fetched(),
        inspected,
        passed.to_string().green(),
        "passed",
        if flagged > 0 {
            flagged.to_string().red().to_string()
        } else {
            flagged.to_string()
        },
        "flagged",
    );
}

/// Prints per-rule finding counts and probe failure counts.
pub fn print_rule_statistics(stats: &AuditStats) {
    let counts = stats.finding_counts();
    if counts.is_empty() {
        println!("{}", "no findings".green());
    } else {
        println!("{}", "findings by rule:".bold());
        for (rule, count) in counts {
            println!("  {:>6}  {}", count, rule);
        }
    }

    let mut any_failures = false;
    for kind in ProbeFailureKind::iter() {
        let count = stats.probe_failure_count(kind);
        if count > 0 {
            if !any_failures {
                println!("{}", "probe failures:".bold());
                any_failures = true;
            }
            println!("  {:>6}  {}", count, kind);
        }
    }
}
