//! Audit statistics tracking.
//!
//! Thread-safe counters for probe failures and per-rule findings, shared
//! across inspection tasks via `Arc`. All counters are initialized up front;
//! recording is lock-free.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::ProbeFailureKind;
use crate::inspect::LinkInspectionResult;
use crate::rules::built_in_rules;

/// Thread-safe audit statistics tracker.
pub struct AuditStats {
    probe_failures: HashMap<ProbeFailureKind, AtomicUsize>,
    findings: HashMap<&'static str, AtomicUsize>,
    pages_fetched: AtomicUsize,
    links_inspected: AtomicUsize,
    links_passed: AtomicUsize,
}

impl AuditStats {
    /// Creates a tracker with every known counter initialized to zero.
    pub fn new() -> Self {
        let mut probe_failures = HashMap::new();
        for kind in ProbeFailureKind::iter() {
            probe_failures.insert(kind, AtomicUsize::new(0));
        }
        let mut findings = HashMap::new();
        for rule in built_in_rules() {
            findings.insert(rule.name(), AtomicUsize::new(0));
        }
        AuditStats {
            probe_failures,
            findings,
            pages_fetched: AtomicUsize::new(0),
            links_inspected: AtomicUsize::new(0),
            links_passed: AtomicUsize::new(0),
        }
    }

    /// Increments a probe failure counter.
    pub fn record_probe_failure(&self, kind: ProbeFailureKind) {
        if let Some(counter) = self.probe_failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records one fetched page.
    pub fn record_page_fetched(&self) {
        self.pages_fetched.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one finished inspection, counting its findings per rule.
    ///
    /// A finding from a rule outside the built-in list is logged and not
    /// counted; the counter map is fixed at construction.
    pub fn record_result(&self, result: &LinkInspectionResult) {
        self.links_inspected.fetch_add(1, Ordering::Relaxed);
        if result.passes() {
            self.links_passed.fetch_add(1, Ordering::Relaxed);
        }
        for finding in result.findings() {
            match self.findings.get(finding.name) {
                Some(counter) => {
                    counter.fetch_add(1, Ordering::Relaxed);
                }
                None => log::warn!(
                    "finding from unknown rule {:?} not counted in statistics",
                    finding.name
                ),
            }
        }
    }

    /// The count for one probe failure kind.
    pub fn probe_failure_count(&self, kind: ProbeFailureKind) -> usize {
        self.probe_failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// The finding count for one rule name.
    pub fn finding_count(&self, rule: &str) -> usize {
        self.findings
            .get(rule)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched.load(Ordering::SeqCst)
    }

    /// Number of links inspected so far.
    pub fn links_inspected(&self) -> usize {
        self.links_inspected.load(Ordering::SeqCst)
    }

    /// Number of inspected links with no findings.
    pub fn links_passed(&self) -> usize {
        self.links_passed.load(Ordering::SeqCst)
    }

    /// Per-rule finding counts with at least one hit, sorted descending.
    pub fn finding_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = self
            .findings
            .iter()
            .map(|(name, counter)| (*name, counter.load(Ordering::SeqCst)))
            .filter(|(_, count)| *count > 0)
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        counts
    }
}

impl Default for AuditStats {
    fn default() -> Self {
        Self::new()
    }
}
