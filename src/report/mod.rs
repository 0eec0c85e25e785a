//! Audit report aggregation and JSON output.
//!
//! Collects per-route inspection results and page ranks into one
//! serializable artifact. Rendering (HTML, Markdown) is a consumer concern;
//! this module only shapes and persists the data.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::error_handling::ReportError;
use crate::inspect::LinkInspectionResult;

/// All inspection results for the links of one route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    /// Root-relative path of the route.
    pub path: String,
    /// One result per inspected link on the route.
    pub results: Vec<LinkInspectionResult>,
}

impl RouteReport {
    /// Number of error-scope findings across the route's links.
    pub fn error_count(&self) -> usize {
        self.results.iter().map(|r| r.errors.len()).sum()
    }

    /// Number of warning-scope findings across the route's links.
    pub fn warning_count(&self) -> usize {
        self.results.iter().map(|r| r.warnings.len()).sum()
    }
}

/// Authority rank of one page, with its path for readability.
#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    /// Page identifier within the run.
    pub page_id: u64,
    /// Root-relative path of the page.
    pub path: String,
    /// Authority rank in `[1, 100]`.
    pub rank: u32,
}

/// Finding totals across the whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// Links inspected.
    pub links: usize,
    /// Links with no findings.
    pub passed: usize,
    /// Total error-scope findings.
    pub errors: usize,
    /// Total warning-scope findings.
    pub warnings: usize,
}

/// The complete artifact of one audit run.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// When the report was generated, as an RFC 3339 timestamp.
    pub generated_at: String,
    /// Version of the tool that produced the report.
    pub version: String,
    /// Base URL of the audited site.
    pub site: String,
    /// Number of pages fetched.
    pub pages: usize,
    /// Finding totals.
    pub summary: Summary,
    /// Per-route results, in crawl order.
    pub routes: Vec<RouteReport>,
    /// Page ranks, best first.
    pub ranks: Vec<RankEntry>,
    /// Wall-clock duration of the run in seconds.
    pub elapsed_seconds: f64,
}

impl AuditReport {
    /// Assembles a report, computing the summary from the routes.
    pub fn new(
        site: String,
        routes: Vec<RouteReport>,
        ranks: Vec<RankEntry>,
        elapsed_seconds: f64,
    ) -> Self {
        let mut summary = Summary::default();
        for route in &routes {
            for result in &route.results {
                summary.links += 1;
                if result.passes() {
                    summary.passed += 1;
                }
                summary.errors += result.errors.len();
                summary.warnings += result.warnings.len();
            }
        }
        Self {
            generated_at: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            site,
            pages: routes.len(),
            summary,
            routes,
            ranks,
            elapsed_seconds,
        }
    }

    /// Whether any error-scope finding exists.
    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }

    /// Whether any finding exists at all.
    pub fn has_findings(&self) -> bool {
        self.summary.errors > 0 || self.summary.warnings > 0
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{inspect_default, InspectionInput};

    fn route_with(links: &[&str]) -> RouteReport {
        RouteReport {
            path: "/".to_string(),
            results: links
                .iter()
                .map(|link| inspect_default(&InspectionInput::new(*link).with_text("Something")))
                .collect(),
        }
    }

    #[test]
    fn test_summary_counts() {
        let report = AuditReport::new(
            "https://example.com".into(),
            vec![route_with(&["/fine", "/Docs//x", "javascript:void(0)"])],
            Vec::new(),
            1.0,
        );
        assert_eq!(report.summary.links, 3);
        assert_eq!(report.summary.passed, 1);
        assert_eq!(report.summary.errors, 1);
        assert!(report.summary.warnings >= 2);
        assert!(report.has_errors());
        assert!(report.has_findings());
    }

    #[test]
    fn test_clean_report_has_no_findings() {
        let report = AuditReport::new(
            "https://example.com".into(),
            vec![route_with(&["/fine"])],
            Vec::new(),
            0.1,
        );
        assert!(!report.has_errors());
        assert!(!report.has_findings());
        assert_eq!(report.summary.passed, 1);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = AuditReport::new(
            "https://example.com".into(),
            vec![route_with(&["/Docs"])],
            vec![RankEntry {
                page_id: 1,
                path: "/".into(),
                rank: 90,
            }],
            0.5,
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["site"], "https://example.com");
        assert_eq!(json["ranks"][0]["rank"], 90);
        assert_eq!(json["routes"][0]["results"][0]["link"], "/Docs");
        // Scope tags serialize lowercase.
        assert_eq!(
            json["routes"][0]["results"][0]["warnings"][0]["scope"],
            "warning"
        );
    }

    #[test]
    fn test_route_counts() {
        let route = route_with(&["/Docs//x"]);
        assert_eq!(route.error_count(), 0);
        assert_eq!(route.warning_count(), 2);
    }
}
