//! Inspection finding and result types.
//!
//! Findings are values, not exceptions: rules describe what is wrong with a
//! link through `RuleReport` entries, and the engine aggregates them into a
//! `LinkInspectionResult` per link.

use serde::Serialize;

/// Severity of a rule finding.
///
/// Errors indicate an objectively broken link (dead target, missing anchor,
/// non-navigable pseudo-protocol). Warnings indicate style or best-practice
/// deviations that still resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The link is broken.
    Error,
    /// The link works but deviates from best practice.
    Warning,
}

/// One finding emitted by a rule.
#[derive(Debug, Clone, Serialize)]
pub struct RuleReport {
    /// Identifier of the rule that produced the finding.
    pub name: &'static str,
    /// Severity of the finding.
    pub scope: Scope,
    /// Human-readable description of the problem.
    pub message: String,
    /// Proposed replacement link, if the rule can repair the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
    /// Short description of what applying the fix does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_description: Option<String>,
    /// Rationale or guidance for a human reviewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    /// Whether the failure may be transient (e.g. a timeout on an external
    /// host) and re-probing later could succeed.
    pub can_retry: bool,
}

impl RuleReport {
    /// Creates an error-scope finding.
    pub fn error(name: &'static str, message: impl Into<String>) -> Self {
        Self::new(name, Scope::Error, message)
    }

    /// Creates a warning-scope finding.
    pub fn warning(name: &'static str, message: impl Into<String>) -> Self {
        Self::new(name, Scope::Warning, message)
    }

    fn new(name: &'static str, scope: Scope, message: impl Into<String>) -> Self {
        Self {
            name,
            scope,
            message: message.into(),
            fix: None,
            fix_description: None,
            tip: None,
            can_retry: false,
        }
    }

    /// Attaches a proposed replacement link.
    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    /// Attaches a description of what the fix does.
    pub fn with_fix_description(mut self, description: impl Into<String>) -> Self {
        self.fix_description = Some(description.into());
        self
    }

    /// Attaches reviewer guidance.
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    /// Marks the failure as possibly transient.
    pub fn retryable(mut self) -> Self {
        self.can_retry = true;
        self
    }
}

/// What a rule returns from a single `test` invocation.
#[derive(Debug, Default)]
pub struct RuleOutcome {
    /// Findings produced by this rule, zero or more.
    pub reports: Vec<RuleReport>,
    /// When true, no further rules run for this link.
    pub halt: bool,
}

impl RuleOutcome {
    /// The rule found nothing to report.
    pub fn pass() -> Self {
        Self::default()
    }

    /// A single finding; evaluation continues with later rules.
    pub fn report(report: RuleReport) -> Self {
        Self {
            reports: vec![report],
            halt: false,
        }
    }

    /// A single finding that supersedes all later checks.
    pub fn halt(report: RuleReport) -> Self {
        Self {
            reports: vec![report],
            halt: true,
        }
    }
}

impl From<Vec<RuleReport>> for RuleOutcome {
    fn from(reports: Vec<RuleReport>) -> Self {
        Self {
            reports,
            halt: false,
        }
    }
}

/// Aggregate inspection output for one link.
#[derive(Debug, Clone, Serialize)]
pub struct LinkInspectionResult {
    /// The link exactly as it appeared in markup.
    pub link: String,
    /// The final replacement after chaining every rule-proposed fix in
    /// evaluation order. Equals `link` when no rule proposed a change.
    pub fix: String,
    /// Accessible text of the link element.
    pub text_content: String,
    /// Error-scope findings.
    pub errors: Vec<RuleReport>,
    /// Warning-scope findings.
    pub warnings: Vec<RuleReport>,
}

impl LinkInspectionResult {
    /// True iff the link produced no findings at all.
    pub fn passes(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// All findings, errors first, in emission order within each scope.
    pub fn findings(&self) -> impl Iterator<Item = &RuleReport> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builders() {
        let report = RuleReport::warning("trailing-slash", "missing trailing slash")
            .with_fix("/about/")
            .with_fix_description("Add a trailing slash");
        assert_eq!(report.scope, Scope::Warning);
        assert_eq!(report.fix.as_deref(), Some("/about/"));
        assert!(!report.can_retry);

        let report = RuleReport::error("no-error-response", "404 Not Found").retryable();
        assert_eq!(report.scope, Scope::Error);
        assert!(report.can_retry);
    }

    #[test]
    fn test_passes_requires_both_empty() {
        let mut result = LinkInspectionResult {
            link: "/a".into(),
            fix: "/a".into(),
            text_content: String::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
        };
        assert!(result.passes());

        result.warnings.push(RuleReport::warning("no-underscores", "underscore"));
        assert!(!result.passes());

        result.warnings.clear();
        result.errors.push(RuleReport::error("no-javascript", "javascript:"));
        assert!(!result.passes());
    }

    #[test]
    fn test_scope_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Scope::Error).unwrap(), "\"error\"");
        assert_eq!(serde_json::to_string(&Scope::Warning).unwrap(), "\"warning\"");
    }
}
