//! Link inspection engine.
//!
//! Evaluates an ordered list of rules against one link and aggregates their
//! findings. Order is part of the contract: fixes proposed by earlier rules
//! are visible to later rules (a rule that trims whitespace runs before one
//! that checks casing, so the casing check observes the cleaned link).

mod context;
mod result;

pub use context::{parse_link, InspectionInput, ParsedLink, RuleContext};
pub use result::{LinkInspectionResult, RuleOutcome, RuleReport, Scope};

use crate::rules::{built_in_rules, Rule};

/// Inspects one link with the given rule list.
///
/// Rules run strictly in list order. Rules named in `input.skip` are
/// excluded, and rules without the external-links capability are skipped
/// while the current link targets a foreign origin. Each rule observes the
/// fix accumulated so far; a report carrying a fix replaces the current link
/// and its parsed components before the next rule runs. A halting outcome
/// stops evaluation early.
///
/// This function never fails on malformed input: malformedness is expressed
/// as findings. A panicking rule is a programming error and propagates.
pub fn inspect(input: &InspectionInput, rules: &[Box<dyn Rule>]) -> LinkInspectionResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut current = input.link.clone();
    let mut parsed = parse_link(&current);

    for rule in rules {
        if input.skip.contains(rule.name()) {
            continue;
        }
        let external = parsed
            .hostname()
            .is_some_and(|host| !input.site.is_same_host(host));
        if external && !rule.external_links() {
            continue;
        }

        let ctx = RuleContext {
            link: &current,
            url: &parsed,
            text_content: &input.text_content,
            role: &input.role,
            ids: &input.ids,
            from_path: &input.from_path,
            response: input.response.as_ref(),
            site: &input.site,
            page_search: input.page_search.as_deref(),
        };
        let outcome = rule.test(&ctx);

        let mut link_changed = false;
        for report in outcome.reports {
            if let Some(fix) = &report.fix {
                if *fix != current {
                    log::debug!(
                        "rule {} proposes fix: {:?} -> {:?}",
                        rule.name(),
                        current,
                        fix
                    );
                    current = fix.clone();
                    link_changed = true;
                }
            }
            match report.scope {
                Scope::Error => errors.push(report),
                Scope::Warning => warnings.push(report),
            }
        }
        if link_changed {
            parsed = parse_link(&current);
        }
        if outcome.halt {
            break;
        }
    }

    LinkInspectionResult {
        link: input.link.clone(),
        fix: current,
        text_content: input.text_content.clone(),
        errors,
        warnings,
    }
}

/// Inspects one link with the full built-in rule list.
///
/// Convenience wrapper for callers that inspect a single link; batch callers
/// should build the rule list once and use [`inspect`].
pub fn inspect_default(input: &InspectionInput) -> LinkInspectionResult {
    inspect(input, &built_in_rules())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn site() -> SiteConfig {
        SiteConfig::new("https://example.com", false).unwrap()
    }

    #[test]
    fn test_clean_link_passes() {
        let input = InspectionInput::new("/about")
            .with_text("About us")
            .with_site(site());
        let result = inspect_default(&input);
        assert!(result.passes(), "findings: {:?}", result.findings().collect::<Vec<_>>());
        assert_eq!(result.fix, "/about");
    }

    #[test]
    fn test_fixes_chain_across_rules() {
        // Double slashes collapse first, then the casing rule lowercases the
        // already-collapsed link.
        let input = InspectionInput::new("/Docs//Install")
            .with_text("Install guide")
            .with_site(site());
        let result = inspect_default(&input);
        assert_eq!(result.fix, "/docs/install");
        let names: Vec<_> = result.warnings.iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["no-double-slashes", "no-uppercase-chars"]);
    }

    #[test]
    fn test_skip_set_excludes_rule() {
        let input = InspectionInput::new("/Docs")
            .with_text("Docs")
            .with_site(site())
            .with_skip(["no-uppercase-chars"]);
        let result = inspect_default(&input);
        assert!(result.passes());
        assert_eq!(result.fix, "/Docs");
    }

    #[test]
    fn test_external_link_skips_internal_style_rules() {
        // Underscores in a foreign-origin path are that site's business.
        let input = InspectionInput::new("https://other.com/some_page")
            .with_text("Elsewhere")
            .with_site(site());
        let result = inspect_default(&input);
        assert!(result.passes());
    }

    #[test]
    fn test_halt_stops_later_rules() {
        // A javascript: pseudo-link with uppercase letters reports only the
        // pseudo-protocol error; the casing rule never sees it.
        let input = InspectionInput::new("javascript:doThing()")
            .with_text("Do thing")
            .with_site(site());
        let result = inspect_default(&input);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].name, "no-javascript");
        assert!(result.warnings.is_empty());
        assert_eq!(result.fix, "javascript:doThing()");
    }

    #[test]
    fn test_passing_fix_is_a_fixed_point() {
        let input = InspectionInput::new("/Docs//Install")
            .with_text("Install guide")
            .with_site(site());
        let first = inspect_default(&input);
        assert!(!first.passes());

        let again = InspectionInput::new(first.fix.clone())
            .with_text("Install guide")
            .with_site(site());
        let second = inspect_default(&again);
        assert!(second.passes());
        assert_eq!(second.fix, first.fix);
    }

    #[test]
    fn test_subset_of_rules_runs_in_given_order() {
        let rules = crate::rules::built_in_rules();
        let subset: Vec<_> = rules
            .into_iter()
            .filter(|r| r.name() == "no-uppercase-chars")
            .collect();
        let input = InspectionInput::new("/Docs//Install").with_site(site());
        let result = inspect(&input, &subset);
        // Only the casing rule ran; double slashes stay.
        assert_eq!(result.fix, "/docs//install");
        assert_eq!(result.warnings.len(), 1);
    }
}
