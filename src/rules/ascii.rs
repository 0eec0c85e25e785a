//! Character-level link hygiene: non-ASCII codepoints, casing, underscores.

use crate::inspect::{RuleContext, RuleOutcome, RuleReport};
use crate::rules::util::{encode_non_ascii, is_non_fetchable};
use crate::rules::Rule;

fn has_non_ascii(s: &str) -> bool {
    s.chars().any(|c| !('\u{20}'..='\u{7f}').contains(&c))
}

/// Flags raw non-ASCII codepoints in the path, query, or fragment.
///
/// Browsers percent-encode these on the wire anyway; encoding them in the
/// markup makes the served URL explicit and keeps logs and analytics
/// consistent.
pub struct NoNonAsciiChars;

impl Rule for NoNonAsciiChars {
    fn name(&self) -> &'static str {
        "no-non-ascii-chars"
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let url = ctx.url;
        if !has_non_ascii(&url.pathname) && !has_non_ascii(&url.search) && !has_non_ascii(&url.hash)
        {
            return RuleOutcome::pass();
        }
        let mut fixed = url.clone();
        fixed.pathname = encode_non_ascii(&url.pathname);
        fixed.search = encode_non_ascii(&url.search);
        fixed.hash = encode_non_ascii(&url.hash);
        RuleOutcome::report(
            RuleReport::warning(self.name(), "link contains unencoded non-ASCII characters")
                .with_fix(fixed.rebuild())
                .with_fix_description("Percent-encode non-ASCII characters"),
        )
    }
}

/// Flags uppercase letters anywhere past a leading `#`.
pub struct NoUppercaseChars;

impl Rule for NoUppercaseChars {
    fn name(&self) -> &'static str {
        "no-uppercase-chars"
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let link = ctx.link;
        // Fragment-only links are still checked; other non-fetchable schemes
        // (mailto: addresses, data: payloads) are case-significant.
        if is_non_fetchable(link) && !link.trim_start().starts_with('#') {
            return RuleOutcome::pass();
        }
        let body = link.strip_prefix('#').unwrap_or(link);
        if !body.chars().any(|c| c.is_ascii_uppercase()) {
            return RuleOutcome::pass();
        }
        RuleOutcome::report(
            RuleReport::warning(self.name(), "link contains uppercase characters")
                .with_fix(link.to_lowercase())
                .with_fix_description("Lowercase the link")
                .with_tip("Most servers treat paths case-sensitively; mixed casing invites 404s"),
        )
    }
}

/// Flags underscores in internal link paths.
pub struct NoUnderscores;

impl Rule for NoUnderscores {
    fn name(&self) -> &'static str {
        "no-underscores"
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let link = ctx.link;
        if is_non_fetchable(link) || ctx.url.host.is_some() {
            return RuleOutcome::pass();
        }
        if !link.contains('_') {
            return RuleOutcome::pass();
        }
        RuleOutcome::report(
            RuleReport::warning(self.name(), "link contains underscores")
                .with_fix(link.replace('_', "-"))
                .with_fix_description("Replace underscores with hyphens")
                .with_tip(
                    "Search engines treat hyphens as word separators but run \
                     underscore-joined words together",
                ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{inspect, InspectionInput};

    fn rules() -> Vec<Box<dyn Rule>> {
        vec![
            Box::new(NoNonAsciiChars),
            Box::new(NoUppercaseChars),
            Box::new(NoUnderscores),
        ]
    }

    #[test]
    fn test_non_ascii_path_is_percent_encoded() {
        let result = inspect(&InspectionInput::new("/café/menu"), &rules());
        assert!(!result.passes());
        assert_eq!(result.fix, "/caf%C3%A9/menu");
        assert_eq!(result.warnings[0].name, "no-non-ascii-chars");
    }

    #[test]
    fn test_non_ascii_fragment_is_percent_encoded() {
        let result = inspect(&InspectionInput::new("/menu#entrée"), &rules());
        assert_eq!(result.fix, "/menu#entr%C3%A9e");
    }

    #[test]
    fn test_uppercase_is_lowercased() {
        let result = inspect(&InspectionInput::new("/Docs/Install"), &rules());
        assert_eq!(result.fix, "/docs/install");
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].name, "no-uppercase-chars");
    }

    #[test]
    fn test_uppercase_fragment_only_link_is_checked() {
        let result = inspect(&InspectionInput::new("#Team"), &rules());
        assert_eq!(result.fix, "#team");
    }

    #[test]
    fn test_mailto_case_is_preserved() {
        let result = inspect(&InspectionInput::new("mailto:Sales@example.com"), &rules());
        assert!(result.passes());
    }

    #[test]
    fn test_underscores_become_hyphens() {
        let result = inspect(&InspectionInput::new("/user_guide/getting_started"), &rules());
        assert_eq!(result.fix, "/user-guide/getting-started");
        assert_eq!(result.warnings[0].name, "no-underscores");
    }

    #[test]
    fn test_chained_fixes_compose() {
        // Non-ASCII encoding, then lowercasing, then hyphenation.
        let result = inspect(&InspectionInput::new("/Café_menu"), &rules());
        assert_eq!(result.fix, "/caf%c3%a9-menu");
        assert_eq!(result.warnings.len(), 3);
    }

    #[test]
    fn test_ascii_lowercase_hyphenated_passes() {
        assert!(inspect(&InspectionInput::new("/docs/install"), &rules()).passes());
    }
}
