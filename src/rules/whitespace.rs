//! Whitespace hygiene for link values.

use crate::inspect::{RuleContext, RuleOutcome, RuleReport};
use crate::rules::Rule;

/// Flags whitespace in links.
///
/// Surrounding whitespace gets an automatic trim fix; embedded whitespace is
/// only reported, since the intended replacement (encode it? split the
/// link?) needs a human decision. Runs early so later rules observe the
/// trimmed value.
pub struct NoWhitespace;

impl Rule for NoWhitespace {
    fn name(&self) -> &'static str {
        "no-whitespace"
    }

    fn external_links(&self) -> bool {
        true
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let link = ctx.link;
        if link.is_empty() {
            return RuleOutcome::pass();
        }
        let trimmed = link.trim();
        if trimmed.len() != link.len() {
            return RuleOutcome::report(
                RuleReport::warning(self.name(), "link has leading or trailing whitespace")
                    .with_fix(trimmed)
                    .with_fix_description("Trim surrounding whitespace"),
            );
        }
        if link.chars().any(char::is_whitespace) {
            return RuleOutcome::report(RuleReport::warning(
                self.name(),
                "link contains embedded whitespace",
            ));
        }
        RuleOutcome::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{inspect, InspectionInput};

    fn rules() -> Vec<Box<dyn Rule>> {
        vec![Box::new(NoWhitespace)]
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let result = inspect(&InspectionInput::new("  /about "), &rules());
        assert_eq!(result.fix, "/about");
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].fix.is_some());
    }

    #[test]
    fn test_embedded_whitespace_has_no_automatic_fix() {
        let result = inspect(&InspectionInput::new("/my page"), &rules());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].fix.is_none());
        assert_eq!(result.fix, "/my page");
    }

    #[test]
    fn test_clean_link_passes() {
        let result = inspect(&InspectionInput::new("/about"), &rules());
        assert!(result.passes());
    }
}
