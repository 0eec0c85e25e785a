//! Accessible-text quality for links.

use crate::config::GENERIC_LINK_TEXT;
use crate::inspect::{RuleContext, RuleOutcome, RuleReport};
use crate::rules::Rule;

/// Flags links with missing or uninformative accessible text.
///
/// No automatic fix — choosing descriptive text needs human judgement.
pub struct LinkText;

impl Rule for LinkText {
    fn name(&self) -> &'static str {
        "link-text"
    }

    fn external_links(&self) -> bool {
        true
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        if ctx.link.trim().is_empty() {
            return RuleOutcome::pass();
        }
        let text = ctx.text_content.trim();
        if text.is_empty() {
            return RuleOutcome::report(
                RuleReport::warning(self.name(), "link has no accessible text").with_tip(
                    "Screen readers announce links by their text; an empty \
                     label reads as just \"link\"",
                ),
            );
        }
        let lowered = text.to_lowercase();
        if GENERIC_LINK_TEXT.contains(&lowered.as_str()) {
            return RuleOutcome::report(
                RuleReport::warning(
                    self.name(),
                    format!("link text \"{text}\" says nothing about the destination"),
                )
                .with_tip(
                    "Descriptive link text helps screen-reader users scanning \
                     a link list and tells search engines what the target is about",
                ),
            );
        }
        RuleOutcome::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{inspect, InspectionInput};

    fn rules() -> Vec<Box<dyn Rule>> {
        vec![Box::new(LinkText)]
    }

    #[test]
    fn test_empty_text_warns() {
        let result = inspect(&InspectionInput::new("/about"), &rules());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].name, "link-text");
        assert!(result.warnings[0].fix.is_none());
    }

    #[test]
    fn test_generic_text_warns() {
        for text in ["click here", "Read More", "  HERE  ", "Learn more"] {
            let input = InspectionInput::new("/about").with_text(text);
            let result = inspect(&input, &rules());
            assert_eq!(result.warnings.len(), 1, "{text:?} should warn");
        }
    }

    #[test]
    fn test_descriptive_text_passes() {
        let input = InspectionInput::new("/about").with_text("About our team");
        assert!(inspect(&input, &rules()).passes());
    }

    #[test]
    fn test_missing_href_is_not_this_rules_business() {
        let input = InspectionInput::new("   ");
        assert!(inspect(&input, &rules()).passes());
    }
}
