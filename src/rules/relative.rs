//! Document-relative link detection.

use crate::inspect::{RuleContext, RuleOutcome, RuleReport};
use crate::rules::util::{is_non_fetchable, resolve_relative};
use crate::rules::Rule;

/// Flags links that are relative to the current document.
///
/// Document-relative links silently change target when a page moves or when
/// the site's trailing-slash policy changes the effective base. The fix
/// resolves the link against the containing page into a root-relative
/// equivalent.
pub struct NoBaseless;

impl Rule for NoBaseless {
    fn name(&self) -> &'static str {
        "no-baseless"
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let link = ctx.link;
        if link.is_empty()
            || link.starts_with('/')
            || is_non_fetchable(link)
            || ctx.url.protocol.is_some()
            || ctx.url.host.is_some()
        {
            return RuleOutcome::pass();
        }

        let mut fixed = ctx.url.clone();
        fixed.pathname = resolve_relative(ctx.from_path, &ctx.url.pathname);
        RuleOutcome::report(
            RuleReport::warning(self.name(), "link is relative to the current document")
                .with_fix(fixed.rebuild())
                .with_fix_description("Resolve against the containing page")
                .with_tip(
                    "Root-relative links keep pointing at the same target when \
                     the containing page moves",
                ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{inspect, InspectionInput};

    fn rules() -> Vec<Box<dyn Rule>> {
        vec![Box::new(NoBaseless)]
    }

    #[test]
    fn test_sibling_link_resolves_against_page() {
        let input = InspectionInput::new("other-post").with_from_path("/blog/post");
        let result = inspect(&input, &rules());
        assert_eq!(result.fix, "/blog/other-post");
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_parent_traversal_resolves() {
        let input = InspectionInput::new("../faq").with_from_path("/docs/install");
        let result = inspect(&input, &rules());
        assert_eq!(result.fix, "/faq");
    }

    #[test]
    fn test_query_and_hash_survive_resolution() {
        let input = InspectionInput::new("guide?page=2#top").with_from_path("/docs/");
        let result = inspect(&input, &rules());
        assert_eq!(result.fix, "/docs/guide?page=2#top");
    }

    #[test]
    fn test_root_relative_passes() {
        let input = InspectionInput::new("/about").with_from_path("/blog/post");
        assert!(inspect(&input, &rules()).passes());
    }

    #[test]
    fn test_absolute_and_non_fetchable_pass() {
        for link in ["https://example.com/x", "mailto:x@y.z", "#team", "tel:123"] {
            let input = InspectionInput::new(link).with_from_path("/blog/post");
            assert!(inspect(&input, &rules()).passes(), "{link} should pass");
        }
    }
}
