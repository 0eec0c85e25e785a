//! Fragment (anchor) validation against known element ids.

use crate::config::ANCHOR_SIMILARITY_THRESHOLD;
use crate::fuzzy;
use crate::inspect::{RuleContext, RuleOutcome, RuleReport};
use crate::rules::util::trim_trailing_slash;
use crate::rules::Rule;

/// Flags fragments that target no element on the page.
///
/// Only fragments pointing at the containing page are checked — the id set
/// of other pages is unknown at inspection time. When a close match exists
/// among the known ids, it is proposed as a fix ("did you mean").
pub struct MissingHash;

impl Rule for MissingHash {
    fn name(&self) -> &'static str {
        "missing-hash"
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let hash = &ctx.url.hash;
        if hash.len() <= 1 {
            return RuleOutcome::pass();
        }
        let fragment = &hash[1..];

        let path = &ctx.url.pathname;
        let same_page =
            path.is_empty() || trim_trailing_slash(path) == trim_trailing_slash(ctx.from_path);
        if !same_page {
            return RuleOutcome::pass();
        }
        if ctx.ids.iter().any(|id| id == fragment) {
            return RuleOutcome::pass();
        }

        let mut report = RuleReport::error(
            self.name(),
            format!("no element with id \"{fragment}\" on {}", ctx.from_path),
        )
        .with_tip("Broken anchors scroll to the top of the page without any hint to the user");
        if let Some(closest) = fuzzy::closest(
            fragment,
            ctx.ids.iter().map(String::as_str),
            ANCHOR_SIMILARITY_THRESHOLD,
        ) {
            let mut fixed = ctx.url.clone();
            fixed.hash = format!("#{closest}");
            report = report
                .with_fix(fixed.rebuild())
                .with_fix_description(format!("Did you mean #{closest}?"));
        }
        RuleOutcome::report(report)
    }
}
