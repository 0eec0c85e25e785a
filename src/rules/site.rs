//! Same-site absolute URL detection.

use crate::inspect::{RuleContext, RuleOutcome, RuleReport};
use crate::rules::Rule;

/// Flags absolute links whose host is the site under audit.
///
/// Carrying the full origin ties the markup to one deployment (staging vs
/// production) and defeats client-side route matching. The fix strips the
/// origin, leaving the root-relative form for later rules to inspect.
pub struct AbsoluteSiteUrls;

impl Rule for AbsoluteSiteUrls {
    fn name(&self) -> &'static str {
        "absolute-site-urls"
    }

    fn external_links(&self) -> bool {
        true
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let Some(host) = ctx.url.hostname() else {
            return RuleOutcome::pass();
        };
        if !ctx.site.is_same_host(host) {
            return RuleOutcome::pass();
        }

        let mut fixed = ctx.url.clone();
        fixed.protocol = None;
        fixed.host = None;
        if fixed.pathname.is_empty() {
            fixed.pathname = "/".to_string();
        }
        RuleOutcome::report(
            RuleReport::warning(self.name(), "link to the current site carries the full origin")
                .with_fix(fixed.rebuild())
                .with_fix_description("Use the root-relative form"),
        )
    }
}
