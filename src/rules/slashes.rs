//! Slash hygiene: duplicate separators and trailing-slash policy.

use crate::inspect::{RuleContext, RuleOutcome, RuleReport};
use crate::rules::util::collapse_slashes;
use crate::rules::Rule;

/// Flags paths containing consecutive slashes.
pub struct NoDoubleSlashes;

impl Rule for NoDoubleSlashes {
    fn name(&self) -> &'static str {
        "no-double-slashes"
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        if !ctx.url.pathname.contains("//") {
            return RuleOutcome::pass();
        }
        let mut fixed = ctx.url.clone();
        fixed.pathname = collapse_slashes(&fixed.pathname);
        RuleOutcome::report(
            RuleReport::warning(self.name(), "path contains consecutive slashes")
                .with_fix(fixed.rebuild())
                .with_fix_description("Collapse duplicate slashes"),
        )
    }
}

/// Enforces the site's trailing-slash policy on internal page links.
///
/// Only applies to non-root paths whose last segment has no file extension;
/// the direction of the fix (add or remove) follows the configured policy.
pub struct TrailingSlash;

impl Rule for TrailingSlash {
    fn name(&self) -> &'static str {
        "trailing-slash"
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        if let Some(host) = ctx.url.hostname() {
            if !ctx.site.is_same_host(host) {
                return RuleOutcome::pass();
            }
        } else if !ctx.link.starts_with('/') {
            return RuleOutcome::pass();
        }

        let path = &ctx.url.pathname;
        if path.is_empty() || path == "/" {
            return RuleOutcome::pass();
        }
        let last_segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        if last_segment.contains('.') {
            return RuleOutcome::pass();
        }

        let mut fixed = ctx.url.clone();
        let (message, description) = if ctx.site.trailing_slash {
            if path.ends_with('/') {
                return RuleOutcome::pass();
            }
            fixed.pathname = format!("{path}/");
            (
                "link is missing a trailing slash",
                "Add a trailing slash",
            )
        } else {
            if !path.ends_with('/') {
                return RuleOutcome::pass();
            }
            fixed.pathname = path.trim_end_matches('/').to_string();
            (
                "link has a superfluous trailing slash",
                "Remove the trailing slash",
            )
        };
        RuleOutcome::report(
            RuleReport::warning(self.name(), message)
                .with_fix(fixed.rebuild())
                .with_fix_description(description)
                .with_tip(
                    "Both forms usually resolve, but the non-canonical one \
                     costs a redirect and splits link equity",
                ),
        )
    }
}
