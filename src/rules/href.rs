//! Rules for missing and pseudo-protocol hrefs.
//!
//! Both rules halt evaluation: an absent href or a `javascript:` target
//! leaves nothing meaningful for later rules to check.

use crate::inspect::{RuleContext, RuleOutcome, RuleReport};
use crate::rules::Rule;

/// Flags anchor elements with an empty href.
///
/// Elements carrying `role="button"` are exempt: an href-less anchor acting
/// as a button is a deliberate pattern.
pub struct NoMissingHref;

impl Rule for NoMissingHref {
    fn name(&self) -> &'static str {
        "no-missing-href"
    }

    fn external_links(&self) -> bool {
        true
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        if !ctx.link.trim().is_empty() {
            return RuleOutcome::pass();
        }
        if ctx.role.eq_ignore_ascii_case("button") {
            return RuleOutcome::pass();
        }
        RuleOutcome::halt(
            RuleReport::warning(self.name(), "link is missing an href attribute").with_tip(
                "Anchors without an href are skipped by keyboard navigation; \
                 use a <button> or add role=\"button\"",
            ),
        )
    }
}

/// Flags `javascript:` pseudo-protocol links.
pub struct NoJavascript;

impl Rule for NoJavascript {
    fn name(&self) -> &'static str {
        "no-javascript"
    }

    fn external_links(&self) -> bool {
        true
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        if !ctx
            .link
            .trim()
            .to_ascii_lowercase()
            .starts_with("javascript:")
        {
            return RuleOutcome::pass();
        }
        RuleOutcome::halt(
            RuleReport::error(
                self.name(),
                "javascript: links cannot be followed by crawlers or assistive technology",
            )
            .with_tip("Attach an event handler to a <button> element instead"),
        )
    }
}
