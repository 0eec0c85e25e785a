//! Rules over the HTTP probe result: dead links and redirects.

use crate::config::PAGE_PATH_SIMILARITY_THRESHOLD;
use crate::inspect::{RuleContext, RuleOutcome, RuleReport};
use crate::rules::util::is_non_fetchable;
use crate::rules::Rule;

/// Flags links whose probe came back outside the 2xx/3xx range.
///
/// Root-relative links get a "did you mean" fix from the site-wide page
/// index when a close match exists. Failures on absolute links are marked
/// retryable — the host may be transiently down.
pub struct NoErrorResponse;

impl Rule for NoErrorResponse {
    fn name(&self) -> &'static str {
        "no-error-response"
    }

    fn external_links(&self) -> bool {
        true
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        if is_non_fetchable(ctx.link) {
            return RuleOutcome::pass();
        }
        let Some(response) = ctx.response else {
            return RuleOutcome::pass();
        };
        if response.is_success_or_redirect() {
            return RuleOutcome::pass();
        }

        let mut report = RuleReport::error(
            self.name(),
            format!(
                "received {} {} for {}",
                response.status,
                response.status_text,
                ctx.link
            ),
        );
        if ctx.link.starts_with('/') {
            if let Some(index) = ctx.page_search {
                if let Some(closest) =
                    index.best_match(&ctx.url.pathname, PAGE_PATH_SIMILARITY_THRESHOLD)
                {
                    let mut fixed = ctx.url.clone();
                    fixed.pathname = closest.to_string();
                    report = report
                        .with_fix(fixed.rebuild())
                        .with_fix_description(format!("Did you mean {closest}?"));
                }
            }
        } else if ctx.url.host.is_some() {
            report = report.retryable();
        }
        RuleOutcome::report(report)
    }
}

/// Flags links that answer with a 301/302 redirect.
pub struct Redirects;

impl Rule for Redirects {
    fn name(&self) -> &'static str {
        "redirects"
    }

    fn external_links(&self) -> bool {
        true
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let Some(response) = ctx.response else {
            return RuleOutcome::pass();
        };
        if !matches!(response.status, 301 | 302) {
            return RuleOutcome::pass();
        }
        let mut report = RuleReport::warning(
            self.name(),
            format!("link redirects with status {}", response.status),
        )
        .with_tip("Every redirect costs a round trip before the real page loads");
        if let Some(location) = response.header("location") {
            report = report
                .with_fix(location)
                .with_fix_description("Link the redirect target directly");
        }
        RuleOutcome::report(report)
    }
}
