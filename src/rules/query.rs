//! Query-string hygiene.

use std::collections::HashSet;

use crate::inspect::{RuleContext, RuleOutcome, RuleReport};
use crate::rules::Rule;

/// Flags query strings that repeat a parameter key.
///
/// Servers disagree on whether the first or last occurrence wins; the fix
/// keeps the first occurrence of each key and drops the rest.
pub struct NoDuplicateQueryParams;

impl Rule for NoDuplicateQueryParams {
    fn name(&self) -> &'static str {
        "no-duplicate-query-params"
    }

    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let search = &ctx.url.search;
        if search.len() <= 1 {
            return RuleOutcome::pass();
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut kept: Vec<&str> = Vec::new();
        let mut duplicate: Option<&str> = None;
        for pair in search[1..].split('&') {
            let key = pair.split('=').next().unwrap_or(pair);
            if seen.insert(key) {
                kept.push(pair);
            } else if duplicate.is_none() {
                duplicate = Some(key);
            }
        }
        let Some(duplicate) = duplicate else {
            return RuleOutcome::pass();
        };

        let mut fixed = ctx.url.clone();
        fixed.search = if kept.is_empty() {
            String::new()
        } else {
            format!("?{}", kept.join("&"))
        };
        RuleOutcome::report(
            RuleReport::warning(
                self.name(),
                format!("query parameter \"{duplicate}\" is repeated"),
            )
            .with_fix(fixed.rebuild())
            .with_fix_description("Keep the first occurrence of each parameter"),
        )
    }
}
