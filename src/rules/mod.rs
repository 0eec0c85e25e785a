//! Link inspection rule library.
//!
//! Each rule is an independent, stateless check with a single `test` method.
//! Rules communicate only through their returned [`RuleOutcome`]; they hold
//! no per-link memory between invocations.
//!
//! [`built_in_rules`] returns the canonical ordered list. The order matters
//! and is part of the engine contract:
//!
//! 1. structural halts (`no-missing-href`, `no-javascript`)
//! 2. cleanup fixes that later rules should observe (`no-whitespace`,
//!    `no-baseless`, `absolute-site-urls`)
//! 3. path/query/character hygiene
//! 4. network-dependent checks (`no-error-response`, `redirects`)
//! 5. accessible-text quality (`link-text`)

mod ascii;
mod hash;
mod href;
mod query;
mod relative;
mod response;
mod site;
mod slashes;
mod text;
pub(crate) mod util;
mod whitespace;

pub use ascii::{NoNonAsciiChars, NoUnderscores, NoUppercaseChars};
pub use hash::MissingHash;
pub use href::{NoJavascript, NoMissingHref};
pub use query::NoDuplicateQueryParams;
pub use relative::NoBaseless;
pub use response::{NoErrorResponse, Redirects};
pub use site::AbsoluteSiteUrls;
pub use slashes::{NoDoubleSlashes, TrailingSlash};
pub use text::LinkText;
pub use whitespace::NoWhitespace;

use crate::inspect::{RuleContext, RuleOutcome};

/// One link inspection check.
///
/// Implementations must be stateless: `test` is a function of the context
/// alone, and one instance serves every link in a run.
pub trait Rule: Send + Sync {
    /// Stable identifier of the rule, used in reports and skip sets.
    fn name(&self) -> &'static str;

    /// Whether the rule still runs when the link targets a foreign origin.
    ///
    /// Most rules only make sense for links into the site under audit; the
    /// engine skips them for external links unless this returns true.
    fn external_links(&self) -> bool {
        false
    }

    /// Evaluates the rule against one link.
    fn test(&self, ctx: &RuleContext<'_>) -> RuleOutcome;
}

/// The canonical ordered rule list.
pub fn built_in_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(NoMissingHref),
        Box::new(NoJavascript),
        Box::new(NoWhitespace),
        Box::new(NoBaseless),
        Box::new(AbsoluteSiteUrls),
        Box::new(NoDoubleSlashes),
        Box::new(NoDuplicateQueryParams),
        Box::new(NoNonAsciiChars),
        Box::new(NoUppercaseChars),
        Box::new(NoUnderscores),
        Box::new(TrailingSlash),
        Box::new(MissingHash),
        Box::new(NoErrorResponse),
        Box::new(Redirects),
        Box::new(LinkText),
    ]
}
