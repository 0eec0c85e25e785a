//! Inspection context types and the link component parser.
//!
//! Raw links from markup are frequently not valid absolute URLs (`/about`,
//! `../faq`, `#team`, `mailto:x@y.z`), so component extraction must never
//! fail. `parse_link` is total: a hopeless input yields empty components.

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::fuzzy::SearchIndex;
use crate::probe::ProbeResponse;

/// URL components of a raw link.
///
/// Splitting follows browser `URL` conventions: `search` keeps its leading
/// `?` and `hash` its leading `#` (both empty when absent). `host` holds the
/// full authority (userinfo, host, port) so a link can be reassembled
/// byte-faithfully; use [`ParsedLink::hostname`] for comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLink {
    /// Lowercased scheme without the trailing colon, if present.
    pub protocol: Option<String>,
    /// Authority component, if present.
    pub host: Option<String>,
    /// Path component; may be empty.
    pub pathname: String,
    /// Query component including the leading `?`, or empty.
    pub search: String,
    /// Fragment component including the leading `#`, or empty.
    pub hash: String,
}

impl ParsedLink {
    /// The bare host name: authority with userinfo and port stripped.
    pub fn hostname(&self) -> Option<&str> {
        let authority = self.host.as_deref()?;
        let host = match authority.rfind('@') {
            Some(at) => &authority[at + 1..],
            None => authority,
        };
        // IPv6 authorities keep their brackets, matching url::Url::host_str().
        if host.starts_with('[') {
            return match host.find(']') {
                Some(end) => Some(&host[..=end]),
                None => Some(host),
            };
        }
        Some(host.split(':').next().unwrap_or(host))
    }

    /// Reassembles the components into a link string.
    pub fn rebuild(&self) -> String {
        let mut out = String::new();
        if let Some(host) = &self.host {
            match &self.protocol {
                Some(protocol) => {
                    out.push_str(protocol);
                    out.push_str("://");
                }
                None => out.push_str("//"),
            }
            out.push_str(host);
        } else if let Some(protocol) = &self.protocol {
            out.push_str(protocol);
            out.push(':');
        }
        out.push_str(&self.pathname);
        out.push_str(&self.search);
        out.push_str(&self.hash);
        out
    }
}

/// Splits a raw link into URL components without ever failing.
pub fn parse_link(link: &str) -> ParsedLink {
    let mut parsed = ParsedLink::default();
    let mut rest = link;

    // Fragment first: everything after the first '#'.
    if let Some(pos) = rest.find('#') {
        parsed.hash = rest[pos..].to_string();
        rest = &rest[..pos];
    }
    if let Some(pos) = rest.find('?') {
        parsed.search = rest[pos..].to_string();
        rest = &rest[..pos];
    }

    if let Some(colon) = rest.find(':') {
        let scheme = &rest[..colon];
        let is_scheme = !scheme.is_empty()
            && scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'));
        if is_scheme {
            parsed.protocol = Some(scheme.to_ascii_lowercase());
            rest = &rest[colon + 1..];
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        match after.find('/') {
            Some(slash) => {
                parsed.host = Some(after[..slash].to_string());
                parsed.pathname = after[slash..].to_string();
            }
            None => {
                parsed.host = Some(after.to_string());
            }
        }
        if parsed.host.as_deref() == Some("") {
            parsed.host = None;
        }
    } else {
        parsed.pathname = rest.to_string();
    }

    parsed
}

/// Read-only view a rule receives for one invocation.
///
/// `link` and `url` reflect the fix accumulated by earlier rules in the
/// evaluation order, not necessarily the original markup value.
pub struct RuleContext<'a> {
    /// The link under inspection (already-fixed form).
    pub link: &'a str,
    /// Components of `link`.
    pub url: &'a ParsedLink,
    /// Accessible text of the link element; may be empty.
    pub text_content: &'a str,
    /// ARIA role of the link element; empty when absent.
    pub role: &'a str,
    /// Element ids known to exist on the containing page, in document order.
    pub ids: &'a [String],
    /// Normalized path of the page containing the link.
    pub from_path: &'a str,
    /// Resolved HTTP probe result; `None` for links that were not probed.
    pub response: Option<&'a ProbeResponse>,
    /// Site-level settings.
    pub site: &'a SiteConfig,
    /// Fuzzy index over known page paths, when available.
    pub page_search: Option<&'a SearchIndex>,
}

impl RuleContext<'_> {
    /// Whether the current link targets a foreign origin.
    pub fn is_external(&self) -> bool {
        self.url
            .hostname()
            .is_some_and(|host| !self.site.is_same_host(host))
    }
}

/// Owned per-link bundle callers build before invoking the engine.
///
/// Every field except `link` defaults to a permissive/empty value.
#[derive(Debug, Clone)]
pub struct InspectionInput {
    /// The link as it appears in markup.
    pub link: String,
    /// Accessible text of the link element.
    pub text_content: String,
    /// ARIA role of the link element.
    pub role: String,
    /// Element ids of the containing page, in document order.
    pub ids: Vec<String>,
    /// Normalized path of the containing page.
    pub from_path: String,
    /// Resolved probe result; must never be a pending operation.
    pub response: Option<ProbeResponse>,
    /// Site-level settings.
    pub site: SiteConfig,
    /// Fuzzy index over known page paths.
    pub page_search: Option<Arc<SearchIndex>>,
    /// Lowercased rule names excluded from this inspection.
    pub skip: HashSet<String>,
}

impl InspectionInput {
    /// Builds an input with permissive defaults around `link`.
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            text_content: String::new(),
            role: String::new(),
            ids: Vec::new(),
            from_path: "/".to_string(),
            response: None,
            site: SiteConfig::default(),
            page_search: None,
            skip: HashSet::new(),
        }
    }

    /// Sets the accessible text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = text.into();
        self
    }

    /// Sets the ARIA role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the known element ids.
    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the containing page path.
    pub fn with_from_path(mut self, path: impl Into<String>) -> Self {
        self.from_path = path.into();
        self
    }

    /// Sets the resolved probe response.
    pub fn with_response(mut self, response: ProbeResponse) -> Self {
        self.response = Some(response);
        self
    }

    /// Sets the site configuration.
    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    /// Sets the fuzzy page index.
    pub fn with_page_search(mut self, index: Arc<SearchIndex>) -> Self {
        self.page_search = Some(index);
        self
    }

    /// Sets the rule skip set.
    pub fn with_skip<I, S>(mut self, skip: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip = skip.into_iter().map(|s| s.into().to_lowercase()).collect();
        self
    }
}
