//! HTML extraction: anchors, element ids, and page title.
//!
//! Produces the structural data the inspection engine consumes. Selectors
//! are compiled once; extraction itself never fails -- a malformed document
//! simply yields fewer elements.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("static selector parses"));
static ID_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[id]").expect("static selector parses"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("static selector parses"));

/// One anchor element as found in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLink {
    /// The raw href value; empty when the attribute is absent.
    pub href: String,
    /// Collected text content, whitespace-normalized.
    pub text: String,
    /// The `role` attribute; empty when absent.
    pub role: String,
}

/// Structural data of one page.
#[derive(Debug, Clone, Default)]
pub struct ExtractedPage {
    /// Root-relative path of the page.
    pub path: String,
    /// Anchors in document order.
    pub links: Vec<ExtractedLink>,
    /// Element ids in document order.
    pub ids: Vec<String>,
    /// The `<title>` text, when present.
    pub title: Option<String>,
}

/// Extracts links, element ids, and the title from rendered HTML.
pub fn extract_page(html: &str, path: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    let links = document
        .select(&ANCHOR_SELECTOR)
        .map(|element| ExtractedLink {
            href: element.value().attr("href").unwrap_or_default().to_string(),
            text: normalize_whitespace(&element.text().collect::<String>()),
            role: element.value().attr("role").unwrap_or_default().to_string(),
        })
        .collect();

    let ids = document
        .select(&ID_SELECTOR)
        .filter_map(|element| element.value().attr("id"))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| normalize_whitespace(&element.text().collect::<String>()))
        .filter(|title| !title.is_empty());

    let page = ExtractedPage {
        path: path.to_string(),
        links,
        ids,
        title,
    };
    log::debug!(
        "extracted {} links and {} ids from {}",
        page.links.len(),
        page.ids.len(),
        page.path
    );
    page
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
