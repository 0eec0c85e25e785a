//! Directed graph of internal links between crawled pages.

use std::collections::{HashMap, HashSet};

use url::Url;

/// One crawled page, as recorded by the crawl snapshot.
#[derive(Debug, Clone)]
pub struct PageData {
    /// Stable identifier of the page within the snapshot.
    pub page_id: u64,
    /// Absolute URL of the page.
    pub url: String,
    /// Root-relative path of the page.
    pub path: String,
    /// Crawl depth: path segments / hops from the site root.
    pub depth: u32,
}

/// One extracted link, as recorded by the crawl snapshot.
#[derive(Debug, Clone)]
pub struct LinkData {
    /// Page the link appears on.
    pub page_id: u64,
    /// Raw target of the link (absolute or relative).
    pub href: String,
}

/// Adjacency view over the internal links of one crawl snapshot.
///
/// Only edges whose resolved target shares the base URL's origin are
/// registered; links to unknown (not-crawled) pages and foreign origins are
/// dropped. Self-links are ignored.
#[derive(Debug, Default)]
pub struct InternalLinkGraph {
    inbound: HashMap<u64, HashSet<u64>>,
    outbound: HashMap<u64, HashSet<u64>>,
    depths: HashMap<u64, u32>,
    paths: HashMap<u64, String>,
}

impl InternalLinkGraph {
    /// Builds the graph from a full page + link snapshot.
    pub fn build(pages: &[PageData], links: &[LinkData], base_url: &Url) -> Self {
        let mut graph = Self::default();
        let mut target_ids: HashMap<String, u64> = HashMap::new();
        let mut page_urls: HashMap<u64, Url> = HashMap::new();

        for page in pages {
            graph.depths.insert(page.page_id, page.depth);
            graph.paths.insert(page.page_id, page.path.clone());
            match Url::parse(&page.url) {
                Ok(url) => {
                    target_ids.insert(normalize_target(&url), page.page_id);
                    page_urls.insert(page.page_id, url);
                }
                Err(error) => {
                    log::debug!("skipping unparseable page URL {:?}: {error}", page.url);
                }
            }
        }

        let origin = base_url.origin();
        for link in links {
            let Some(source_url) = page_urls.get(&link.page_id) else {
                continue;
            };
            let Ok(target) = source_url.join(&link.href) else {
                log::debug!("dropping unresolvable link target {:?}", link.href);
                continue;
            };
            if target.origin() != origin {
                continue;
            }
            let Some(&target_id) = target_ids.get(&normalize_target(&target)) else {
                // Target exists but was not crawled; nothing to rank it against.
                continue;
            };
            if target_id == link.page_id {
                continue;
            }
            graph
                .inbound
                .entry(target_id)
                .or_default()
                .insert(link.page_id);
            graph
                .outbound
                .entry(link.page_id)
                .or_default()
                .insert(target_id);
        }

        graph
    }

    /// Pages linking to `page_id`.
    pub fn inbound(&self, page_id: u64) -> impl Iterator<Item = u64> + '_ {
        self.inbound.get(&page_id).into_iter().flatten().copied()
    }

    /// Number of pages linking to `page_id`.
    pub fn inbound_count(&self, page_id: u64) -> usize {
        self.inbound.get(&page_id).map_or(0, HashSet::len)
    }

    /// Number of distinct internal pages `page_id` links to.
    pub fn outbound_count(&self, page_id: u64) -> usize {
        self.outbound.get(&page_id).map_or(0, HashSet::len)
    }

    /// Crawl depth of a page, when known.
    pub fn depth_of(&self, page_id: u64) -> Option<u32> {
        self.depths.get(&page_id).copied()
    }

    /// Root-relative path of a page, when known.
    pub fn path_of(&self, page_id: u64) -> Option<&str> {
        self.paths.get(&page_id).map(String::as_str)
    }
}

/// Edge-matching key for a target URL: origin + path, trailing slash and
/// fragment/query ignored.
fn normalize_target(url: &Url) -> String {
    let path = url.path();
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    format!("{}{}", url.origin().ascii_serialization(), trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: u64, path: &str, depth: u32) -> PageData {
        PageData {
            page_id: id,
            url: format!("https://example.com{path}"),
            path: path.to_string(),
            depth,
        }
    }

    fn link(from: u64, href: &str) -> LinkData {
        LinkData {
            page_id: from,
            href: href.to_string(),
        }
    }

    fn base() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    #[test]
    fn test_internal_edges_are_registered_both_ways() {
        let pages = vec![page(1, "/", 0), page(2, "/docs", 1)];
        let links = vec![link(1, "/docs")];
        let graph = InternalLinkGraph::build(&pages, &links, &base());
        assert_eq!(graph.inbound_count(2), 1);
        assert_eq!(graph.outbound_count(1), 1);
        assert_eq!(graph.inbound(2).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_foreign_origin_links_are_dropped() {
        let pages = vec![page(1, "/", 0), page(2, "/docs", 1)];
        let links = vec![link(1, "https://other.com/docs")];
        let graph = InternalLinkGraph::build(&pages, &links, &base());
        assert_eq!(graph.inbound_count(2), 0);
    }

    #[test]
    fn test_unknown_targets_are_dropped() {
        let pages = vec![page(1, "/", 0)];
        let links = vec![link(1, "/not-crawled")];
        let graph = InternalLinkGraph::build(&pages, &links, &base());
        assert_eq!(graph.outbound_count(1), 0);
    }

    #[test]
    fn test_self_links_are_ignored() {
        let pages = vec![page(1, "/", 0)];
        let links = vec![link(1, "/")];
        let graph = InternalLinkGraph::build(&pages, &links, &base());
        assert_eq!(graph.inbound_count(1), 0);
    }

    #[test]
    fn test_trailing_slash_and_fragment_variants_match() {
        let pages = vec![page(1, "/", 0), page(2, "/docs", 1)];
        let links = vec![link(1, "/docs/#install")];
        let graph = InternalLinkGraph::build(&pages, &links, &base());
        assert_eq!(graph.inbound_count(2), 1);
    }

    #[test]
    fn test_duplicate_links_count_once() {
        let pages = vec![page(1, "/", 0), page(2, "/docs", 1)];
        let links = vec![link(1, "/docs"), link(1, "/docs"), link(1, "/docs#a")];
        let graph = InternalLinkGraph::build(&pages, &links, &base());
        assert_eq!(graph.inbound_count(2), 1);
    }

    #[test]
    fn test_absolute_same_origin_links_match() {
        let pages = vec![page(1, "/", 0), page(2, "/docs", 1)];
        let links = vec![link(1, "https://example.com/docs")];
        let graph = InternalLinkGraph::build(&pages, &links, &base());
        assert_eq!(graph.inbound_count(2), 1);
    }
}
