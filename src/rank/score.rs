//! Multi-factor page authority scoring and rank normalization.

use url::Url;

use super::graph::{InternalLinkGraph, LinkData, PageData};

// Raw score component bounds
const INBOUND_SCORE_CAP: f64 = 50.0;
const DEPTH_SCORE_MAX: f64 = 25.0;
const NAV_SCORE_CAP: f64 = 15.0;
const CONTENT_SCORE_MAX: f64 = 10.0;

// Inbound authority weights
const DEPTH_WEIGHT_FLOOR: f64 = 0.2;
const DEPTH_WEIGHT_STEP: f64 = 0.2;
const LINK_WEIGHT_CAP: f64 = 2.0;
const AUTHORITY_SCALE: f64 = 8.0;

// Navigation prominence per linking page, by its crawl depth
const NAV_WEIGHT_DEPTH0: f64 = 8.0;
const NAV_WEIGHT_DEPTH1: f64 = 4.0;
const NAV_WEIGHT_DEPTH2: f64 = 2.0;

// Content-quality adjustments
const CONTENT_ARTICLE_BONUS: f64 = 3.0;
const CONTENT_TAXONOMY_PENALTY: f64 = 2.0;
const CONTENT_LONG_PATH_PENALTY: f64 = 1.0;
const LONG_PATH_CHARS: usize = 100;

// Normalization
const PERCENTILE_BONUS_MAX: f64 = 20.0;
const HOME_RANK_FLOOR: f64 = 85.0;
const RANK_MIN: f64 = 1.0;
const RANK_MAX: f64 = 100.0;
const TOP_RANK_SHARE: f64 = 0.05;

/// Final authority rank for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRank {
    /// Page the rank belongs to.
    pub page_id: u64,
    /// Authority/prominence score in `[1, 100]`.
    pub rank: u32,
}

/// Computes a `[1, 100]` authority rank for every crawled page.
///
/// Deterministic for a given snapshot: pages are scored independently, then
/// normalized against the whole population (percentile bonus, home-page
/// floor, top-5% ceiling on perfect scores).
pub fn calculate_internal_link_ranks(
    pages: &[PageData],
    links: &[LinkData],
    base_url: &Url,
) -> Vec<PageRank> {
    if pages.is_empty() {
        return Vec::new();
    }

    let graph = InternalLinkGraph::build(pages, links, base_url);
    let max_depth = pages.iter().map(|p| p.depth).max().unwrap_or(0);

    let mut scored: Vec<(&PageData, f64)> = pages
        .iter()
        .map(|page| {
            let raw = inbound_authority(&graph, page.page_id)
                + depth_score(page.depth, max_depth)
                + nav_prominence(&graph, page.page_id)
                + content_quality(&page.path);
            log::trace!("raw score for {}: {raw:.2}", page.path);
            (page, raw)
        })
        .collect();

    // Descending by raw score; page id breaks ties so reruns agree.
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.page_id.cmp(&b.0.page_id))
    });

    let total = scored.len();
    let top_rank_threshold = (total as f64 * TOP_RANK_SHARE).ceil() as usize;

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (page, raw))| {
            let percentile = (total - index) as f64 / total as f64;
            let mut value = raw + percentile.powi(2) * PERCENTILE_BONUS_MAX;
            if page.path == "/" || page.path.is_empty() {
                value = value.max(HOME_RANK_FLOOR);
            }
            let mut rank = value.round().clamp(RANK_MIN, RANK_MAX);
            // Only the top 5% of pages may hold a perfect score.
            if rank == RANK_MAX && index >= top_rank_threshold {
                let spread = (top_rank_threshold as f64 - index as f64)
                    / top_rank_threshold as f64
                    * 4.0;
                rank = (95.0 + spread.floor()).max(RANK_MIN);
            }
            PageRank {
                page_id: page.page_id,
                rank: rank as u32,
            }
        })
        .collect()
}

/// Inbound-link authority (0-50).
///
/// Each linking page contributes by how shallow it sits and how well linked
/// it is itself; the square root compresses large inbound sets.
fn inbound_authority(graph: &InternalLinkGraph, page_id: u64) -> f64 {
    let mut sum = 0.0;
    for linker in graph.inbound(page_id) {
        let linker_depth = graph.depth_of(linker).unwrap_or(0) as f64;
        let depth_weight = (1.0 - linker_depth * DEPTH_WEIGHT_STEP).max(DEPTH_WEIGHT_FLOOR);
        let linker_inbound = graph.inbound_count(linker) as f64;
        let link_weight = (1.0 + (1.0 + linker_inbound).ln() / 5.0).min(LINK_WEIGHT_CAP);
        sum += depth_weight * link_weight;
    }
    if sum == 0.0 {
        return 0.0;
    }
    (sum.sqrt() * AUTHORITY_SCALE).min(INBOUND_SCORE_CAP)
}

/// Depth score (0-25): shallower pages score higher; a single-level site
/// scores everything at the maximum.
fn depth_score(depth: u32, max_depth: u32) -> f64 {
    if max_depth == 0 {
        return DEPTH_SCORE_MAX;
    }
    (1.0 - depth as f64 / max_depth as f64) * DEPTH_SCORE_MAX
}

/// Navigation prominence (0-15): being linked from pages near the root.
fn nav_prominence(graph: &InternalLinkGraph, page_id: u64) -> f64 {
    let mut sum = 0.0;
    for linker in graph.inbound(page_id) {
        sum += match graph.depth_of(linker).unwrap_or(u32::MAX) {
            0 => NAV_WEIGHT_DEPTH0,
            1 => NAV_WEIGHT_DEPTH1,
            2 => NAV_WEIGHT_DEPTH2,
            _ => 0.0,
        };
    }
    sum.min(NAV_SCORE_CAP)
}

/// Content-quality heuristic (0-10) from the path shape alone.
fn content_quality(path: &str) -> f64 {
    let mut score = 0.0;
    if path.contains("/blog/") || path.contains("/article/") {
        score += CONTENT_ARTICLE_BONUS;
    }
    if path.contains("/tag/") || path.contains("/category/") {
        score -= CONTENT_TAXONOMY_PENALTY;
    }
    if path.len() > LONG_PATH_CHARS {
        score -= CONTENT_LONG_PATH_PENALTY;
    }
    score.clamp(0.0, CONTENT_SCORE_MAX)
}
