//! Internal link graph construction and page authority ranking.
//!
//! Builds a directed graph of internal links from a full crawl snapshot and
//! scores every page into `[1, 100]` from four weighted components: inbound
//! link authority, crawl depth, navigation prominence, and a content-quality
//! heuristic. The ranking is recomputed from scratch each run; there is no
//! incremental maintenance.

mod graph;
mod score;

pub use graph::{InternalLinkGraph, LinkData, PageData};
pub use score::{calculate_internal_link_ranks, PageRank};
