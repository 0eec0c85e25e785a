//! site_audit library: link and page auditing for web sites
//!
//! This library crawls a fixed set of pages, extracts their links, runs an
//! ordered list of inspection rules against every link (with HEAD probing,
//! fix suggestions, and fuzzy "did you mean" matching), and computes an
//! internal-link authority rank for every page.
//!
//! # Example
//!
//! ```no_run
//! use site_audit::{run_audit, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("pages.txt"),
//!     site: "https://example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_audit(config).await?;
//! println!("{} links inspected, {} passed",
//!          report.summary.links, report.summary.passed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod extract;
pub mod fuzzy;
pub mod initialization;
pub mod inspect;
pub mod probe;
pub mod rank;
pub mod report;
pub mod rules;
pub mod scheduler;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel, SiteConfig};
pub use error_handling::{AuditStats, InitializationError, ProbeFailureKind, ReportError};
pub use inspect::{
    inspect, inspect_default, InspectionInput, LinkInspectionResult, RuleReport, Scope,
};
pub use probe::{ProbeOptions, ProbeResponse, ResponseCache};
pub use rank::{calculate_internal_link_ranks, LinkData, PageData, PageRank};
pub use report::AuditReport;
pub use rules::{built_in_rules, Rule};
pub use run::run_audit;

// Internal run module (contains the main audit logic)
mod run {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use anyhow::{bail, Context, Result};
    use log::{info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};
    use url::Url;

    use crate::app::{log_progress, print_rule_statistics, print_summary};
    use crate::config::{Config, SiteConfig, LOGGING_INTERVAL_SECS, MAX_LINK_LENGTH};
    use crate::error_handling::AuditStats;
    use crate::extract::{extract_page, ExtractedPage};
    use crate::fuzzy::SearchIndex;
    use crate::initialization::{init_client, init_page_client};
    use crate::inspect::{inspect, InspectionInput};
    use crate::probe::{ProbeOptions, ResponseCache};
    use crate::rank::{calculate_internal_link_ranks, LinkData, PageData};
    use crate::report::{AuditReport, RankEntry, RouteReport};
    use crate::rules::built_in_rules;
    use crate::scheduler::{run_pool, PoolOptions, WorkQueue};

    /// Per-link context captured during extraction, keyed by (page, link).
    #[derive(Debug, Clone, Default)]
    struct LinkDetails {
        text: String,
        role: String,
        ids: Vec<String>,
    }

    /// Runs a full audit with the provided configuration.
    ///
    /// Reads page URLs from the input file, fetches and extracts each page,
    /// inspects every link concurrently through the shared probe cache, and
    /// computes internal link ranks across the crawled pages.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The site URL does not parse
    /// - The input file cannot be opened
    /// - The HTTP clients cannot be initialized
    /// - A requested report file cannot be written
    ///
    /// Per-link problems never error: they surface as findings in the
    /// returned report.
    pub async fn run_audit(config: Config) -> Result<AuditReport> {
        let started = Instant::now();
        let site = SiteConfig::new(&config.site, config.trailing_slash)
            .with_context(|| format!("Invalid site URL: {}", config.site))?;

        let page_list = read_page_list(&config).await?;
        info!("auditing {} pages on {}", page_list.len(), site.url);

        let page_client = init_page_client(&config).context("Failed to initialize page client")?;
        let probe_client = init_client(&config).context("Failed to initialize probe client")?;
        let stats = Arc::new(AuditStats::new());

        let pool = PoolOptions {
            concurrency: config.max_concurrency,
            start_interval: None,
        };

        // Fetch and extract every page.
        let fetch_targets: Vec<(String, Url)> = page_list
            .iter()
            .filter_map(|line| to_page_target(&site, line))
            .collect();
        let pages: Vec<ExtractedPage> = {
            let client = Arc::clone(&page_client);
            let stats = Arc::clone(&stats);
            run_pool(fetch_targets, &pool, move |(path, url)| {
                let client = Arc::clone(&client);
                let stats = Arc::clone(&stats);
                async move {
                    let response = client
                        .get(url.clone())
                        .send()
                        .await
                        .with_context(|| format!("Failed to fetch {url}"))?;
                    let status = response.status();
                    if !status.is_success() {
                        bail!("HTTP {status} fetching {url}");
                    }
                    let html = response.text().await.context("Failed to read page body")?;
                    stats.record_page_fetched();
                    Ok(extract_page(&html, &path))
                }
            })
            .await
        };
        if pages.is_empty() {
            warn!("no pages could be fetched; nothing to audit");
        }

        // Site-wide fuzzy index over crawled page paths.
        let page_search = Arc::new(SearchIndex::new(pages.iter().map(|p| p.path.clone())));

        let cache = Arc::new(
            ResponseCache::new(
                (*probe_client).clone(),
                ProbeOptions {
                    timeout: Duration::from_millis(config.timeout_ms),
                    fetch_remote: config.fetch_remote,
                    base_url: site.url.clone(),
                    ..Default::default()
                },
            )
            .with_stats(Arc::clone(&stats)),
        );

        // Set-based work queue: one inspection per distinct (page, link).
        let mut queue: WorkQueue<(String, String)> = WorkQueue::new();
        let mut details: HashMap<(String, String), LinkDetails> = HashMap::new();
        for page in &pages {
            for link in &page.links {
                if link.href.len() > MAX_LINK_LENGTH {
                    warn!(
                        "skipping overlong link on {} ({} chars)",
                        page.path,
                        link.href.len()
                    );
                    continue;
                }
                let key = (page.path.clone(), link.href.clone());
                if queue.enqueue(key.clone()) {
                    details.insert(
                        key,
                        LinkDetails {
                            text: link.text.clone(),
                            role: link.role.clone(),
                            ids: page.ids.clone(),
                        },
                    );
                }
            }
        }
        let work_items = queue.drain();

        let inspected = Arc::new(AtomicUsize::new(0));
        let flagged = Arc::new(AtomicUsize::new(0));
        let total = Arc::new(AtomicUsize::new(work_items.len()));

        let progress_task = {
            let inspected = Arc::clone(&inspected);
            let flagged = Arc::clone(&flagged);
            let total = Arc::clone(&total);
            tokio::spawn(async move {
                let mut interval =
                    tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL_SECS));
                interval.tick().await; // first tick fires immediately
                loop {
                    interval.tick().await;
                    log_progress(started, &inspected, &flagged, Some(&total));
                }
            })
        };

        // Inspect every link concurrently through the shared cache.
        let rules = Arc::new(built_in_rules());
        let skip = Arc::new(config.skip_set());
        let details = Arc::new(details);
        let inspection_results = {
            let cache = Arc::clone(&cache);
            let stats = Arc::clone(&stats);
            let site = site.clone();
            let inspected = Arc::clone(&inspected);
            let flagged = Arc::clone(&flagged);
            run_pool(work_items, &pool, move |(path, link)| {
                let cache = Arc::clone(&cache);
                let stats = Arc::clone(&stats);
                let rules = Arc::clone(&rules);
                let skip = Arc::clone(&skip);
                let details = Arc::clone(&details);
                let page_search = Arc::clone(&page_search);
                let site = site.clone();
                let inspected = Arc::clone(&inspected);
                let flagged = Arc::clone(&flagged);
                async move {
                    let detail = details
                        .get(&(path.clone(), link.clone()))
                        .cloned()
                        .unwrap_or_default();
                    let response = cache.get(&link).await;
                    let input = InspectionInput {
                        link,
                        text_content: detail.text,
                        role: detail.role,
                        ids: detail.ids,
                        from_path: path.clone(),
                        response: Some(response),
                        site,
                        page_search: Some(page_search),
                        skip: (*skip).clone(),
                    };
                    let result = inspect(&input, &rules);
                    stats.record_result(&result);
                    inspected.fetch_add(1, Ordering::SeqCst);
                    if !result.passes() {
                        flagged.fetch_add(1, Ordering::SeqCst);
                    }
                    Ok((path, result))
                }
            })
            .await
        };
        progress_task.abort();
        log_progress(started, &inspected, &flagged, Some(&total));

        // Group results per route, preserving crawl order.
        let route_index: HashMap<String, usize> = pages
            .iter()
            .enumerate()
            .map(|(index, page)| (page.path.clone(), index))
            .collect();
        let mut routes: Vec<RouteReport> = pages
            .iter()
            .map(|page| RouteReport {
                path: page.path.clone(),
                results: Vec::new(),
            })
            .collect();
        for (path, result) in inspection_results {
            if let Some(&index) = route_index.get(&path) {
                routes[index].results.push(result);
            }
        }

        // Internal link ranking over the crawl snapshot.
        let page_data: Vec<PageData> = pages
            .iter()
            .enumerate()
            .filter_map(|(index, page)| {
                let url = site.url.join(&page.path).ok()?;
                Some(PageData {
                    page_id: index as u64 + 1,
                    url: url.to_string(),
                    path: page.path.clone(),
                    depth: path_depth(&page.path),
                })
            })
            .collect();
        let link_data: Vec<LinkData> = pages
            .iter()
            .enumerate()
            .flat_map(|(index, page)| {
                page.links.iter().map(move |link| LinkData {
                    page_id: index as u64 + 1,
                    href: link.href.clone(),
                })
            })
            .collect();
        let ranks = calculate_internal_link_ranks(&page_data, &link_data, &site.url);
        let paths_by_id: HashMap<u64, &str> = page_data
            .iter()
            .map(|p| (p.page_id, p.path.as_str()))
            .collect();
        let rank_entries: Vec<RankEntry> = ranks
            .iter()
            .map(|rank| RankEntry {
                page_id: rank.page_id,
                path: paths_by_id
                    .get(&rank.page_id)
                    .copied()
                    .unwrap_or_default()
                    .to_string(),
                rank: rank.rank,
            })
            .collect();

        let report = AuditReport::new(
            site.url.to_string(),
            routes,
            rank_entries,
            started.elapsed().as_secs_f64(),
        );

        if let Some(path) = &config.report {
            report
                .write_json(path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("report written to {}", path.display());
        }

        print_summary(&stats);
        if config.show_stats {
            print_rule_statistics(&stats);
        }

        Ok(report)
    }

    /// Reads the page list from the configured file, or stdin for `-`.
    ///
    /// Blank lines and `#` comments are skipped.
    async fn read_page_list(config: &Config) -> Result<Vec<String>> {
        let mut pages = Vec::new();
        if config.file.as_os_str() == "-" {
            info!("Reading pages from stdin");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                if let Some(page) = clean_line(&line) {
                    pages.push(page);
                }
            }
        } else {
            let file = tokio::fs::File::open(&config.file)
                .await
                .with_context(|| format!("Failed to open input file {}", config.file.display()))?;
            let mut lines = BufReader::new(file).lines();
            while let Some(line) = lines.next_line().await? {
                if let Some(page) = clean_line(&line) {
                    pages.push(page);
                }
            }
        }
        Ok(pages)
    }

    fn clean_line(line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        Some(trimmed.to_string())
    }

    /// Turns an input line (absolute URL or root-relative path) into a
    /// fetchable page target. Lines for foreign origins are dropped.
    fn to_page_target(site: &SiteConfig, line: &str) -> Option<(String, Url)> {
        let url = if line.starts_with("http://") || line.starts_with("https://") {
            Url::parse(line).ok()?
        } else {
            site.url.join(line).ok()?
        };
        match url.host_str() {
            Some(host) if site.is_same_host(host) => Some((url.path().to_string(), url)),
            _ => {
                log::warn!("skipping page outside the audited site: {line}");
                None
            }
        }
    }

    /// Crawl depth proxy: number of path segments from the site root.
    fn path_depth(path: &str) -> u32 {
        path.split('/').filter(|s| !s.is_empty()).count() as u32
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_clean_line() {
            assert_eq!(clean_line("  /about  "), Some("/about".to_string()));
            assert_eq!(clean_line(""), None);
            assert_eq!(clean_line("   "), None);
            assert_eq!(clean_line("# comment"), None);
        }

        #[test]
        fn test_to_page_target() {
            let site = SiteConfig::new("https://example.com", false).unwrap();
            let (path, url) = to_page_target(&site, "/docs").unwrap();
            assert_eq!(path, "/docs");
            assert_eq!(url.as_str(), "https://example.com/docs");

            let (path, _) = to_page_target(&site, "https://example.com/about").unwrap();
            assert_eq!(path, "/about");

            assert!(to_page_target(&site, "https://other.com/x").is_none());
        }

        #[test]
        fn test_path_depth() {
            assert_eq!(path_depth("/"), 0);
            assert_eq!(path_depth("/docs"), 1);
            assert_eq!(path_depth("/docs/install"), 2);
            assert_eq!(path_depth("/docs/install/"), 2);
        }
    }
}
