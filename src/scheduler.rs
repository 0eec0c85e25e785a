//! Concurrency-limited work scheduling.
//!
//! A set-based work queue plus a bounded worker pool: N tasks run
//! concurrently behind a semaphore, tasks may be spaced by a fixed start
//! interval, and a failing task is logged without aborting its siblings.

use std::collections::{HashSet, VecDeque};
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tokio::sync::Semaphore;

/// A FIFO queue that remembers everything ever enqueued.
///
/// Re-adding an item that is pending or was already dequeued is a no-op, so
/// producers can enqueue blindly while a consumer drains.
#[derive(Debug, Default)]
pub struct WorkQueue<T: Eq + Hash + Clone> {
    pending: VecDeque<T>,
    seen: HashSet<T>,
}

impl<T: Eq + Hash + Clone> WorkQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            seen: HashSet::new(),
        }
    }

    /// Adds an item unless it was already enqueued at some point.
    ///
    /// Returns whether the item was actually added.
    pub fn enqueue(&mut self, item: T) -> bool {
        if !self.seen.insert(item.clone()) {
            return false;
        }
        self.pending.push_back(item);
        true
    }

    /// Removes and returns the oldest pending item.
    pub fn dequeue(&mut self) -> Option<T> {
        self.pending.pop_front()
    }

    /// Number of items waiting to be processed.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drains every pending item in FIFO order.
    pub fn drain(&mut self) -> Vec<T> {
        self.pending.drain(..).collect()
    }
}

/// Settings for [`run_pool`].
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Maximum number of concurrently running tasks.
    pub concurrency: usize,
    /// Optional fixed delay between task starts.
    pub start_interval: Option<Duration>,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            concurrency: crate::config::SEMAPHORE_LIMIT,
            start_interval: None,
        }
    }
}

/// Runs `worker` over every item with bounded concurrency.
///
/// Results come back in input order. A task returning an error is logged
/// and yields no result; sibling tasks keep running. A panicking task is
/// likewise contained to its own slot.
pub async fn run_pool<T, R, F, Fut>(items: Vec<T>, options: &PoolOptions, worker: F) -> Vec<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Fut,
    Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(options.concurrency.max(1)));
    let mut tasks = FuturesUnordered::new();

    for (index, item) in items.into_iter().enumerate() {
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => break,
        };
        if let Some(interval) = options.start_interval {
            tokio::time::sleep(interval).await;
        }
        let future = worker(item);
        tasks.push(tokio::spawn(async move {
            let _permit = permit;
            (index, future.await)
        }));
    }

    let mut results: Vec<(usize, R)> = Vec::new();
    while let Some(joined) = tasks.next().await {
        match joined {
            Ok((index, Ok(result))) => results.push((index, result)),
            Ok((_, Err(error))) => {
                log::warn!("task failed: {error:#}");
            }
            Err(join_error) => {
                log::warn!("task panicked: {join_error:?}");
            }
        }
    }
    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}
