//! Progress logging during an audit run.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::info;

/// Logs audit progress: links inspected, failures, and throughput.
///
/// Called periodically while inspections run and once at the end.
pub fn log_progress(
    start_time: Instant,
    inspected: &AtomicUsize,
    failed: &AtomicUsize,
    total: Option<&AtomicUsize>,
) {
    let elapsed = start_time.elapsed().as_secs_f64();
    let inspected_count = inspected.load(Ordering::SeqCst);
    let failed_count = failed.load(Ordering::SeqCst);
    let rate = if elapsed > 0.0 {
        inspected_count as f64 / elapsed
    } else {
        0.0
    };

    match total.map(|t| t.load(Ordering::SeqCst)) {
        Some(total_count) if total_count > 0 => {
            info!(
                "inspected {inspected_count}/{total_count} links ({failed_count} with findings) \
                 in {elapsed:.1}s ({rate:.1}/s)"
            );
        }
        _ => {
            info!(
                "inspected {inspected_count} links ({failed_count} with findings) \
                 in {elapsed:.1}s ({rate:.1}/s)"
            );
        }
    }
}
