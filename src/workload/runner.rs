//! Concurrent Workload Runner
//!
//! Drives one shared cache from many workers at once: each worker writes its
//! own disjoint keys, then reads them back and checks membership.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::{Cache, Cacher};
use crate::models::WorkloadReport;

/// Per-worker operation counts.
#[derive(Debug, Default, Clone, Copy)]
struct WorkerTally {
    sets: u64,
    reads: u64,
    mismatches: u64,
}

/// Runs `workers` blocking tasks against `cache` and collects a report.
///
/// Worker `w` writes keys `w{w}-k{i}` for `i in 0..keys_per_worker` with
/// value `w * keys_per_worker + i`, then reads each one back. Operations are
/// synchronous, so workers run on tokio's blocking pool rather than the
/// async executor.
///
/// # Errors
/// Returns an error if a worker task panics or is cancelled.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(Cache::new(Duration::from_secs(300)));
/// let report = run_workload(cache, 8, 1000).await?;
/// assert!(report.is_consistent());
/// ```
pub async fn run_workload(
    cache: Arc<Cache<u64>>,
    workers: usize,
    keys_per_worker: usize,
) -> Result<WorkloadReport> {
    info!(
        "Starting workload: workers={}, keys_per_worker={}",
        workers, keys_per_worker
    );
    let started = Instant::now();

    let handles: Vec<JoinHandle<WorkerTally>> = (0..workers)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            tokio::task::spawn_blocking(move || {
                drive_worker(cache.as_ref(), worker, keys_per_worker)
            })
        })
        .collect();

    let mut total = WorkerTally::default();
    for (worker, handle) in handles.into_iter().enumerate() {
        let tally = handle
            .await
            .with_context(|| format!("workload worker {} failed", worker))?;
        total.sets += tally.sets;
        total.reads += tally.reads;
        total.mismatches += tally.mismatches;
    }

    let report = WorkloadReport {
        workers,
        sets: total.sets,
        reads: total.reads,
        mismatches: total.mismatches,
        elapsed_ms: started.elapsed().as_millis(),
        stats: cache.stats(),
        finished_at: chrono::Utc::now().to_rfc3339(),
    };

    info!(
        "Workload finished in {}ms: sets={}, reads={}, mismatches={}",
        report.elapsed_ms, report.sets, report.reads, report.mismatches
    );
    Ok(report)
}

fn drive_worker(cache: &dyn Cacher<u64>, worker: usize, keys_per_worker: usize) -> WorkerTally {
    let mut tally = WorkerTally::default();
    let base = (worker * keys_per_worker) as u64;

    for i in 0..keys_per_worker {
        match cache.set(worker_key(worker, i), base + i as u64) {
            Ok(()) => tally.sets += 1,
            Err(err) => warn!("worker {}: {}", worker, err),
        }
    }

    for i in 0..keys_per_worker {
        let key = worker_key(worker, i);
        tally.reads += 1;
        let expected = base + i as u64;
        if cache.get(&key) != Some(expected) || !cache.exist(&key) {
            tally.mismatches += 1;
        }
    }

    debug!(
        "worker {} done: sets={}, mismatches={}",
        worker, tally.sets, tally.mismatches
    );
    tally
}

fn worker_key(worker: usize, index: usize) -> String {
    format!("w{}-k{}", worker, index)
}
