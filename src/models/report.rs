//! Workload report DTO
//!
//! Summary of a concurrent workload run, serialized by the binary.

use serde::Serialize;

use crate::cache::CacheStats;

/// Outcome of [`crate::workload::run_workload`].
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadReport {
    /// Number of workers that ran
    pub workers: usize,
    /// Successful `set` calls across all workers
    pub sets: u64,
    /// `get` calls across all workers
    pub reads: u64,
    /// Reads that returned nothing or a value other than the one written
    pub mismatches: u64,
    /// Wall time of the run in milliseconds
    pub elapsed_ms: u128,
    /// Cache statistics at the end of the run
    pub stats: CacheStats,
    /// RFC3339 timestamp of when the run finished
    pub finished_at: String,
}

impl WorkloadReport {
    /// Returns true when every read saw the value its worker wrote.
    pub fn is_consistent(&self) -> bool {
        self.mismatches == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialize() {
        let report = WorkloadReport {
            workers: 2,
            sets: 10,
            reads: 10,
            mismatches: 0,
            elapsed_ms: 3,
            stats: CacheStats {
                hits: 10,
                misses: 0,
                total_entries: 10,
            },
            finished_at: chrono::Utc::now().to_rfc3339(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"sets\":10"));
        assert!(json.contains("\"hits\":10"));
        assert!(report.is_consistent());
    }
}
