//! Data Models Module
//!
//! Serializable summaries produced by the workload driver.

mod report;

pub use report::WorkloadReport;
