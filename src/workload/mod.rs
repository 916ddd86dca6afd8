//! Workload Module
//!
//! Concurrent load driver used by the binary to exercise a shared cache.
//!
//! # Drivers
//! - Disjoint-key writers: each worker sets its own keys and reads them back

mod runner;

pub use runner::run_workload;
