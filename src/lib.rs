//! TTL Cache - a thread-safe in-process key-value store
//!
//! Provides insert-if-absent, overwrite-if-present, expiration-aware reads
//! and deletes over string keys, with a uniform TTL checked lazily on read.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod workload;

pub use cache::{Cache, Cacher, CacheStats};
pub use config::Config;
pub use error::{CacheError, Result};
pub use workload::run_workload;
