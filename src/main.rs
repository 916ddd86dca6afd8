//! TTL Cache workload driver
//!
//! Runs a concurrent set/get workload against one shared cache and prints
//! the resulting report as JSON.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_cache::{run_workload, Cache, Config};

/// Main entry point for the workload driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache with the configured TTL
/// 4. Run the workload and print the report
#[tokio::main]
async fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: ttl={}s, workers={}, keys_per_worker={}",
        config.ttl_secs, config.workers, config.keys_per_worker
    );

    let cache = Arc::new(Cache::from_config(&config));
    let report = run_workload(cache, config.workers, config.keys_per_worker).await?;

    if !report.is_consistent() {
        warn!("{} reads did not match their writes", report.mismatches);
    }

    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{}", json);
    Ok(())
}
