//! Publish command: the CI entry point.

use std::path::Path;

use anyhow::Result;
use patina_publish::{Pipeline, PublishConfig};

/// Run the publish pipeline.
///
/// Fail-fast: the first failing step aborts the run and the error propagates
/// as a non-zero exit code. The remote-pull token comes from the environment
/// and is optional; everything else is fatal.
pub async fn run(config_path: &Path, dry_run: bool) -> Result<()> {
    let config = PublishConfig::load(config_path)?;
    let token = PublishConfig::token_from_env();

    let pipeline = Pipeline::publish(&config, token, dry_run)?;
    let report = pipeline.run().await?;

    tracing::info!(
        "Publish finished: {} steps completed, {} skipped in {}ms",
        report.completed,
        report.skipped,
        report.duration_ms
    );

    Ok(())
}
