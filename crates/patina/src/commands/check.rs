//! Content validation command.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use patina_content::scan_content;
use patina_publish::PublishConfig;

/// Run the check command.
pub fn run(config_path: &Path, dir: Option<PathBuf>) -> Result<()> {
    let config = PublishConfig::load(config_path)?;
    let content_dir = dir.unwrap_or(config.site.content_dir);

    tracing::info!("Checking content in {}", content_dir.display());

    let report = scan_content(&content_dir)?;

    for (path, reason) in &report.errors {
        tracing::error!("{}: {}", path.display(), reason);
    }

    tracing::info!(
        "{} posts ({} drafts), home page {}",
        report.posts,
        report.drafts,
        if report.homepage { "ok" } else { "missing" }
    );

    if !report.is_valid() {
        bail!("{} content file(s) failed validation", report.errors.len());
    }

    println!("content ok");
    Ok(())
}
