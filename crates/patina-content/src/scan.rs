//! Content directory validation.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::frontmatter::extract_frontmatter;
use crate::homepage::HomePage;

/// Result of scanning a content directory.
#[derive(Debug, Default)]
pub struct ContentReport {
    /// Posts with valid front matter
    pub posts: usize,

    /// Posts marked as drafts (subset of `posts`)
    pub drafts: usize,

    /// Whether a home-page document was found and parsed
    pub homepage: bool,

    /// Files that failed validation, with the reason
    pub errors: Vec<(PathBuf, String)>,
}

impl ContentReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Errors that can occur while scanning.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Content directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read content directory: {0}")]
    Read(#[from] walkdir::Error),
}

/// Walk a content directory and validate every Markdown file.
///
/// `_index.md` files are validated against the home-page schema; everything
/// else against the post schema. Unreadable or malformed files land in the
/// report's error list rather than aborting the scan.
pub fn scan_content(dir: &Path) -> Result<ContentReport, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }

    let mut report = ContentReport::default();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                report.errors.push((path.to_path_buf(), e.to_string()));
                continue;
            }
        };

        if path.file_name().is_some_and(|name| name == "_index.md") {
            match HomePage::parse(&source) {
                Ok(_) => report.homepage = true,
                Err(e) => report.errors.push((path.to_path_buf(), e.to_string())),
            }
            continue;
        }

        match extract_frontmatter(&source) {
            Ok((Some(fm), _)) => {
                report.posts += 1;
                if fm.draft {
                    report.drafts += 1;
                    tracing::debug!(path = %path.display(), "Skipping draft");
                }
            }
            Ok((None, _)) => {
                report
                    .errors
                    .push((path.to_path_buf(), "missing front matter".to_string()));
            }
            Err(e) => report.errors.push((path.to_path_buf(), e.to_string())),
        }
    }

    Ok(report)
}
