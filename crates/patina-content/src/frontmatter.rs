//! Front matter extraction and parsing for post files.

use chrono::NaiveDate;
use serde::Deserialize;

/// Parsed front matter from a post Markdown file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PostFrontmatter {
    /// Post title (required)
    pub title: String,

    /// Publication date (required)
    pub date: NaiveDate,

    /// Post description for SEO
    #[serde(default)]
    pub description: Option<String>,

    /// Canonical URL when the post was first published elsewhere
    #[serde(default, rename = "canonicalURL")]
    pub canonical_url: Option<String>,

    /// Whether the post is excluded from publishing
    #[serde(default)]
    pub draft: bool,
}

/// Extract front matter from Markdown content.
///
/// Returns the parsed front matter and the remaining body after the
/// front matter block. A file without a block is valid and returns `None`.
pub fn extract_frontmatter(
    source: &str,
) -> Result<(Option<PostFrontmatter>, &str), FrontmatterError> {
    let (yaml, remaining) = match split_frontmatter(source)? {
        Some(parts) => parts,
        None => return Ok((None, source)),
    };

    let frontmatter: PostFrontmatter =
        serde_yaml::from_str(yaml).map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((Some(frontmatter), remaining))
}

/// Split a document into its raw YAML block and the remaining body.
///
/// Shared with the home-page parser, which applies a different schema to the
/// same delimiter format.
pub(crate) fn split_frontmatter(source: &str) -> Result<Option<(&str, &str)>, FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok(None);
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml = after_open[..close_pos].trim();
    let remaining = after_open[close_pos + 4..].trim_start();

    Ok(Some((yaml, remaining)))
}

/// Errors that can occur when parsing front matter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed front matter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in front matter: {0}")]
    InvalidYaml(String),
}
