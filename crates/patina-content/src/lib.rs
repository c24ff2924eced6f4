//! Content layer for patina blogs.
//!
//! Parses the YAML front matter of post Markdown files and the structured
//! home-page document, and validates a content directory ahead of a publish.
//! Rendering is delegated to the external static-site generator.

pub mod frontmatter;
pub mod homepage;
pub mod scan;

pub use frontmatter::{extract_frontmatter, FrontmatterError, PostFrontmatter};
pub use homepage::{HomePage, HomePageError, MenuItem};
pub use scan::{scan_content, ContentReport, ScanError};
