//! Home-page document parsing.
//!
//! The home page is an all-front-matter Markdown file (`content/_index.md`)
//! describing the page sections and navigation menus. The external generator
//! consumes it as-is; patina only validates its shape.

use serde::Deserialize;

use crate::frontmatter::{split_frontmatter, FrontmatterError};

/// Parsed home-page document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HomePage {
    /// Site title
    pub title: String,

    #[serde(default)]
    pub sections: Sections,

    #[serde(default)]
    pub menus: Menus,
}

/// Page sections rendered by the generator, top to bottom.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Sections {
    #[serde(default)]
    pub hero: Option<HeroSection>,

    #[serde(default)]
    pub about: Option<AboutSection>,

    #[serde(default, rename = "recent-posts")]
    pub recent_posts: Option<RecentPostsSection>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HeroSection {
    pub heading: String,

    #[serde(default)]
    pub tagline: Option<String>,

    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AboutSection {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecentPostsSection {
    pub heading: String,

    /// How many posts to list
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    5
}

/// Navigation menus.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Menus {
    #[serde(default)]
    pub main: Vec<MenuItem>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub url: String,

    /// Position in the menu (lower = first)
    #[serde(default)]
    pub weight: i32,
}

impl HomePage {
    /// Parse a home-page document from its Markdown source.
    ///
    /// Menu items are returned sorted by weight.
    pub fn parse(source: &str) -> Result<Self, HomePageError> {
        let (yaml, _body) = split_frontmatter(source)?.ok_or(HomePageError::Missing)?;

        let mut page: HomePage =
            serde_yaml::from_str(yaml).map_err(|e| HomePageError::InvalidYaml(e.to_string()))?;

        page.menus.main.sort_by_key(|item| item.weight);

        Ok(page)
    }
}

/// Errors that can occur when parsing the home-page document.
#[derive(Debug, thiserror::Error)]
pub enum HomePageError {
    #[error("Home page document has no front matter block")]
    Missing,

    #[error(transparent)]
    Frontmatter(#[from] FrontmatterError),

    #[error("Invalid YAML in home page document: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HOMEPAGE: &str = r#"---
title: A Quiet Corner
sections:
  hero:
    heading: Hello there
    tagline: Notes on software and everything else
    image: /images/hero.webp
  about:
    heading: About me
    body: I write about systems, gardens, and the things between.
  recent-posts:
    heading: Recent writing
    count: 3
menus:
  main:
    - name: Archive
      url: /posts/
      weight: 20
    - name: Home
      url: /
      weight: 10
    - name: About
      url: /about/
      weight: 30
---
"#;

    #[test]
    fn parses_full_document() {
        let page = HomePage::parse(HOMEPAGE).unwrap();

        assert_eq!(page.title, "A Quiet Corner");

        let hero = page.sections.hero.unwrap();
        assert_eq!(hero.heading, "Hello there");
        assert_eq!(hero.image, Some("/images/hero.webp".to_string()));

        let recent = page.sections.recent_posts.unwrap();
        assert_eq!(recent.count, 3);
    }

    #[test]
    fn sorts_menu_by_weight() {
        let page = HomePage::parse(HOMEPAGE).unwrap();

        let names: Vec<&str> = page.menus.main.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Archive", "About"]);
    }

    #[test]
    fn recent_posts_count_defaults() {
        let source = "---\ntitle: Site\nsections:\n  recent-posts:\n    heading: Latest\n---\n";

        let page = HomePage::parse(source).unwrap();

        assert_eq!(page.sections.recent_posts.unwrap().count, 5);
    }

    #[test]
    fn errors_without_frontmatter() {
        let result = HomePage::parse("# Not a home page\n");

        assert!(matches!(result, Err(HomePageError::Missing)));
    }

    #[test]
    fn sections_are_optional() {
        let page = HomePage::parse("---\ntitle: Bare\n---\n").unwrap();

        assert!(page.sections.hero.is_none());
        assert!(page.menus.main.is_empty());
    }
}
