//! Initialize a blog in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing patina...");

    let content_dir = Path::new("content");

    // Check if content already exists
    if content_dir.exists() {
        if !yes {
            tracing::warn!("content/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(content_dir).context("Failed to create content directory")?;
    }

    // Create default config
    let config_path = Path::new("patina.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write patina.toml")?;
        tracing::info!("Created patina.toml");
    }

    // Create home-page document
    let index_path = content_dir.join("_index.md");
    if !index_path.exists() || yes {
        fs::write(&index_path, DEFAULT_HOMEPAGE).context("Failed to write _index.md")?;
        tracing::info!("Created content/_index.md");
    }

    // Create posts directory with a sample post
    let posts_dir = content_dir.join("posts");
    if !posts_dir.exists() {
        fs::create_dir_all(&posts_dir).context("Failed to create posts directory")?;
    }

    let sample_path = posts_dir.join("hello-world.md");
    if !sample_path.exists() || yes {
        fs::write(&sample_path, DEFAULT_POST).context("Failed to write hello-world.md")?;
        tracing::info!("Created content/posts/hello-world.md");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'patina check' to validate your content.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Patina Configuration

[site]
# Content source directory
content_dir = "content"

# Command that runs the external static-site generator
build_command = "hugo --minify"

[webhooks]
# Project-management webhook endpoint
base_url = "https://hooks.example.com"

# Project identifier keyed into webhook URLs
project = "blog"

[remote]
# Remote content API (requires PATINA_API_TOKEN)
api_base = "https://content.example.com/api"

# Where the pulled home-page document lands
homepage_path = "content/_index.md"
"#;

const DEFAULT_HOMEPAGE: &str = r#"---
title: My Blog
sections:
  hero:
    heading: Hello, world
    tagline: Notes from a work in progress
  about:
    heading: About
    body: A few words about who writes here and why.
  recent-posts:
    heading: Recent writing
    count: 5
menus:
  main:
    - name: Home
      url: /
      weight: 10
    - name: Posts
      url: /posts/
      weight: 20
---
"#;

const DEFAULT_POST: &str = r#"---
title: Hello, world
date: 2024-01-01
description: The first post on this blog.
---

# Hello, world

Write your posts as Markdown files under `content/posts/`. Each file needs
front matter with at least a `title` and a `date`:

```markdown
---
title: Post title
date: 2024-01-01
description: Optional summary for feeds and SEO.
canonicalURL: https://elsewhere.example.com/original/
---
```

Run `patina check` to validate everything, then `patina publish` to trigger
the site build.
"#;
