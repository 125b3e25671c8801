//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Site
title: My Blog
author: ''
description: ''
keywords: []
language: en

# URL
url: http://localhost:8000
path_prefix: ''

# Author
social:
  twitter: ''
  github: ''
avatar: assets/me.png

# Directory
source_dir: content
public_dir: public
static_dir: static

# Writing
date_format: MMMM DD, YYYY
excerpt_length: 140
excerpt_separator: '<!-- end -->'
render_drafts: false

# Extensions
feed:
  enable: true
  path: rss.xml
analytics:
  tracking_id: ~
"#;

const HELLO_WORLD: &str = r#"---
title: Hello World
date: "2019-01-01T12:00:00.000Z"
---

This is my first post on my new blog.

<!-- end -->

Everything after the separator only shows on the post page.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{:?} already contains a blog", target_dir);
    }

    fs::create_dir_all(target_dir.join("content/blog/hello-world"))?;
    fs::create_dir_all(target_dir.join("content/assets"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    fs::write(&config_path, DEFAULT_CONFIG)?;
    fs::write(
        target_dir.join("content/blog/hello-world/index.md"),
        HELLO_WORLD,
    )?;

    tracing::info!("Initialized blog in {:?}", target_dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blog;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_load() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "My Blog");
        assert!(blog.config.analytics.tracking_id.is_none());

        let data = blog.load().unwrap();
        assert_eq!(data.posts.len(), 1);
        assert_eq!(data.posts[0].slug, "/hello-world/");
        assert!(data.posts[0].excerpt.contains("first post"));
        assert!(!data.posts[0].excerpt.contains("separator"));
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
