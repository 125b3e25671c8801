//! Content loader - resolves every record the pages need before rendering

use anyhow::{bail, Result};
use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post, PostSummary};
use crate::config::SiteMetadata;
use crate::helpers::{collapse_whitespace, prune, strip_html};
use crate::Blog;

/// Directory under the source dir holding posts
pub const POSTS_DIR: &str = "blog";

/// Routes owned by generated pages; a post may not take them
pub const RESERVED_SLUGS: &[&str] = &["/", "/404/"];

/// Everything a build renders from, loaded up front
#[derive(Debug, Clone)]
pub struct SiteData {
    pub metadata: SiteMetadata,
    /// Sorted by date, newest first
    pub posts: Vec<Post>,
}

impl SiteData {
    /// Index summaries in post order
    pub fn summaries(&self, date_format: &str) -> Vec<PostSummary> {
        self.posts.iter().map(|p| p.summary(date_format)).collect()
    }
}

/// Loads content from the source directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            blog,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load site metadata and all posts
    pub fn load(&self) -> Result<SiteData> {
        Ok(SiteData {
            metadata: self.blog.config.metadata(),
            posts: self.load_posts()?,
        })
    }

    /// Load all posts from source/blog, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = self.blog.source_dir.join(POSTS_DIR);
        if !posts_dir.exists() {
            tracing::warn!("No posts directory at {:?}", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts: Vec<Post> = Vec::new();
        let mut seen = HashSet::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_post(path, &posts_dir) {
                Ok(post) if post.draft && !self.blog.config.render_drafts => {
                    tracing::debug!("Skipping draft {:?}", path);
                }
                Ok(post) if !seen.insert(post.slug.clone()) => {
                    tracing::warn!("Skipping {:?}: route {} is already taken", path, post.slug);
                }
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        // Newest first; slug breaks ties so output is stable
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path, posts_dir: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content);

        let date = match fm.parse_date() {
            Some(date) => date,
            None => fs::metadata(path)?
                .modified()
                .map(chrono::DateTime::<Local>::from)
                .unwrap_or_else(|_| Local::now()),
        };

        let relative = path.strip_prefix(posts_dir).unwrap_or(path);
        let slug = slug_from_path(relative);
        if RESERVED_SLUGS.contains(&slug.as_str()) {
            bail!("route {} is reserved for a generated page", slug);
        }

        let config = &self.blog.config;
        let (excerpt_md, full_md) = MarkdownRenderer::split_excerpt(body, &config.excerpt_separator);
        let content_html = self.renderer.render(&full_md)?;

        let excerpt = match (&fm.description, &excerpt_md) {
            (Some(description), _) if !description.trim().is_empty() => description.clone(),
            (_, Some(excerpt_md)) => self.renderer.render(excerpt_md)?,
            _ => prune(
                &collapse_whitespace(&strip_html(&content_html)),
                config.excerpt_length,
                "…",
            ),
        };

        let mut post = Post::new(slug, date);
        post.title = fm.title.filter(|t| !t.trim().is_empty());
        post.description = fm.description;
        post.excerpt = excerpt;
        post.content = content_html;
        post.draft = fm.draft;

        Ok(post)
    }
}

/// Route for a post file relative to the posts directory.
/// `hello-world/index.md` and `hello-world.md` both map to `/hello-world/`.
pub fn slug_from_path(relative: &Path) -> String {
    let mut parts: Vec<String> = relative
        .parent()
        .map(|p| {
            p.components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();

    if let Some(stem) = relative.file_stem().and_then(|s| s.to_str()) {
        if stem != "index" {
            parts.push(stem.to_string());
        }
    }

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", parts.join("/"))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn blog_in(dir: &TempDir, config: SiteConfig) -> Blog {
        Blog::with_config(dir.path(), config)
    }

    #[test]
    fn test_slug_from_path() {
        assert_eq!(slug_from_path(&PathBuf::from("hello-world/index.md")), "/hello-world/");
        assert_eq!(slug_from_path(&PathBuf::from("notes.md")), "/notes/");
        assert_eq!(slug_from_path(&PathBuf::from("2019/recap.md")), "/2019/recap/");
        assert_eq!(slug_from_path(&PathBuf::from("index.md")), "/");
    }

    #[test]
    fn test_load_posts_sorted_newest_first() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("content/blog");
        write(&posts_dir, "old/index.md", "---\ntitle: Old\ndate: 2018-01-01\n---\nOld body");
        write(&posts_dir, "new/index.md", "---\ntitle: New\ndate: 2019-06-01\n---\nNew body");
        write(&posts_dir, "mid.md", "---\ntitle: Mid\ndate: 2018-09-01\n---\nMid body");
        write(&posts_dir, "mid/photo.png", "not markdown");

        let blog = blog_in(&dir, SiteConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/new/", "/mid/", "/old/"]);
    }

    #[test]
    fn test_reserved_routes_are_skipped() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("content/blog");
        write(&posts_dir, "index.md", "---\ntitle: Home?\ndate: 2019-01-02\n---\nBody");
        write(&posts_dir, "404.md", "---\ntitle: Lost\ndate: 2019-01-03\n---\nBody");
        write(&posts_dir, "other.md", "---\ntitle: Other\ndate: 2019-01-01\n---\nBody");

        let blog = blog_in(&dir, SiteConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/other/"]);
    }

    #[test]
    fn test_duplicate_routes_keep_first_file() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("content/blog");
        write(&posts_dir, "notes/index.md", "---\ntitle: Folder\ndate: 2019-01-01\n---\nA");
        write(&posts_dir, "notes.md", "---\ntitle: File\ndate: 2019-02-01\n---\nB");

        let blog = blog_in(&dir, SiteConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "/notes/");
        assert_eq!(posts[0].display_title(), "Folder");
    }

    #[test]
    fn test_drafts_are_skipped_unless_enabled() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("content/blog");
        write(&posts_dir, "wip.md", "---\ntitle: WIP\ndate: 2019-01-01\ndraft: true\n---\nSoon");
        write(&posts_dir, "done.md", "---\ntitle: Done\ndate: 2019-01-02\n---\nDone");

        let blog = blog_in(&dir, SiteConfig::default());
        assert_eq!(ContentLoader::new(&blog).load_posts().unwrap().len(), 1);

        let config = SiteConfig {
            render_drafts: true,
            ..Default::default()
        };
        let blog = blog_in(&dir, config);
        assert_eq!(ContentLoader::new(&blog).load_posts().unwrap().len(), 2);
    }

    #[test]
    fn test_excerpt_priority() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("content/blog");
        write(
            &posts_dir,
            "described.md",
            "---\ndate: 2019-01-03\ndescription: Hand written\n---\nBody text",
        );
        write(
            &posts_dir,
            "separated.md",
            "---\ndate: 2019-01-02\n---\nIntro **bold**\n<!-- end -->\nRest of it",
        );
        write(
            &posts_dir,
            "pruned.md",
            "---\ndate: 2019-01-01\n---\nOne two three four five six seven",
        );

        let config = SiteConfig {
            excerpt_length: 12,
            ..Default::default()
        };
        let blog = blog_in(&dir, config);
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts[0].excerpt, "Hand written");
        assert!(posts[1].excerpt.contains("<strong>bold</strong>"));
        assert!(!posts[1].excerpt.contains("Rest of it"));
        assert!(posts[1].content.contains("Rest of it"));
        assert_eq!(posts[2].excerpt, "One two…");
    }

    #[test]
    fn test_missing_title_stays_absent() {
        let dir = TempDir::new().unwrap();
        write(
            &dir.path().join("content/blog"),
            "untitled/index.md",
            "---\ndate: 2019-01-01\n---\nBody",
        );

        let blog = blog_in(&dir, SiteConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert!(posts[0].title.is_none());
        assert_eq!(posts[0].display_title(), "/untitled/");
    }

    #[test]
    fn test_load_site_data() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            title: "Josh Jahans".to_string(),
            ..Default::default()
        };
        let blog = blog_in(&dir, config);
        let data = ContentLoader::new(&blog).load().unwrap();
        assert_eq!(data.metadata.title, "Josh Jahans");
        assert!(data.posts.is_empty());
    }
}
