//! Generator module - writes the static site from pre-loaded data

mod feed;

use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::content::{Location, SiteData};
use crate::helpers::url_for;
use crate::pages::{self, SiteContext};
use crate::templates::TemplateRenderer;
use crate::Blog;

pub use feed::build_feed;

/// Directory under the source dir copied verbatim to the output
pub const ASSETS_DIR: &str = "assets";

/// Static site generator
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            blog: blog.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, data: &SiteData) -> Result<()> {
        fs::create_dir_all(&self.blog.public_dir)?;

        self.copy_assets()?;

        let site = SiteContext::new(&self.renderer, &self.blog.config, &data.metadata);

        self.generate_index(&site, data)?;
        self.generate_not_found(&site)?;
        self.generate_posts(&site, data)?;

        if self.blog.config.feed.enable {
            let xml = build_feed(&self.blog.config, &data.metadata, &data.posts)?;
            let path = self.feed_output_path();
            write_file(&path, &xml)?;
            tracing::info!("Generated {}", self.blog.config.feed.path);
        }

        Ok(())
    }

    fn generate_index(&self, site: &SiteContext, data: &SiteData) -> Result<()> {
        let summaries = data.summaries(&self.blog.config.date_format);
        let location = Location::new(self.blog.config.root_path());
        let html = pages::index::render(site, &location, &summaries)?;

        write_file(&self.blog.public_dir.join("index.html"), &html)?;
        tracing::info!("Generated index with {} posts", summaries.len());
        Ok(())
    }

    fn generate_not_found(&self, site: &SiteContext) -> Result<()> {
        let location = Location::new(url_for(&self.blog.config, "404.html"));
        let html = pages::not_found::render(site, &location)?;

        // Servers look for /404.html, direct visits land on /404/
        write_file(&self.blog.public_dir.join("404.html"), &html)?;
        write_file(&self.blog.public_dir.join("404").join("index.html"), &html)?;
        Ok(())
    }

    fn generate_posts(&self, site: &SiteContext, data: &SiteData) -> Result<()> {
        let posts = &data.posts;

        for (i, post) in posts.iter().enumerate() {
            // Posts are newest first
            let older = posts.get(i + 1);
            let newer = i.checked_sub(1).and_then(|j| posts.get(j));

            let location = Location::new(url_for(&self.blog.config, &post.slug));
            let html = pages::post::render(site, &location, post, older, newer)?;

            let output_path = self.post_output_path(&post.slug);
            write_file(&output_path, &html)?;
            tracing::debug!("Generated post: {:?}", output_path);
        }

        tracing::info!("Generated {} post pages", posts.len());
        Ok(())
    }

    fn feed_output_path(&self) -> PathBuf {
        self.blog
            .public_dir
            .join(self.blog.config.feed.path.trim_start_matches('/'))
    }

    fn post_output_path(&self, slug: &str) -> PathBuf {
        // Strip leading slash from slug to avoid creating absolute paths
        self.blog
            .public_dir
            .join(slug.trim_matches('/'))
            .join("index.html")
    }

    /// Copy `static/` and the source assets directory into the output
    fn copy_assets(&self) -> Result<()> {
        let static_dir = self.blog.base_dir.join(&self.blog.config.static_dir);
        copy_tree(&static_dir, &self.blog.public_dir)?;

        let assets_dir = self.blog.source_dir.join(ASSETS_DIR);
        copy_tree(&assets_dir, &self.blog.public_dir.join(ASSETS_DIR))?;

        Ok(())
    }
}

/// Write a file, creating parent directories as needed
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create dir {:?}", parent))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

/// Recursively copy files from `from` into `to`. A missing source is fine.
fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Ok(());
    }

    let mut copied = 0usize;
    for entry in WalkDir::new(from)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(from)?;
        let dest = to.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest).with_context(|| format!("Failed to copy {:?}", path))?;
        copied += 1;
    }

    tracing::debug!("Copied {} files from {:?}", copied, from);
    Ok(())
}
