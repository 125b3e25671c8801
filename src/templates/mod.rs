//! Built-in blog templates using the Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is off: every text
//! field in the context records below is escaped when the record is built,
//! and the HTML fragments (excerpts, post bodies, page children) go in as-is.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded blog templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("head.html", include_str!("blog/head.html")),
            ("layout.html", include_str!("blog/layout.html")),
            ("bio.html", include_str!("blog/bio.html")),
            ("index.html", include_str!("blog/index.html")),
            ("404.html", include_str!("blog/404.html")),
            ("post.html", include_str!("blog/post.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

/// Everything inside `<head>`
#[derive(Debug, Clone, Serialize)]
pub struct HeadData {
    /// Full document title, `Page | Site`
    pub title: String,
    pub page_title: String,
    pub description: String,
    /// Comma separated, empty when there are none
    pub keywords: String,
    pub lang: String,
    /// Twitter handle with a leading `@`, empty when unset
    pub twitter_creator: String,
    pub og_type: &'static str,
    pub feed_href: String,
    pub feed_title: String,
    pub tracking_id: Option<String>,
}

/// An anchor to an external site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundLink {
    pub href: String,
    pub text: String,
    /// Reported to analytics on click
    pub tracked: bool,
}

/// Header and footer around every page
#[derive(Debug, Clone, Serialize)]
pub struct LayoutData {
    pub title: String,
    pub home_href: String,
    /// Root route: title is the hero `<h1>`
    pub hero: bool,
    /// `h1` or `h3`
    pub heading_tag: &'static str,
    pub accent_color: &'static str,
    pub footer_links: Vec<OutboundLink>,
    pub feed_href: String,
}

/// Author card
#[derive(Debug, Clone, Serialize)]
pub struct BioData {
    pub author: String,
    pub avatar_src: String,
    pub avatar_size: u32,
    pub links: Vec<OutboundLink>,
}

/// One entry of the post index
#[derive(Debug, Clone, Serialize)]
pub struct PostEntry {
    pub slug: String,
    pub href: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
}

/// A single post page
#[derive(Debug, Clone, Serialize)]
pub struct PostPageData {
    pub title: String,
    pub date: String,
    pub datetime: String,
    pub content: String,
    pub prev: Option<NavPost>,
    pub next: Option<NavPost>,
}

/// Link to a neighbouring post
#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub href: String,
}
