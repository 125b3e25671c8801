//! Post models and the render-facing records derived from them

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::helpers::format_date;

/// A blog post as loaded from disk
#[derive(Debug, Clone)]
pub struct Post {
    /// Title from front-matter, if any
    pub title: Option<String>,

    /// Route of the post, e.g. `/hello-world/`
    pub slug: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Description from front-matter
    pub description: Option<String>,

    /// Excerpt as an HTML fragment
    pub excerpt: String,

    /// Rendered HTML content
    pub content: String,

    pub draft: bool,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(slug: String, date: DateTime<Local>) -> Self {
        Self {
            title: None,
            slug,
            date,
            description: None,
            excerpt: String::new(),
            content: String::new(),
            draft: false,
        }
    }

    /// The visible title, falling back to the slug
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }

    /// Summary record shown in the post index
    pub fn summary(&self, date_format: &str) -> PostSummary {
        PostSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            date: format_date(&self.date, date_format),
            excerpt: self.excerpt.clone(),
        }
    }
}

/// One entry of the post index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    /// Unique route, also the list key
    pub slug: String,
    pub title: Option<String>,
    /// Pre-formatted date
    pub date: String,
    /// Pre-rendered HTML fragment, inserted as-is
    pub excerpt: String,
}

impl PostSummary {
    /// The visible title, falling back to the slug
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }
}

/// Where a page is being rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub pathname: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }
}
