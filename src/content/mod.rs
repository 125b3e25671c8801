//! Content module - loads posts and derives the records pages render from

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use loader::{ContentLoader, SiteData};
pub use markdown::MarkdownRenderer;
pub use post::{Location, Post, PostSummary};
