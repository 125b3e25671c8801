//! Single post page

use anyhow::Result;

use super::{PageMeta, SiteContext};
use crate::content::{Location, Post};
use crate::helpers::{collapse_whitespace, date_xml, format_date, html_escape, strip_html, url_for};
use crate::templates::{NavPost, PostPageData};

/// Render a post. `older` and `newer` are its neighbours in date order.
pub fn render(
    site: &SiteContext,
    location: &Location,
    post: &Post,
    older: Option<&Post>,
    newer: Option<&Post>,
) -> Result<String> {
    let nav = |p: &Post| NavPost {
        title: html_escape(p.display_title()),
        href: html_escape(&url_for(site.config, &p.slug)),
    };

    let data = PostPageData {
        title: html_escape(post.display_title()),
        date: html_escape(&format_date(&post.date, &site.config.date_format)),
        datetime: date_xml(&post.date),
        content: post.content.clone(),
        prev: older.map(nav),
        next: newer.map(nav),
    };

    let description = match &post.description {
        Some(description) => description.clone(),
        None => collapse_whitespace(&strip_html(&post.excerpt)),
    };

    let meta = PageMeta {
        title: post.display_title(),
        description: Some(description.as_str()),
        keywords: &site.config.keywords,
        og_type: "article",
    };

    let mut context = site.page_context(location, &meta);
    context.insert("bio", &site.bio());
    context.insert("post", &data);

    site.renderer.render("post.html", &context)
}
