//! Home page: bio card followed by every post summary

use anyhow::Result;

use super::{PageMeta, SiteContext};
use crate::content::{Location, PostSummary};
use crate::helpers::{html_escape, url_for};
use crate::templates::PostEntry;

/// Render the post index. Summaries are shown in the order given.
pub fn render(site: &SiteContext, location: &Location, posts: &[PostSummary]) -> Result<String> {
    let entries: Vec<PostEntry> = posts
        .iter()
        .map(|post| PostEntry {
            slug: html_escape(&post.slug),
            href: html_escape(&url_for(site.config, &post.slug)),
            title: html_escape(post.display_title()),
            date: html_escape(&post.date),
            excerpt: post.excerpt.clone(),
        })
        .collect();

    let meta = PageMeta {
        title: "All posts",
        description: None,
        keywords: &site.config.keywords,
        og_type: "website",
    };

    let mut context = site.page_context(location, &meta);
    context.insert("bio", &site.bio());
    context.insert("posts", &entries);

    site.renderer.render("index.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_support;
    use crate::templates::TemplateRenderer;

    fn summary(slug: &str, title: Option<&str>, date: &str) -> PostSummary {
        PostSummary {
            slug: slug.to_string(),
            title: title.map(str::to_string),
            date: date.to_string(),
            excerpt: format!("<em>excerpt of {}</em>", slug),
        }
    }

    fn render_index(posts: &[PostSummary]) -> String {
        let renderer = TemplateRenderer::new().unwrap();
        let config = test_support::config();
        let metadata = test_support::metadata(&config);
        let site = SiteContext::new(&renderer, &config, &metadata);
        render(&site, &Location::new("/"), posts).unwrap()
    }

    #[test]
    fn test_one_entry_per_summary_in_order() {
        let posts = vec![
            summary("/third/", Some("Third"), "March 01, 2019"),
            summary("/second/", Some("Second"), "February 01, 2019"),
            summary("/first/", Some("First"), "January 01, 2019"),
        ];
        let html = render_index(&posts);

        assert_eq!(html.matches(r#"class="post-summary""#).count(), 3);
        let third = html.find(r#"href="/third/""#).unwrap();
        let second = html.find(r#"href="/second/""#).unwrap();
        let first = html.find(r#"href="/first/""#).unwrap();
        assert!(third < second && second < first);
        assert!(html.contains("<small>February 01, 2019</small>"));
    }

    #[test]
    fn test_missing_title_shows_slug() {
        let html = render_index(&[summary("/untitled-post/", None, "May 05, 2019")]);
        assert!(html.contains(r#"<a style="box-shadow: none;" href="/untitled-post/">/untitled-post/</a>"#));
    }

    #[test]
    fn test_excerpt_is_not_escaped() {
        let html = render_index(&[summary("/raw/", Some("Raw"), "May 05, 2019")]);
        assert!(html.contains("<p><em>excerpt of /raw/</em></p>"));
    }

    #[test]
    fn test_index_has_hero_title_bio_and_seo() {
        let html = render_index(&[]);
        assert!(html.contains("site-title--hero"));
        assert!(html.contains(r#"class="bio""#));
        assert!(html.contains("<title>All posts | Josh Jahans</title>"));
        assert!(html.contains(r#"content="javascript, react""#));
        assert_eq!(html.matches(r#"class="post-summary""#).count(), 0);
    }
}
