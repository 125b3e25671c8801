//! Page frame: site title header, content, social footer

use anyhow::Result;
use tera::Context;

use crate::config::Social;
use crate::content::Location;
use crate::helpers::{github_url, html_escape, twitter_url};
use crate::templates::{HeadData, LayoutData, OutboundLink, TemplateRenderer};

/// Color of the site title on every page but the root
pub const ACCENT_COLOR: &str = "#007acc";

/// How prominently the site title is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `<h1>` with hero styling, only on the root route
    Hero,
    /// `<h3>` in the accent color
    Subordinate,
}

impl HeadingLevel {
    pub fn for_location(location: &Location, root_path: &str) -> Self {
        if location.pathname == root_path {
            HeadingLevel::Hero
        } else {
            HeadingLevel::Subordinate
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::Hero => "h1",
            HeadingLevel::Subordinate => "h3",
        }
    }
}

pub struct LayoutProps<'a> {
    pub location: &'a Location,
    pub root_path: &'a str,
    pub title: &'a str,
    pub social: &'a Social,
    pub feed_href: &'a str,
    pub track_outbound: bool,
}

impl LayoutProps<'_> {
    pub fn heading_level(&self) -> HeadingLevel {
        HeadingLevel::for_location(self.location, self.root_path)
    }

    pub fn data(&self) -> LayoutData {
        let level = self.heading_level();
        LayoutData {
            title: html_escape(self.title),
            home_href: html_escape(self.root_path),
            hero: level == HeadingLevel::Hero,
            heading_tag: level.tag(),
            accent_color: ACCENT_COLOR,
            footer_links: vec![
                OutboundLink {
                    href: html_escape(&github_url(&self.social.github)),
                    text: "Github".to_string(),
                    tracked: self.track_outbound,
                },
                OutboundLink {
                    href: html_escape(&twitter_url(&self.social.twitter)),
                    text: "Twitter".to_string(),
                    tracked: self.track_outbound,
                },
            ],
            feed_href: html_escape(self.feed_href),
        }
    }
}

/// Base context for any template extending `layout.html`
pub fn context(props: &LayoutProps, head: &HeadData) -> Context {
    let mut context = Context::new();
    context.insert("head", head);
    context.insert("layout", &props.data());
    context
}

/// Wrap an already rendered HTML fragment in the layout
pub fn render(
    renderer: &TemplateRenderer,
    props: &LayoutProps,
    head: &HeadData,
    children: &str,
) -> Result<String> {
    let mut context = context(props, head);
    context.insert("children", children);
    renderer.render("layout.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head() -> HeadData {
        HeadData {
            title: "Josh Jahans".to_string(),
            page_title: "Josh Jahans".to_string(),
            description: String::new(),
            keywords: String::new(),
            lang: "en".to_string(),
            twitter_creator: String::new(),
            og_type: "website",
            feed_href: "/rss.xml".to_string(),
            feed_title: "Josh Jahans".to_string(),
            tracking_id: None,
        }
    }

    fn social() -> Social {
        Social {
            twitter: "josh_jahans".to_string(),
            github: "Jahans3".to_string(),
        }
    }

    fn render_at(pathname: &str, track_outbound: bool) -> String {
        let renderer = TemplateRenderer::new().unwrap();
        let location = Location::new(pathname);
        let social = social();
        let props = LayoutProps {
            location: &location,
            root_path: "/",
            title: "Josh Jahans",
            social: &social,
            feed_href: "/rss.xml",
            track_outbound,
        };
        render(&renderer, &props, &head(), "<p>child content</p>").unwrap()
    }

    #[test]
    fn test_root_path_renders_hero_heading() {
        let html = render_at("/", false);
        assert!(html.contains(r#"<h1 class="site-title site-title--hero""#));
        assert!(html.contains("</h1>"));
        assert!(!html.contains("<h3"));
        assert!(html.contains(">Josh Jahans</a>"));
    }

    #[test]
    fn test_other_path_renders_accent_heading() {
        let html = render_at("/about/", false);
        assert!(html.contains(r#"<h3 class="site-title""#));
        assert!(html.contains("</h3>"));
        assert!(html.contains("color: #007acc"));
        assert!(!html.contains("site-title--hero"));
        assert!(html.contains(">Josh Jahans</a>"));
    }

    #[test]
    fn test_heading_level() {
        let root = Location::new("/blog/");
        assert_eq!(HeadingLevel::for_location(&root, "/blog/"), HeadingLevel::Hero);
        assert_eq!(HeadingLevel::for_location(&root, "/"), HeadingLevel::Subordinate);
        assert_eq!(HeadingLevel::Hero.tag(), "h1");
        assert_eq!(HeadingLevel::Subordinate.tag(), "h3");
    }

    #[test]
    fn test_children_and_footer() {
        let html = render_at("/about/", false);
        assert!(html.contains("<p>child content</p>"));

        let footer = html.split("<footer>").nth(1).unwrap();
        let github = footer.find(r#"href="https://www.github.com/Jahans3""#).unwrap();
        let twitter = footer.find(r#"href="https://twitter.com/josh_jahans""#).unwrap();
        let feed = footer.find(r#"href="/rss.xml""#).unwrap();
        assert!(github < twitter && twitter < feed);
    }

    #[test]
    fn test_tracked_outbound_links() {
        let html = render_at("/", true);
        let footer = html.split("<footer>").nth(1).unwrap();
        assert_eq!(footer.matches(r#"data-outbound="true""#).count(), 2);
    }
}
