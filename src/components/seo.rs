//! Document head: title, description, social cards, feed and analytics tags

use crate::config::SiteMetadata;
use crate::helpers::html_escape;
use crate::templates::HeadData;

pub struct SeoProps<'a> {
    pub site: &'a SiteMetadata,
    pub lang: &'a str,
    pub page_title: &'a str,
    /// Falls back to the site description
    pub description: Option<&'a str>,
    pub keywords: &'a [String],
    pub og_type: &'static str,
    pub feed_href: &'a str,
    pub tracking_id: Option<&'a str>,
}

impl SeoProps<'_> {
    pub fn data(&self) -> HeadData {
        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.site.description);

        let twitter_creator = if self.site.social.twitter.is_empty() {
            String::new()
        } else {
            format!("@{}", self.site.social.twitter)
        };

        HeadData {
            title: html_escape(&format!("{} | {}", self.page_title, self.site.title)),
            page_title: html_escape(self.page_title),
            description: html_escape(description),
            keywords: html_escape(&self.keywords.join(", ")),
            lang: html_escape(self.lang),
            twitter_creator: html_escape(&twitter_creator),
            og_type: self.og_type,
            feed_href: html_escape(self.feed_href),
            feed_title: html_escape(&self.site.title),
            tracking_id: self
                .tracking_id
                .filter(|id| !id.trim().is_empty())
                .map(html_escape),
        }
    }
}
