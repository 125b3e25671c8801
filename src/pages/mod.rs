//! Page templates: pure functions from pre-loaded data to HTML

pub mod index;
pub mod not_found;
pub mod post;

use tera::Context;

use crate::components::{layout, BioProps, LayoutProps, SeoProps};
use crate::config::{SiteConfig, SiteMetadata};
use crate::content::Location;
use crate::helpers::url_for;
use crate::templates::{BioData, TemplateRenderer};

/// Everything a page needs besides its own data
pub struct SiteContext<'a> {
    pub renderer: &'a TemplateRenderer,
    pub config: &'a SiteConfig,
    pub metadata: &'a SiteMetadata,
}

/// Head and header details that differ per page
pub(crate) struct PageMeta<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub keywords: &'a [String],
    pub og_type: &'static str,
}

impl<'a> SiteContext<'a> {
    pub fn new(
        renderer: &'a TemplateRenderer,
        config: &'a SiteConfig,
        metadata: &'a SiteMetadata,
    ) -> Self {
        Self {
            renderer,
            config,
            metadata,
        }
    }

    pub fn root_path(&self) -> String {
        self.config.root_path()
    }

    pub fn feed_href(&self) -> String {
        url_for(self.config, &self.config.feed.path)
    }

    fn track_outbound(&self) -> bool {
        self.config.analytics.enabled()
    }

    /// Context with `head` and `layout` filled in, ready for any template
    /// extending `layout.html`
    pub(crate) fn page_context(&self, location: &Location, meta: &PageMeta) -> Context {
        let root_path = self.root_path();
        let feed_href = self.feed_href();

        let head = SeoProps {
            site: self.metadata,
            lang: &self.config.language,
            page_title: meta.title,
            description: meta.description,
            keywords: meta.keywords,
            og_type: meta.og_type,
            feed_href: &feed_href,
            tracking_id: self.config.analytics.tracking_id.as_deref(),
        }
        .data();

        let props = LayoutProps {
            location,
            root_path: &root_path,
            title: &self.metadata.title,
            social: &self.metadata.social,
            feed_href: &feed_href,
            track_outbound: self.track_outbound(),
        };

        layout::context(&props, &head)
    }

    pub(crate) fn bio(&self) -> BioData {
        let avatar_src = url_for(self.config, &self.config.avatar);
        BioProps {
            author: &self.metadata.author,
            social: &self.metadata.social,
            avatar_src: &avatar_src,
            track_outbound: self.track_outbound(),
        }
        .data()
    }
}
