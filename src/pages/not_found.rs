//! Page shown for unmatched routes

use anyhow::Result;

use super::{PageMeta, SiteContext};
use crate::content::Location;

pub fn render(site: &SiteContext, location: &Location) -> Result<String> {
    let meta = PageMeta {
        title: "404: Not Found",
        description: None,
        keywords: &[],
        og_type: "website",
    };

    let context = site.page_context(location, &meta);
    site.renderer.render("404.html", &context)
}
