//! Author card: avatar, name and two social links

use anyhow::Result;
use tera::Context;

use crate::config::Social;
use crate::helpers::{github_url, html_escape, twitter_url};
use crate::templates::{BioData, OutboundLink, TemplateRenderer};

/// Intrinsic avatar size in pixels
pub const AVATAR_SIZE: u32 = 100;

pub struct BioProps<'a> {
    pub author: &'a str,
    pub social: &'a Social,
    pub avatar_src: &'a str,
    pub track_outbound: bool,
}

impl BioProps<'_> {
    pub fn data(&self) -> BioData {
        BioData {
            author: html_escape(self.author),
            avatar_src: html_escape(self.avatar_src),
            avatar_size: AVATAR_SIZE,
            links: vec![
                OutboundLink {
                    href: html_escape(&twitter_url(&self.social.twitter)),
                    text: "Follow me on Twitter".to_string(),
                    tracked: self.track_outbound,
                },
                OutboundLink {
                    href: html_escape(&github_url(&self.social.github)),
                    text: "Check out my Github".to_string(),
                    tracked: self.track_outbound,
                },
            ],
        }
    }
}

/// Render the card on its own
pub fn render(renderer: &TemplateRenderer, props: &BioProps) -> Result<String> {
    let mut context = Context::new();
    context.insert("bio", &props.data());
    renderer.render("bio.html", &context)
}
