//! RSS feed generation

use anyhow::{anyhow, Result};
use rss::{validation::Validate, ChannelBuilder, GuidBuilder, ItemBuilder};

use crate::config::{SiteConfig, SiteMetadata};
use crate::content::Post;
use crate::helpers::{full_url_for, url_for};

/// Build the RSS 2.0 document for `posts`, which are newest first
pub fn build_feed(config: &SiteConfig, metadata: &SiteMetadata, posts: &[Post]) -> Result<String> {
    let limit = config.feed.limit.unwrap_or(posts.len());

    let items: Vec<_> = posts
        .iter()
        .take(limit)
        .map(|post| {
            let link = full_url_for(config, &post.slug);
            ItemBuilder::default()
                .title(Some(post.display_title().to_string()))
                .link(Some(link.clone()))
                .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
                .description(Some(post.excerpt.clone()))
                .pub_date(Some(post.date.to_rfc2822()))
                .build()
        })
        .collect();

    let channel = ChannelBuilder::default()
        .title(metadata.title.clone())
        .link(full_url_for(config, "/"))
        .description(metadata.description.clone())
        .language(Some(config.language.clone()))
        .generator(Some(format!("blogfront {}", env!("CARGO_PKG_VERSION"))))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| {
            anyhow!(
                "rss validation failed for {}: {e}",
                url_for(config, &config.feed.path)
            )
        })?;

    Ok(channel.to_string())
}
