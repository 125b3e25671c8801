//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL under the site's path prefix
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.path_prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about/") // -> "https://example.com/blog/about/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Twitter profile URL for a handle
pub fn twitter_url(handle: &str) -> String {
    format!("https://twitter.com/{}", handle)
}

/// GitHub profile URL for a handle
pub fn github_url(handle: &str) -> String {
    format!("https://www.github.com/{}", handle)
}
