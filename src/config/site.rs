//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path};

use super::ConfigError;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub language: String,

    // URL
    pub url: String,
    /// Prefix every route is served under, e.g. `/blog`. Empty for the domain root.
    pub path_prefix: String,

    // Author
    #[serde(default)]
    pub social: Social,
    /// Avatar image, relative to the source directory
    pub avatar: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Writing
    pub date_format: String,
    pub excerpt_length: usize,
    pub excerpt_separator: String,
    pub render_drafts: bool,

    // Extensions
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            author: String::new(),
            description: String::new(),
            keywords: Vec::new(),
            language: "en".to_string(),

            url: "http://localhost:8000".to_string(),
            path_prefix: String::new(),

            social: Social::default(),
            avatar: "assets/me.png".to_string(),

            source_dir: "content".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            date_format: "MMMM DD, YYYY".to_string(),
            excerpt_length: 140,
            excerpt_separator: "<!-- end -->".to_string(),
            render_drafts: false,

            feed: FeedConfig::default(),
            analytics: AnalyticsConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = serde_yaml::from_str(content)?;
        config.path_prefix = config.path_prefix.trim_end_matches('/').to_string();
        config.feed.path = config.feed.path.trim_start_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.path_prefix.is_empty() && !self.path_prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "path_prefix `{}` must start with `/`",
                self.path_prefix
            )));
        }
        let feed_path = Path::new(&self.feed.path);
        if self.feed.path.is_empty()
            || feed_path
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(ConfigError::Validation(format!(
                "feed.path `{}` must be a relative path inside the public dir",
                self.feed.path
            )));
        }
        if self.excerpt_length == 0 {
            return Err(ConfigError::Validation(
                "excerpt_length must be greater than 0".to_string(),
            ));
        }
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::Validation(
                "date_format must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The pathname of the site root, compared against a page location to
    /// pick the header style.
    pub fn root_path(&self) -> String {
        format!("{}/", self.path_prefix.trim_end_matches('/'))
    }

    /// Read-only metadata handed to the render layer
    pub fn metadata(&self) -> SiteMetadata {
        SiteMetadata {
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            site_url: self.url.clone(),
            social: self.social.clone(),
        }
    }
}

/// Social profile handles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub twitter: String,
    pub github: String,
}

/// Feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub enable: bool,
    pub path: String,
    /// Maximum number of items, newest first. All posts when unset.
    pub limit: Option<usize>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "rss.xml".to_string(),
            limit: None,
        }
    }
}

/// Analytics configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub tracking_id: Option<String>,
}

impl AnalyticsConfig {
    pub fn enabled(&self) -> bool {
        self.tracking_id
            .as_deref()
            .map(|id| !id.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Site-wide data every page reads, resolved once per build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    pub title: String,
    pub author: String,
    pub description: String,
    pub site_url: String,
    pub social: Social,
}
