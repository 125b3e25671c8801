//! List posts

use anyhow::Result;

use crate::content::{ContentLoader, SiteData};
use crate::Blog;

/// Print posts newest first, as a table or as JSON summaries
pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let data = ContentLoader::new(blog).load()?;

    if json {
        println!("{}", summaries_json(&data, &blog.config.date_format)?);
        return Ok(());
    }

    println!("Posts ({}):", data.posts.len());
    for post in &data.posts {
        println!(
            "  {}  {:<30}  {}{}",
            post.date.format("%Y-%m-%d"),
            post.slug,
            post.display_title(),
            if post.draft { " (draft)" } else { "" }
        );
    }

    Ok(())
}

/// Index summaries as pretty-printed JSON
pub fn summaries_json(data: &SiteData, date_format: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&data.summaries(date_format))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_summaries_json() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("content/blog");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(
            posts_dir.join("first.md"),
            "---\ntitle: First\ndate: 2019-01-01\ndescription: Hello\n---\nBody",
        )
        .unwrap();
        fs::write(posts_dir.join("untitled.md"), "---\ndate: 2019-03-07\n---\nBody").unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        let data = ContentLoader::new(&blog).load().unwrap();
        let json = summaries_json(&data, "MMMM DD, YYYY").unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["slug"], "/untitled/");
        assert!(entries[0]["title"].is_null());
        assert_eq!(entries[0]["date"], "March 07, 2019");
        assert_eq!(entries[1]["title"], "First");
        assert_eq!(entries[1]["excerpt"], "Hello");
    }

    #[test]
    fn test_run_without_posts() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert!(run(&blog, true).is_ok());
        assert!(run(&blog, false).is_ok());
    }
}
