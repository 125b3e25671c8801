//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::loader::POSTS_DIR;
use crate::Blog;

/// Create `content/blog/<slug>/index.md` with front-matter filled in.
/// Returns the path of the new file.
pub fn create_post(blog: &Blog, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    let dir = blog.source_dir.join(POSTS_DIR).join(&slug);
    let file_path = dir.join("index.md");

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::create_dir_all(&dir)?;

    let content = format!(
        "---\ntitle: {}\ndate: \"{}\"\ndescription: \"\"\n---\n\n",
        yaml_string(title),
        now.to_rfc3339()
    );
    fs::write(&file_path, content)?;

    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Quote a value for YAML front-matter
fn yaml_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
