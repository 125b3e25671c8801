//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::ContentLoader;
use crate::generator::Generator;
use crate::{Blog, CONFIG_FILE};

/// Load content and write the whole site
pub fn run(blog: &Blog) -> Result<()> {
    let start = Instant::now();

    let data = ContentLoader::new(blog).load()?;
    tracing::info!("Loaded {} posts", data.posts.len());

    Generator::new(blog)?.generate(&data)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Paths whose changes trigger a rebuild
pub fn watched_paths(blog: &Blog) -> Vec<(PathBuf, RecursiveMode)> {
    let mut paths = vec![
        (blog.source_dir.clone(), RecursiveMode::Recursive),
        (
            blog.base_dir.join(&blog.config.static_dir),
            RecursiveMode::Recursive,
        ),
        (blog.base_dir.join(CONFIG_FILE), RecursiveMode::NonRecursive),
    ];
    paths.retain(|(path, _)| path.exists());
    paths
}

/// Watch for file changes and regenerate, blocking until the watcher stops.
/// `on_rebuild` runs after every successful rebuild.
pub fn watch_blocking<F>(blog: &Blog, mut on_rebuild: F) -> Result<()>
where
    F: FnMut(),
{
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for (path, mode) in watched_paths(blog) {
        debouncer.watcher().watch(&path, mode)?;
        tracing::debug!("Watching: {:?}", path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    for result in rx {
        match result {
            Ok(events) => {
                // Output lands next to the sources, ignore our own writes
                let relevant = events
                    .iter()
                    .filter(|e| !e.path.starts_with(&blog.public_dir))
                    .count();
                if relevant == 0 {
                    continue;
                }

                // Pick up config edits too
                let current = match Blog::new(&blog.base_dir) {
                    Ok(current) => current,
                    Err(e) => {
                        tracing::error!("Invalid configuration, keeping last build: {:#}", e);
                        continue;
                    }
                };

                tracing::info!("{} file(s) changed, regenerating...", relevant);
                match run(&current) {
                    Ok(()) => on_rebuild(),
                    Err(e) => tracing::error!("Generation failed: {:#}", e),
                }
            }
            Err(e) => tracing::error!("Watch error: {:?}", e),
        }
    }

    Ok(())
}

/// Watch and regenerate without blocking the async runtime
pub async fn watch(blog: &Blog) -> Result<()> {
    let blog = blog.clone();
    tokio::task::spawn_blocking(move || watch_blocking(&blog, || {})).await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_on_empty_site() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        run(&blog).unwrap();
        assert!(blog.public_dir.join("index.html").exists());
        assert!(blog.public_dir.join("404.html").exists());
    }

    #[test]
    fn test_watched_paths_skip_missing() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert!(watched_paths(&blog).is_empty());

        std::fs::create_dir_all(&blog.source_dir).unwrap();
        let paths = watched_paths(&blog);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].0, blog.source_dir);
    }
}
