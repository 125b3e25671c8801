//! Development server for the generated site

use anyhow::Result;
use axum::http::StatusCode;
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;
use tower_http::trace::TraceLayer;

use crate::commands::generate;
use crate::Blog;

/// Router serving `public_dir` under `path_prefix`. Unmatched routes get
/// the generated `404.html` with a 404 status.
pub fn router(public_dir: &Path, path_prefix: &str) -> Router {
    let not_found = ServeFile::new(public_dir.join("404.html"));
    let files = ServeDir::new(public_dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found.clone());

    let prefix = path_prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        Router::new().fallback_service(files)
    } else {
        Router::new()
            .nest_service(prefix, files)
            .fallback_service(SetStatus::new(not_found, StatusCode::NOT_FOUND))
    };

    router.layer(TraceLayer::new_for_http())
}

/// Start the development server
pub async fn start(blog: &Blog, ip: &str, port: u16, watch: bool) -> Result<()> {
    let app = router(&blog.public_dir, &blog.config.path_prefix);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!(
        "Server running at http://{}:{}{}",
        ip,
        port,
        blog.config.root_path()
    );
    if watch {
        println!("Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if watch {
        let blog = blog.clone();
        tokio::task::spawn_blocking(move || {
            let rebuilt = || tracing::info!("Regenerated, refresh the browser to see changes");
            if let Err(e) = generate::watch_blocking(&blog, rebuilt) {
                tracing::error!("File watcher error: {:#}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
