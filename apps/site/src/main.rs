mod config;
mod contact;
mod content;
mod errors;
mod nav;
mod render;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::load_content;
use crate::nav::NavConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitrine v{}", env!("CARGO_PKG_VERSION"));

    // Load the content store once; it stays read-only for the process lifetime.
    let content = load_content(&config.content_path)?;
    info!(
        "Content loaded: {} skill groups, {} experience, {} education, {} projects",
        content.skills.len(),
        content.experience.len(),
        content.education.len(),
        content.projects.len()
    );

    let nav = NavConfig::new(&content.sections)?;
    info!(
        "Sections enabled: {:?}, default {:?}",
        nav.enabled(),
        nav.default_section()
    );

    let state = AppState {
        content: Arc::new(content),
        nav,
        resume_path: config.resume_path.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
