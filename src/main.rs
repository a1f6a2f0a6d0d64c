//! Insight Service - Main Entry Point
//!
//! HTTP service classifying complaint exports by keyword category.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use insight::api::{self, handlers::AppState};
use insight::types::ServiceConfig;
use insight::ComplaintAnalyzer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "insight=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = ServiceConfig::from_env().context("Invalid INSIGHT_* configuration")?;

    info!("Starting Insight Service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        default_language = %config.default_language,
        fallback_language = %config.fallback_language,
        match_mode = ?config.match_mode,
        "Loaded configuration"
    );

    // Dictionaries are compiled once and shared read-only
    let analyzer = ComplaintAnalyzer::from_config(&config)
        .context("Failed to compile keyword dictionaries")?;

    let port = config.port;
    let state = Arc::new(AppState {
        analyzer: Arc::new(analyzer),
        config,
    });

    // Build HTTP routes
    let app = api::router(state)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
