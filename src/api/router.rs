//! Router assembly and the HTTP listener.

use std::sync::Arc;

use axum::{Router, http::HeaderValue, routing::get};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers::{
    AppState, create_section, delete_section, get_section, health, list_sections, update_section,
};
use crate::config::server::ServerConfig;
use crate::core::SectionService;
use crate::errors::Result;

/// Versioned prefix for all resource routes
pub const API_PREFIX: &str = "/api/v1";

/// Builds the application router.
///
/// Section routes live under [`API_PREFIX`]; `/health` sits at the root. An empty
/// `cors_origins` list allows any origin.
pub fn router(service: SectionService, cors_origins: &[String]) -> Router {
    let state: AppState = Arc::new(service);

    let sections = Router::new()
        .route("/sections", get(list_sections).post(create_section))
        .route(
            "/sections/:id",
            get(get_section)
                .patch(update_section)
                .delete(delete_section),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .nest(API_PREFIX, sections)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .layer(cors_layer(cors_origins))
}

fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    if cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .inspect_err(|e| warn!("Ignoring invalid CORS origin {origin:?}: {e}"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Binds `config.socket_addr()` and serves `app` until Ctrl-C.
pub async fn serve(config: &ServerConfig, app: Router) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
