//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check: backend reachability (public)
//! - `/`, `/empresas/*`, `/fornecedores/*`, `/vinculos/*` - Management pages
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::handlers::health_handler;
use crate::web::middleware::tracing;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(web::routes::page_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
