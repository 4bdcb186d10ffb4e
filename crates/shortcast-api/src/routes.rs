//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::{cleanup_files, health, process_podcast, system_info};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/process", post(process_podcast))
        .route("/cleanup", post(cleanup_files))
        .route("/system-info", get(system_info));

    let index = state.config.frontend_dir.join("index.html");

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health))
        .route_service("/", ServeFile::new(index))
        .nest_service("/static", ServeDir::new(&state.config.frontend_dir))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
