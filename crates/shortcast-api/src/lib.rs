//! Axum HTTP API server for the podcast shorts pipeline.
//!
//! This crate provides:
//! - The `/api/process` pipeline endpoint (download, clip, publish, archive)
//! - The `/api/cleanup` retention sweep endpoint
//! - The `/api/system-info` host status endpoint
//! - Static frontend serving and startup tasks

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod startup;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
