//! Shared data models for the Shortcast backend.
//!
//! This crate provides Serde-serializable types for:
//! - The process/cleanup API request and response bodies
//! - Clip visibility on the publishing platform
//! - Encoding configuration for the vertical clip encoder
//! - Timestamp parsing helpers

pub mod encoding;
pub mod request;
pub mod timestamp;
pub mod visibility;

// Re-export common types
pub use encoding::EncodingConfig;
pub use request::{CleanupResponse, ProcessRequest, ProcessResponse};
pub use timestamp::{parse_timestamp, TimestampError};
pub use visibility::Visibility;
