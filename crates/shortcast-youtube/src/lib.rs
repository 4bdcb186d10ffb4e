//! YouTube Data API upload client.
//!
//! This crate provides:
//! - Single-shot multipart video upload
//! - A credential pool with stateless random selection for quota spreading

pub mod client;
pub mod credentials;
pub mod error;

pub use client::YoutubeClient;
pub use credentials::CredentialPool;
pub use error::{YoutubeError, YoutubeResult};
