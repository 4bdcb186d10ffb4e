//! Google Drive REST API client.
//!
//! This crate provides:
//! - Resumable file upload into the archive folder
//! - File listing by folder and age
//! - The retention sweep (delete files older than a threshold)

pub mod client;
pub mod error;
pub mod token_cache;

pub use client::{DriveClient, DriveConfig, DriveFile};
pub use error::{DriveError, DriveResult};
pub use token_cache::{TokenCache, DRIVE_SCOPE};
