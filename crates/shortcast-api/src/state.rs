//! Application state.

use std::sync::Arc;

use shortcast_drive::DriveClient;
use shortcast_models::EncodingConfig;
use shortcast_youtube::YoutubeClient;

use crate::config::ApiConfig;

/// Shared application state.
///
/// All credentials are read from the environment exactly once, here, and
/// carried in the constructed clients; nothing re-reads the environment
/// mid-pipeline.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub drive: Arc<DriveClient>,
    pub youtube: Arc<YoutubeClient>,
    pub encoding: EncodingConfig,
}

impl AppState {
    /// Create new application state, building both platform clients.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let drive = DriveClient::from_env()?;
        let youtube = YoutubeClient::from_env()?;

        Ok(Self {
            config,
            drive: Arc::new(drive),
            youtube: Arc::new(youtube),
            encoding: EncodingConfig::default(),
        })
    }
}
