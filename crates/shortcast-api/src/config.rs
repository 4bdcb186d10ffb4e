//! API configuration.

use std::path::PathBuf;

/// Default local working directory for downloads and intermediate clips.
pub const DEFAULT_WORK_DIR: &str = "/tmp/shortcast";

/// Default archive retention threshold in days.
pub const DEFAULT_RETENTION_DAYS: i64 = 3;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Local working directory for pipeline intermediates
    pub work_dir: PathBuf,
    /// Archive retention threshold used by the startup sweep
    pub retention_days: i64,
    /// Static frontend directory
    pub frontend_dir: PathBuf,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
            retention_days: DEFAULT_RETENTION_DAYS,
            frontend_dir: PathBuf::from("frontend"),
            cors_origins: vec!["*".to_string()],
            max_body_size: 1024 * 1024, // 1MB (JSON bodies only; media never transits the API)
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            work_dir: std::env::var("WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.work_dir),
            retention_days: std::env::var("RETENTION_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.retention_days),
            frontend_dir: std::env::var("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.frontend_dir),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
        }
    }
}
