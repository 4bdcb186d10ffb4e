//! Drive REST API client.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use gcp_auth::CustomServiceAccount;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{DriveError, DriveResult};
use crate::token_cache::TokenCache;

const API_BASE: &str = "https://www.googleapis.com/drive/v3";
const UPLOAD_BASE: &str = "https://www.googleapis.com/upload/drive/v3";

/// Connect timeout for Drive requests. No total-request timeout is set:
/// an archive upload runs as long as the bytes keep flowing.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Drive client configuration.
#[derive(Debug, Clone)]
pub struct DriveConfig {
    /// Target archive folder ID
    pub folder_id: String,
    /// Service account credentials (JSON blob)
    pub service_account_json: String,
}

impl DriveConfig {
    /// Create config from environment variables.
    pub fn from_env() -> DriveResult<Self> {
        Ok(Self {
            folder_id: std::env::var("GDRIVE_FOLDER_ID")
                .map_err(|_| DriveError::config_error("GDRIVE_FOLDER_ID not set"))?,
            service_account_json: std::env::var("GDRIVE_KEY")
                .map_err(|_| DriveError::config_error("GDRIVE_KEY not set"))?,
        })
    }
}

/// A file in the archive folder as returned by the list API.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct FileListResponse {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct CreatedFile {
    id: String,
}

enum TokenSource {
    Gcp(Arc<TokenCache>),
    #[cfg(test)]
    Static(String),
}

impl TokenSource {
    async fn get(&self) -> DriveResult<String> {
        match self {
            Self::Gcp(cache) => cache.get_token().await,
            #[cfg(test)]
            Self::Static(token) => Ok(token.clone()),
        }
    }
}

/// Google Drive REST API client.
pub struct DriveClient {
    http: Client,
    token: TokenSource,
    /// Default archive folder
    folder_id: String,
    api_base: String,
    upload_base: String,
}

impl DriveClient {
    /// Create a new Drive client.
    pub fn new(config: DriveConfig) -> DriveResult<Self> {
        let service_account = CustomServiceAccount::from_json(&config.service_account_json)
            .map_err(|e| DriveError::auth_error(format!("Failed to load service account: {}", e)))?;

        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("shortcast-drive/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            token: TokenSource::Gcp(Arc::new(TokenCache::new(Arc::new(service_account)))),
            folder_id: config.folder_id,
            api_base: API_BASE.to_string(),
            upload_base: UPLOAD_BASE.to_string(),
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> DriveResult<Self> {
        Self::new(DriveConfig::from_env()?)
    }

    /// The configured archive folder.
    pub fn folder_id(&self) -> &str {
        &self.folder_id
    }

    /// Upload a file into a folder, returning the platform-assigned file ID.
    ///
    /// Uses the resumable upload protocol: one session-creation request with
    /// the file metadata, then the content in a single PUT to the session URI.
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        folder_id: &str,
        target_name: &str,
    ) -> DriveResult<String> {
        let path = path.as_ref();
        let token = self.token.get().await?;

        debug!("Uploading {} to Drive as {}", path.display(), target_name);

        let metadata = serde_json::json!({
            "name": target_name,
            "parents": [folder_id],
        });

        let response = self
            .http
            .post(format!(
                "{}/files?uploadType=resumable&fields=id",
                self.upload_base
            ))
            .bearer_auth(&token)
            .json(&metadata)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DriveError::upload_failed(format!(
                "session creation returned {}: {}",
                status, body
            )));
        }

        let session_uri = response
            .headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
            .ok_or_else(|| DriveError::upload_failed("no resumable session URI returned"))?;

        let body = tokio::fs::read(path).await?;

        let response = self
            .http
            .put(&session_uri)
            .bearer_auth(&token)
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DriveError::upload_failed(format!(
                "content upload returned {}: {}",
                status, body
            )));
        }

        let created: CreatedFile = response.json().await?;

        info!(
            file = %path.display(),
            name = target_name,
            drive_id = %created.id,
            "Uploaded file to Drive"
        );

        Ok(created.id)
    }

    /// List files in a folder modified strictly before `now - days`.
    pub async fn list_older_than(&self, folder_id: &str, days: i64) -> DriveResult<Vec<DriveFile>> {
        let token = self.token.get().await?;

        let cutoff = (Utc::now() - chrono::Duration::days(days)).format("%Y-%m-%dT%H:%M:%S");
        let query = format!(
            "'{}' in parents and modifiedTime < '{}'",
            folder_id, cutoff
        );

        debug!("Listing Drive files: {}", query);

        let response = self
            .http
            .get(format!(
                "{}/files?q={}&fields=files(id,name)",
                self.api_base,
                urlencoding::encode(&query)
            ))
            .bearer_auth(&token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DriveError::list_failed(format!(
                "list returned {}: {}",
                status, body
            )));
        }

        let list: FileListResponse = response.json().await?;
        Ok(list.files)
    }

    /// Delete a single file by ID.
    pub async fn delete_file(&self, file_id: &str) -> DriveResult<()> {
        let token = self.token.get().await?;

        let response = self
            .http
            .delete(format!("{}/files/{}", self.api_base, file_id))
            .bearer_auth(&token)
            .send()
            .await?;

        // Drive returns 204 on success
        if response.status().is_success() || response.status() == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(DriveError::delete_failed(format!(
                "delete {} returned {}: {}",
                file_id, status, body
            )))
        }
    }

    /// Retention sweep: delete every file in `folder_id` older than `days`
    /// days, returning the number deleted.
    ///
    /// Deletions are independent; a failure mid-sweep leaves already-deleted
    /// files gone and aborts the rest.
    pub async fn delete_older_than(&self, folder_id: &str, days: i64) -> DriveResult<u32> {
        let files = self.list_older_than(folder_id, days).await?;

        for file in &files {
            debug!(id = %file.id, name = %file.name, "Deleting expired archive file");
            self.delete_file(&file.id).await?;
        }

        info!(
            folder = folder_id,
            days,
            deleted = files.len(),
            "Retention sweep complete"
        );

        Ok(files.len() as u32)
    }
}
