//! YouTube upload client.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use shortcast_models::Visibility;

use crate::credentials::CredentialPool;
use crate::error::{YoutubeError, YoutubeResult};

const UPLOAD_BASE: &str = "https://www.googleapis.com/upload/youtube/v3";

/// Connect timeout for upload requests. No total-request timeout is set:
/// a publish runs as long as the bytes keep flowing.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed video category ("People &amp; Blogs"). Not configurable.
pub const CATEGORY_ID: &str = "22";

#[derive(Debug, Deserialize)]
struct InsertedVideo {
    id: String,
}

/// YouTube Data API client.
pub struct YoutubeClient {
    http: Client,
    pool: CredentialPool,
    upload_base: String,
}

impl YoutubeClient {
    /// Create a new client over a credential pool.
    pub fn new(pool: CredentialPool) -> YoutubeResult<Self> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("shortcast-youtube/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            pool,
            upload_base: UPLOAD_BASE.to_string(),
        })
    }

    /// Create from `YT_API_KEY_*` environment variables.
    pub fn from_env() -> YoutubeResult<Self> {
        Self::new(CredentialPool::from_env()?)
    }

    #[cfg(test)]
    fn with_upload_base(pool: CredentialPool, upload_base: String) -> Self {
        Self {
            http: Client::new(),
            pool,
            upload_base,
        }
    }

    /// Upload a clip, returning the platform-assigned video ID.
    ///
    /// Single-shot multipart insert with `part=snippet,status`; no chunked
    /// or resumable retry. The credential is drawn from the pool per call.
    pub async fn upload_video(
        &self,
        path: impl AsRef<Path>,
        title: &str,
        description: &str,
        tags: &[String],
        visibility: Visibility,
    ) -> YoutubeResult<String> {
        let path = path.as_ref();
        let key = self.pool.pick();

        debug!(
            file = %path.display(),
            title,
            visibility = %visibility,
            "Uploading clip to YouTube"
        );

        let metadata = serde_json::json!({
            "snippet": {
                "title": title,
                "description": description,
                "tags": tags,
                "categoryId": CATEGORY_ID,
            },
            "status": {
                "privacyStatus": visibility.as_str(),
            },
        });

        let metadata_part = Part::text(metadata.to_string())
            .mime_str("application/json")
            .map_err(|e| YoutubeError::upload_failed(e.to_string()))?;

        let bytes = tokio::fs::read(path).await?;
        let media_part = Part::bytes(bytes)
            .mime_str("video/mp4")
            .map_err(|e| YoutubeError::upload_failed(e.to_string()))?;

        let form = Form::new()
            .part("metadata", metadata_part)
            .part("media", media_part);

        let response = self
            .http
            .post(format!(
                "{}/videos?uploadType=multipart&part=snippet,status&key={}",
                self.upload_base, key
            ))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(YoutubeError::upload_failed(format!(
                "insert returned {}: {}",
                status, body
            )));
        }

        let inserted: InsertedVideo = response.json().await?;

        info!(
            video_id = %inserted.id,
            visibility = %visibility,
            "Published clip to YouTube"
        );

        Ok(inserted.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_upload_returns_video_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/videos"))
            .and(query_param("uploadType", "multipart"))
            .and(query_param("part", "snippet,status"))
            .and(query_param("key", "key1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "yt123"})),
            )
            .mount(&server)
            .await;

        let dir = tempfile::TempDir::new().unwrap();
        let clip = dir.path().join("clip.mp4");
        std::fs::write(&clip, b"video bytes").unwrap();

        let pool = CredentialPool::new(vec!["key1".into()]).unwrap();
        let client = YoutubeClient::with_upload_base(pool, server.uri());

        let id = client
            .upload_video(
                &clip,
                "Podcast Clip 2025-01-01",
                "Clip from https://example.com/ep1",
                &["podcast".to_string(), "shorts".to_string()],
                Visibility::Private,
            )
            .await
            .unwrap();

        assert_eq!(id, "yt123");
    }

    #[tokio::test]
    async fn test_upload_failure_is_surfaced() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded"))
            .mount(&server)
            .await;

        let dir = tempfile::TempDir::new().unwrap();
        let clip = dir.path().join("clip.mp4");
        std::fs::write(&clip, b"video bytes").unwrap();

        let pool = CredentialPool::new(vec!["key1".into()]).unwrap();
        let client = YoutubeClient::with_upload_base(pool, server.uri());

        let err = client
            .upload_video(&clip, "t", "d", &[], Visibility::Private)
            .await
            .unwrap_err();

        match err {
            YoutubeError::UploadFailed(msg) => assert!(msg.contains("quotaExceeded")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
