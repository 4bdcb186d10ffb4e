//! The pipeline endpoint: download, clip, publish, archive, clean up.

use std::path::{Path, PathBuf};

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Local};
use tracing::info;
use validator::Validate;

use shortcast_media::{create_clip, download_podcast, remove_if_exists, subtitle_path_for};
use shortcast_models::{ProcessRequest, ProcessResponse, Visibility};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Tags applied when the request supplies none.
const DEFAULT_TAGS: [&str; 2] = ["podcast", "shorts"];

/// `POST /api/process`
///
/// Runs the full pipeline sequentially:
/// downloaded → clipped (with subtitles when available) → published →
/// archived → local cleanup. Any stage failure aborts the rest and surfaces
/// the raw error; completed side effects (uploads) are not rolled back, and
/// intermediate files are only removed on the fully-successful path.
pub async fn process_podcast(
    State(state): State<AppState>,
    Json(request): Json<ProcessRequest>,
) -> ApiResult<Json<ProcessResponse>> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    info!(url = %request.url, start = %request.start_time, duration = %request.duration, "Processing podcast");

    // 1. Download the source episode
    let source_path = download_podcast(&request.url, &state.config.work_dir).await?;

    // 2. Cut the vertical clip (transcription runs inside when requested)
    let clip_path = clip_path_for(&source_path);
    create_clip(
        &source_path,
        &clip_path,
        &request.start_time,
        &request.duration,
        true,
        &state.encoding,
    )
    .await?;

    // 3. Publish to YouTube
    let now = Local::now();
    let title = request
        .title
        .clone()
        .unwrap_or_else(|| default_title(&now));
    let description = request
        .description
        .clone()
        .unwrap_or_else(|| default_description(&request.url));
    let tags = effective_tags(&request.tags);
    let visibility = Visibility::from_public_flag(request.make_public);

    let youtube_id = state
        .youtube
        .upload_video(&clip_path, &title, &description, &tags, visibility)
        .await?;

    // 4. Archive to Drive
    let drive_id = state
        .drive
        .upload_file(&clip_path, state.drive.folder_id(), &archive_name(&now))
        .await?;

    // 5. Local cleanup (success path only)
    remove_if_exists(&source_path).await?;
    remove_if_exists(&clip_path).await?;
    remove_if_exists(subtitle_path_for(&source_path)).await?;

    info!(youtube_id = %youtube_id, drive_id = %drive_id, "Pipeline complete");

    Ok(Json(ProcessResponse::success(youtube_id, drive_id)))
}

/// Clip output path beside the downloaded source.
fn clip_path_for(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "podcast".to_string());
    source.with_file_name(format!("{}_clip.mp4", stem))
}

fn default_title(now: &DateTime<Local>) -> String {
    format!("Podcast Clip {}", now.format("%Y-%m-%d"))
}

fn default_description(url: &str) -> String {
    format!("Clip from {}", url)
}

fn effective_tags(tags: &[String]) -> Vec<String> {
    if tags.is_empty() {
        DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()
    } else {
        tags.to_vec()
    }
}

fn archive_name(now: &DateTime<Local>) -> String {
    format!("clip_{}.mp4", now.format("%Y%m%d_%H%M%S"))
}
