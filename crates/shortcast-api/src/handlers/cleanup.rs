//! The retention-sweep endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use shortcast_models::CleanupResponse;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CleanupParams {
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    crate::config::DEFAULT_RETENTION_DAYS
}

/// `POST /api/cleanup?days=3`
///
/// Deletes archive files older than `days` days. `days=0` deletes every
/// file in the folder (all modification times precede "now").
pub async fn cleanup_files(
    State(state): State<AppState>,
    Query(params): Query<CleanupParams>,
) -> ApiResult<Json<CleanupResponse>> {
    let deleted = state
        .drive
        .delete_older_than(state.drive.folder_id(), params.days)
        .await?;

    info!(days = params.days, deleted, "Cleanup complete");

    Ok(Json(CleanupResponse::success(deleted)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_default() {
        let params: CleanupParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.days, 3);

        let params: CleanupParams = serde_json::from_str(r#"{"days": 0}"#).unwrap();
        assert_eq!(params.days, 0);
    }
}
