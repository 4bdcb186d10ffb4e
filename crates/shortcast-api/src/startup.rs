//! Startup tasks.

use tracing::{error, info};

use shortcast_media::ensure_dir;

use crate::state::AppState;

/// Prepare the working directory and run one initial retention sweep.
///
/// A failed sweep is logged but does not prevent the server from starting;
/// the periodic `/api/cleanup` calls will catch up.
pub async fn run_startup_tasks(state: &AppState) {
    if let Err(e) = ensure_dir(&state.config.work_dir).await {
        error!(
            work_dir = %state.config.work_dir.display(),
            error = %e,
            "Failed to create working directory"
        );
    }

    match state
        .drive
        .delete_older_than(state.drive.folder_id(), state.config.retention_days)
        .await
    {
        Ok(deleted) => info!(deleted, "Startup retention sweep complete"),
        Err(e) => error!(error = %e, "Startup retention sweep failed"),
    }
}
