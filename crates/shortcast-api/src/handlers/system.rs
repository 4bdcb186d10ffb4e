//! The host-status endpoint.

use axum::Json;
use chrono::Utc;
use serde::Serialize;
use sysinfo::Disks;

/// Response of `GET /api/system-info`.
#[derive(Debug, Serialize)]
pub struct SystemInfoResponse {
    pub storage: StorageInfo,
    pub load: [f64; 3],
    pub date: String,
}

/// Root filesystem usage in bytes.
#[derive(Debug, Serialize)]
pub struct StorageInfo {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// `GET /api/system-info`
///
/// Read-only snapshot of disk usage, load averages, and the current time.
pub async fn system_info() -> Json<SystemInfoResponse> {
    Json(SystemInfoResponse {
        storage: root_storage(),
        load: load_averages(),
        date: Utc::now().to_rfc3339(),
    })
}

fn root_storage() -> StorageInfo {
    let disks = Disks::new_with_refreshed_list();

    // Prefer the root mount; fall back to the first disk on exotic layouts.
    let disk = disks
        .list()
        .iter()
        .find(|d| d.mount_point() == std::path::Path::new("/"))
        .or_else(|| disks.list().first());

    match disk {
        Some(disk) => {
            let total = disk.total_space();
            let free = disk.available_space();
            StorageInfo {
                total,
                used: total.saturating_sub(free),
                free,
            }
        }
        None => StorageInfo {
            total: 0,
            used: 0,
            free: 0,
        },
    }
}

fn load_averages() -> [f64; 3] {
    let load = sysinfo::System::load_average();
    [load.one, load.five, load.fifteen]
}
