//! Podcast download using yt-dlp.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::command::check_ytdlp;
use crate::error::{MediaError, MediaResult};

/// Preferred stream selection: combined mp4 video + m4a audio, falling back
/// to the best single mp4 stream, then to whatever is best.
const FORMAT_SELECTOR: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best";

/// Container extensions probed after yt-dlp exits.
pub const CANDIDATE_EXTENSIONS: [&str; 3] = ["mp4", "mkv", "webm"];

/// Download a podcast episode into `work_dir` and return the file path.
///
/// The destination is templated with the current timestamp
/// (`podcast_YYYYMMDD_HHMMSS.%(ext)s`); yt-dlp picks the container, so the
/// actual file is located afterwards by probing [`CANDIDATE_EXTENSIONS`].
///
/// # Errors
///
/// - `DownloadFailed` when yt-dlp exits non-zero (not retried)
/// - `FileNotFound` when no candidate file exists after a clean exit
pub async fn download_podcast(url: &str, work_dir: impl AsRef<Path>) -> MediaResult<PathBuf> {
    let work_dir = work_dir.as_ref();

    check_ytdlp()?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let base = work_dir.join(format!("podcast_{}", stamp));
    let template = format!("{}.%(ext)s", base.display());

    info!(url = %url, output = %template, "Downloading podcast");

    let output = Command::new("yt-dlp")
        .args(["-f", FORMAT_SELECTOR, "-o", &template, "--no-playlist", url])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("yt-dlp stderr: {}", stderr);
        return Err(MediaError::download_failed(format!(
            "yt-dlp failed: {}",
            stderr.lines().last().unwrap_or("Unknown error")
        )));
    }

    match locate_download(&base) {
        Some(path) => {
            let size = path.metadata()?.len();
            info!(
                output = %path.display(),
                size_mb = size as f64 / (1024.0 * 1024.0),
                "Downloaded podcast successfully"
            );
            Ok(path)
        }
        None => Err(MediaError::FileNotFound(base.with_extension("mp4"))),
    }
}

/// Probe the candidate container extensions for the downloaded file.
fn locate_download(base: &Path) -> Option<PathBuf> {
    CANDIDATE_EXTENSIONS
        .iter()
        .map(|ext| base.with_extension(ext))
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_locate_download_prefers_mp4() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("podcast_20250101_120000");

        std::fs::write(base.with_extension("mp4"), b"x").unwrap();
        std::fs::write(base.with_extension("webm"), b"x").unwrap();

        let found = locate_download(&base).unwrap();
        assert_eq!(found.extension().unwrap(), "mp4");
    }

    #[test]
    fn test_locate_download_falls_back_to_other_containers() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("podcast_20250101_120000");

        std::fs::write(base.with_extension("mkv"), b"x").unwrap();

        let found = locate_download(&base).unwrap();
        assert_eq!(found.extension().unwrap(), "mkv");
    }

    #[test]
    fn test_locate_download_missing() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("podcast_20250101_120000");
        assert!(locate_download(&base).is_none());
    }
}
