//! Subtitle generation using whisper.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, warn};

use crate::command::check_whisper;
use crate::error::{MediaError, MediaResult};

/// Fixed whisper model size.
pub const WHISPER_MODEL: &str = "small";

/// Transcribe a video into an SRT caption file beside the source.
///
/// A non-zero whisper exit is fatal. A clean exit that produced no caption
/// file (silent audio, no speech detected) is not an error: the clip is
/// simply built without burned-in subtitles, so this returns `Ok(None)`.
pub async fn generate_subtitles(input: impl AsRef<Path>) -> MediaResult<Option<PathBuf>> {
    let input = input.as_ref();

    check_whisper()?;

    let output_dir = input.parent().unwrap_or_else(|| Path::new("."));

    info!(input = %input.display(), model = WHISPER_MODEL, "Generating subtitles");

    let output = Command::new("whisper")
        .arg(input)
        .args(["--model", WHISPER_MODEL])
        .arg("--output_dir")
        .arg(output_dir)
        .args(["--output_format", "srt"])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MediaError::transcription_failed(format!(
            "whisper failed: {}",
            stderr.lines().last().unwrap_or("Unknown error")
        )));
    }

    let srt_path = input.with_extension("srt");
    if srt_path.exists() {
        info!(srt = %srt_path.display(), "Subtitles generated");
        Ok(Some(srt_path))
    } else {
        warn!(
            input = %input.display(),
            "whisper produced no caption file, clip will have no subtitles"
        );
        Ok(None)
    }
}
