//! Pipeline behavior against the external tools, driven through stub
//! executables.
//!
//! Each test builds a temp bin directory with shell-script stand-ins for
//! yt-dlp/whisper/ffmpeg and prepends it to PATH. PATH is process-global,
//! so the tests serialize on a lock and restore the original value on drop.

use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::sync::Mutex;

use tempfile::TempDir;

use shortcast_media::{create_clip, download_podcast, generate_subtitles, MediaError};
use shortcast_models::EncodingConfig;

static PATH_LOCK: Mutex<()> = Mutex::new(());

fn write_stub(dir: &Path, name: &str, script: &str) {
    let path = dir.join(name);
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

struct PathGuard {
    original: OsString,
}

impl PathGuard {
    fn prepend(dir: &Path) -> Self {
        let original = std::env::var_os("PATH").unwrap_or_default();
        let mut prepended = dir.as_os_str().to_os_string();
        prepended.push(":");
        prepended.push(&original);
        std::env::set_var("PATH", prepended);
        Self { original }
    }
}

impl Drop for PathGuard {
    fn drop(&mut self) {
        std::env::set_var("PATH", &self.original);
    }
}

#[tokio::test]
async fn test_failed_download_produces_nothing_to_publish() {
    let _lock = PATH_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let bin = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    write_stub(
        bin.path(),
        "yt-dlp",
        "#!/bin/sh\necho 'ERROR: unable to download video' >&2\nexit 1\n",
    );
    let _path = PathGuard::prepend(bin.path());

    let err = download_podcast("https://example.com/ep1", work.path())
        .await
        .unwrap_err();

    match err {
        MediaError::DownloadFailed { message } => {
            assert!(message.contains("unable to download video"));
        }
        other => panic!("unexpected error: {}", other),
    }

    // The failure aborts the pipeline at stage one: no file exists for the
    // clip, publish, or archive stages to act on.
    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_clip_proceeds_without_captions_when_whisper_yields_none() {
    let _lock = PATH_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let bin = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let args_file = bin.path().join("ffmpeg_args.txt");

    // whisper exits cleanly but writes no caption file
    write_stub(bin.path(), "whisper", "#!/bin/sh\nexit 0\n");
    write_stub(
        bin.path(),
        "ffmpeg",
        &format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit 0\n",
            args_file.display()
        ),
    );
    let _path = PathGuard::prepend(bin.path());

    let source = work.path().join("podcast_20250101_120000.mp4");
    fs::write(&source, b"video").unwrap();
    let output = work.path().join("podcast_20250101_120000_clip.mp4");

    create_clip(
        &source,
        &output,
        "00:00:10",
        "00:00:30",
        true,
        &EncodingConfig::default(),
    )
    .await
    .unwrap();

    let args = fs::read_to_string(&args_file).unwrap();
    assert!(args.contains("scale=1080:1920"));
    assert!(
        !args.contains("subtitles="),
        "no caption file, so no burn-in filter: {}",
        args
    );
}

#[tokio::test]
async fn test_clip_burns_captions_when_whisper_produces_srt() {
    let _lock = PATH_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let bin = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let args_file = bin.path().join("ffmpeg_args.txt");

    write_stub(
        bin.path(),
        "whisper",
        "#!/bin/sh\ntouch \"${1%.*}.srt\"\nexit 0\n",
    );
    write_stub(
        bin.path(),
        "ffmpeg",
        &format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit 0\n",
            args_file.display()
        ),
    );
    let _path = PathGuard::prepend(bin.path());

    let source = work.path().join("podcast_20250101_120000.mp4");
    fs::write(&source, b"video").unwrap();
    let output = work.path().join("podcast_20250101_120000_clip.mp4");

    create_clip(
        &source,
        &output,
        "00:00:00",
        "00:00:60",
        true,
        &EncodingConfig::default(),
    )
    .await
    .unwrap();

    let args = fs::read_to_string(&args_file).unwrap();
    assert!(args.contains("subtitles="));
    assert!(args.contains("podcast_20250101_120000.srt"));
}

#[tokio::test]
async fn test_generate_subtitles_none_when_no_caption_file() {
    let _lock = PATH_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let bin = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    write_stub(bin.path(), "whisper", "#!/bin/sh\nexit 0\n");
    let _path = PathGuard::prepend(bin.path());

    let source = work.path().join("episode.mp4");
    fs::write(&source, b"video").unwrap();

    let srt = generate_subtitles(&source).await.unwrap();
    assert!(srt.is_none());
}

#[tokio::test]
async fn test_generate_subtitles_nonzero_exit_is_fatal() {
    let _lock = PATH_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let bin = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    write_stub(
        bin.path(),
        "whisper",
        "#!/bin/sh\necho 'RuntimeError: CUDA out of memory' >&2\nexit 1\n",
    );
    let _path = PathGuard::prepend(bin.path());

    let source = work.path().join("episode.mp4");
    fs::write(&source, b"video").unwrap();

    let err = generate_subtitles(&source).await.unwrap_err();
    match err {
        MediaError::TranscriptionFailed { message } => {
            assert!(message.contains("CUDA out of memory"));
        }
        other => panic!("unexpected error: {}", other),
    }
}
