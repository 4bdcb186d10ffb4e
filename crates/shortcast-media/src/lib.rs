//! External media tool wrappers for the Shortcast pipeline.
//!
//! This crate provides:
//! - Podcast download via yt-dlp
//! - Subtitle generation via whisper
//! - Vertical clip encoding via ffmpeg (type-safe command building)
//! - Local working-directory file helpers

pub mod clip;
pub mod command;
pub mod download;
pub mod error;
pub mod filters;
pub mod fs_utils;
pub mod transcribe;

pub use clip::{create_clip, subtitle_path_for};
pub use command::{check_ffmpeg, check_whisper, check_ytdlp, FfmpegCommand, FfmpegRunner};
pub use download::{download_podcast, CANDIDATE_EXTENSIONS};
pub use error::{MediaError, MediaResult};
pub use filters::{build_vertical_filter, subtitle_filter, FILTER_VERTICAL};
pub use fs_utils::{ensure_dir, remove_if_exists};
pub use transcribe::generate_subtitles;
