//! Vertical clip creation.
//!
//! Sequences optional transcription and the ffmpeg encode: seek to the
//! start offset, trim to the duration, scale/pad to a 1080x1920 vertical
//! frame, and burn in subtitles when a caption file was produced.

use std::path::{Path, PathBuf};
use tracing::info;

use shortcast_models::{parse_timestamp, EncodingConfig};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;
use crate::filters::build_vertical_filter;
use crate::transcribe::generate_subtitles;

/// Caption file path whisper writes for a given source video.
pub fn subtitle_path_for(source: impl AsRef<Path>) -> PathBuf {
    source.as_ref().with_extension("srt")
}

/// Cut a vertical clip from `input` into `output`.
///
/// When `subtitles` is set, transcription runs first; a missing caption
/// file afterwards downgrades to a subtitle-free clip rather than failing.
/// Partial output on encoder failure is left on disk (the caller owns
/// working-directory cleanup).
pub async fn create_clip(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    start_time: &str,
    duration: &str,
    subtitles: bool,
    encoding: &EncodingConfig,
) -> MediaResult<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let start_secs = parse_timestamp(start_time)?;
    let duration_secs = parse_timestamp(duration)?;

    let srt_path = if subtitles {
        generate_subtitles(input).await?
    } else {
        None
    };

    info!(
        input = %input.display(),
        output = %output.display(),
        start = start_secs,
        duration = duration_secs,
        subtitles = srt_path.is_some(),
        "Creating vertical clip"
    );

    let filter = build_vertical_filter(srt_path.as_deref());

    let cmd = FfmpegCommand::new(input, output)
        .seek(start_secs)
        .duration(duration_secs)
        .video_filter(filter)
        .video_codec(&encoding.codec)
        .preset(&encoding.preset)
        .crf(encoding.crf)
        .audio_codec(&encoding.audio_codec)
        .audio_bitrate(&encoding.audio_bitrate);

    FfmpegRunner::new().run(&cmd).await?;

    info!(output = %output.display(), "Clip created");
    Ok(())
}
