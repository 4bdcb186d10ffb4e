//! FFmpeg video filter definitions for vertical short-form clips.

use std::path::Path;

/// Vertical 9:16 frame: scale down preserving aspect ratio, then pad to
/// 1080x1920 (letterbox/pillarbox as needed).
pub const FILTER_VERTICAL: &str = concat!(
    "scale=1080:1920:force_original_aspect_ratio=decrease,",
    "pad=1080:1920:(ow-iw)/2:(oh-ih)/2,",
    "setsar=1"
);

/// Burned-in subtitle style.
pub const SUBTITLE_STYLE: &str = "Fontsize=24,PrimaryColour=&HFFFFFF&";

/// Build the subtitle burn-in filter for a caption file.
pub fn subtitle_filter(srt_path: impl AsRef<Path>) -> String {
    format!(
        "subtitles='{}':force_style='{}'",
        srt_path.as_ref().display(),
        SUBTITLE_STYLE
    )
}

/// Build the full video filter chain for a clip.
///
/// When a caption file is present the subtitle burn runs first, on the
/// original-resolution frame, and the scale/pad follows. Reordering these
/// changes the rendered subtitle size, so the order is load-bearing.
pub fn build_vertical_filter(srt_path: Option<&Path>) -> String {
    match srt_path {
        Some(srt) => format!("{},{}", subtitle_filter(srt), FILTER_VERTICAL),
        None => FILTER_VERTICAL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_geometry() {
        assert!(FILTER_VERTICAL.contains("scale=1080:1920:force_original_aspect_ratio=decrease"));
        assert!(FILTER_VERTICAL.contains("pad=1080:1920:(ow-iw)/2:(oh-ih)/2"));
        assert!(FILTER_VERTICAL.ends_with("setsar=1"));
    }

    #[test]
    fn test_subtitles_precede_scale_pad() {
        let filter = build_vertical_filter(Some(Path::new("/tmp/ep1.srt")));

        let sub_pos = filter.find("subtitles=").unwrap();
        let scale_pos = filter.find("scale=").unwrap();
        assert!(sub_pos < scale_pos, "subtitle burn must run before scale/pad");
        assert!(filter.contains("/tmp/ep1.srt"));
        assert!(filter.contains(SUBTITLE_STYLE));
    }

    #[test]
    fn test_no_subtitles_is_plain_vertical() {
        assert_eq!(build_vertical_filter(None), FILTER_VERTICAL);
    }
}
