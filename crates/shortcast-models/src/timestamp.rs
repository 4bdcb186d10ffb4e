//! Timestamp parsing for clip offsets and durations.
//!
//! The API accepts `HH:MM:SS` (optionally with fractional seconds) for both
//! the start offset and the duration, matching the ffmpeg `-ss`/`-t` syntax.

use thiserror::Error;

/// Error produced when a timestamp string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp format: {0}")]
pub struct TimestampError(pub String);

/// Parse a `HH:MM:SS` or `HH:MM:SS.mmm` timestamp into seconds.
///
/// Components must be plain unsigned digits (the seconds field may carry a
/// digit-only fraction). The value is later interpolated into ffmpeg
/// arguments, so forms f64 would otherwise accept (`nan`, `inf`, `1e3`,
/// signs) are rejected here.
pub fn parse_timestamp(ts: &str) -> Result<f64, TimestampError> {
    let parts: Vec<&str> = ts.split(':').collect();
    if parts.len() != 3 {
        return Err(TimestampError(ts.to_string()));
    }

    let hours = parse_digits(parts[0]).ok_or_else(|| TimestampError(ts.to_string()))?;
    let minutes = parse_digits(parts[1]).ok_or_else(|| TimestampError(ts.to_string()))?;
    let seconds = parse_seconds(parts[2]).ok_or_else(|| TimestampError(ts.to_string()))?;

    Ok(hours * 3600.0 + minutes * 60.0 + seconds)
}

fn parse_digits(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_seconds(s: &str) -> Option<f64> {
    let (whole, fraction) = match s.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (s, None),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(f) = fraction {
        if f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    s.parse().ok()
}

/// Check whether a string is a well-formed timestamp.
pub fn is_valid_timestamp(ts: &str) -> bool {
    parse_timestamp(ts).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        assert!((parse_timestamp("00:00:00").unwrap()).abs() < 0.001);
        assert!((parse_timestamp("00:01:00").unwrap() - 60.0).abs() < 0.001);
        assert!((parse_timestamp("01:00:00").unwrap() - 3600.0).abs() < 0.001);
        assert!((parse_timestamp("00:00:30.500").unwrap() - 30.5).abs() < 0.001);
        // The API default duration uses 60 in the seconds field
        assert!((parse_timestamp("00:00:60").unwrap() - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("10").is_err());
        assert!(parse_timestamp("00:10").is_err());
        assert!(parse_timestamp("aa:bb:cc").is_err());
        assert!(parse_timestamp("00:-1:00").is_err());
    }

    #[test]
    fn test_parse_timestamp_rejects_non_digit_f64_forms() {
        // These all parse as f64 but must never reach ffmpeg as -ss/-t values
        assert!(parse_timestamp("nan:00:00").is_err());
        assert!(parse_timestamp("inf:00:00").is_err());
        assert!(parse_timestamp("1e3:00:00").is_err());
        assert!(parse_timestamp("00:00:1e1").is_err());
        assert!(parse_timestamp("+1:00:00").is_err());
        assert!(parse_timestamp("00:00:30.").is_err());
        assert!(parse_timestamp("00:00:.5").is_err());
    }
}
