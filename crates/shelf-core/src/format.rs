//! Display formatting for playback times and track filenames.

/// Convert seconds to a zero-padded "MM:SS" string.
///
/// Fails closed to "00:00" for NaN, infinite, or negative input. There is
/// no hour field; long durations overflow into the minutes field.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }
    let total = seconds as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// "MM:SS / MM:SS" readout for the current position and total duration.
/// An unknown duration renders as "00:00", matching a freshly loaded track.
pub fn format_timeline(position_secs: f64, duration_secs: Option<f64>) -> String {
    let duration = duration_secs
        .map(format_duration)
        .unwrap_or_else(|| "00:00".to_string());
    format!("{} / {}", format_duration(position_secs), duration)
}

/// Human-readable title for a track filename: percent-decode, then strip
/// the final dot-delimited extension segment.
///
/// Filenames with multiple dots lose only the final segment ("a.b.mp3"
/// becomes "a.b"). Input with no percent-encoding and no extension passes
/// through unchanged, so the function is idempotent on its own output.
pub fn display_title(file_name: &str) -> String {
    let decoded = percent_decode(file_name);
    match decoded.rfind('.') {
        Some(idx) if idx > 0 => decoded[..idx].to_string(),
        _ => decoded,
    }
}

/// Lenient percent-decoding: valid %XX escapes become bytes, anything
/// malformed is kept literally. Invalid UTF-8 is replaced, never an error.
fn percent_decode(input: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(input.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_basic() {
        assert_eq!(format_duration(0.0), "00:00");
        assert_eq!(format_duration(75.0), "01:15");
        assert_eq!(format_duration(59.9), "00:59");
    }

    #[test]
    fn test_format_duration_fails_closed() {
        assert_eq!(format_duration(f64::NAN), "00:00");
        assert_eq!(format_duration(-5.0), "00:00");
        assert_eq!(format_duration(f64::INFINITY), "00:00");
    }

    #[test]
    fn test_format_duration_overflows_into_minutes() {
        // 1h 1m 5s — no hour field
        assert_eq!(format_duration(3665.0), "61:05");
    }

    #[test]
    fn test_format_timeline() {
        assert_eq!(format_timeline(75.0, Some(200.0)), "01:15 / 03:20");
        assert_eq!(format_timeline(0.0, None), "00:00 / 00:00");
    }

    #[test]
    fn test_display_title_decodes_and_strips_extension() {
        assert_eq!(display_title("My%20Song.mp3"), "My Song");
        assert_eq!(display_title("a.b.mp3"), "a.b");
    }

    #[test]
    fn test_display_title_idempotent_on_decoded_input() {
        let once = display_title("My%20Song.mp3");
        assert_eq!(display_title(&once), once);
        assert_eq!(display_title("Already Decoded"), "Already Decoded");
    }

    #[test]
    fn test_display_title_keeps_leading_dot_names() {
        assert_eq!(display_title(".hidden"), ".hidden");
    }

    #[test]
    fn test_percent_decode_leaves_malformed_escapes() {
        assert_eq!(percent_decode("50%25 off"), "50% off");
        assert_eq!(percent_decode("50% off"), "50% off");
        assert_eq!(percent_decode("trailing%2"), "trailing%2");
    }
}
