//! Display helpers shared by frontends.

use chrono::{Local, TimeZone};

/// Re-join a raw command blob on whitespace runs, one token per line.
///
/// A formatting transform for viewer legibility, not a semantic parse;
/// the blob itself stays opaque.
#[must_use]
pub fn format_command_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("\n")
}

/// Render an epoch-seconds timestamp as a local wall-clock string.
///
/// Returns `"-"` for timestamps outside the representable range.
#[must_use]
pub fn format_epoch(secs: i64) -> String {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map_or_else(|| "-".to_string(), |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_text_one_token_per_line() {
        assert_eq!(format_command_text("foo   bar\nbaz"), "foo\nbar\nbaz");
    }

    #[test]
    fn command_text_collapses_mixed_whitespace() {
        assert_eq!(format_command_text("  a \t b\r\n  c  "), "a\nb\nc");
    }

    #[test]
    fn command_text_empty() {
        assert_eq!(format_command_text(""), "");
        assert_eq!(format_command_text("   \n\t "), "");
    }

    #[test]
    fn epoch_in_range_renders() {
        let out = format_epoch(1_700_000_000);
        assert_ne!(out, "-");
        assert_eq!(out.len(), 19);
    }

    #[test]
    fn epoch_out_of_range_is_dash() {
        assert_eq!(format_epoch(i64::MAX), "-");
    }
}
