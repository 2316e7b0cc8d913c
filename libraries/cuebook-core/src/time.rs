//! Duration display formatting
//!
//! Shared by the recording and song views: both render durations through
//! the same seconds-to-string conversion.

/// Format a duration in seconds for display.
///
/// Durations of zero or less render as `"00"`. Otherwise the result is
/// `MM:SS`, or `HH:MM:SS` once the duration reaches an hour, with every
/// component zero-padded to width 2.
///
/// The seconds component is rounded; a round up to 60 carries into the
/// minutes (and minutes into hours), so 119.6 renders `"02:00"`.
///
/// # Examples
///
/// ```
/// use cuebook_core::time::format_duration;
///
/// assert_eq!(format_duration(73.0), "01:13");
/// assert_eq!(format_duration(3673.0), "01:01:13");
/// ```
pub fn format_duration(seconds: f64) -> String {
    if seconds <= 0.0 {
        return "00".to_string();
    }

    let mut hours = (seconds / 3600.0).floor() as u64;
    let remainder = seconds - (hours as f64) * 3600.0;
    let mut minutes = (remainder / 60.0).floor() as u64;
    let mut secs = (remainder - (minutes as f64) * 60.0).round() as u64;

    // Normalize the rounding carry so a seconds component never shows 60.
    if secs == 60 {
        secs = 0;
        minutes += 1;
    }
    if minutes == 60 {
        minutes = 0;
        hours += 1;
    }

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
