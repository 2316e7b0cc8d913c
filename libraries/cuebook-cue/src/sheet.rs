//! Track-listing (cue sheet) parser
//!
//! The grammar is line oriented and case insensitive on command keywords.
//! Sheet-level commands describe the recording itself; a `TRACK` command
//! opens a track context and subsequent commands apply to that track until
//! the next `TRACK` or end of input. Unrecognized commands are ignored so
//! listings from newer exporters still parse.

use crate::error::{CueError, Result};
use cuebook_core::types::{FileRef, Recording, Track};
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Parser state: either collecting sheet-level metadata or accumulating
/// the currently open track.
enum State {
    Header,
    InTrack(Track),
}

/// Parse a track listing into a [`Recording`].
///
/// `file_path` is recorded as the recording's identity key; it is not
/// read from disk here. Filesystem timestamps are filled in by
/// [`load_recording`].
pub fn parse_sheet(file_path: &str, input: &str) -> Result<Recording> {
    let mut recording = Recording::new(file_path);
    let mut state = State::Header;

    for (index, raw_line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        let parts: Vec<&str> = line.split_whitespace().collect();

        let Some(first) = parts.first() else {
            continue;
        };
        let command = first.to_ascii_uppercase();
        let rest = &line[first.len()..];

        match command.as_str() {
            // REM is a comment carrying metadata, stored as ordered
            // key/value pairs since keys repeat and order matters.
            "REM" => {
                if parts.len() >= 3 {
                    let key = parts[1].to_string();
                    let value = parts[2..].join(" ").trim_matches('"').to_string();
                    recording.rem.push((key, value));
                }
            }
            // TITLE applies to the sheet or the open track.
            "TITLE" => {
                let (title, _) = quoted(rest, line_no)?;
                match &mut state {
                    State::Header => recording.title = Some(title),
                    State::InTrack(track) => track.title = Some(title),
                }
            }
            // PERFORMER applies to the sheet or the open track.
            "PERFORMER" => {
                let (performer, _) = quoted(rest, line_no)?;
                match &mut state {
                    State::Header => recording.performer = Some(performer),
                    State::InTrack(track) => track.performer = Some(performer),
                }
            }
            // FILE "<name>" <FORMAT> applies to the sheet or the open track.
            "FILE" => {
                let (name, after) = quoted(rest, line_no)?;
                let format = after
                    .split_whitespace()
                    .next()
                    .ok_or(CueError::Malformed { line: line_no })?;
                let file = FileRef {
                    name,
                    format: format.to_string(),
                };
                match &mut state {
                    State::Header => recording.file = Some(file),
                    State::InTrack(track) => track.file = Some(file),
                }
            }
            // TRACK closes the open track (if any) and opens a new one.
            "TRACK" => {
                if let State::InTrack(track) = std::mem::replace(&mut state, State::Header) {
                    recording.tracks.push(track);
                }
                state = State::InTrack(Track::default());
            }
            // INDEX carries the track start time. The token is kept as
            // the raw literal; its time-code format is not interpreted.
            "INDEX" => {
                if let State::InTrack(track) = &mut state {
                    if let Some(start_time) = parts.get(2) {
                        track.start_time = Some((*start_time).to_string());
                    }
                }
            }
            _ => {}
        }
    }

    // Flush the last open track at end of input.
    if let State::InTrack(track) = state {
        recording.tracks.push(track);
    }

    Ok(recording)
}

/// Read and parse a track-listing file from disk.
///
/// Filesystem timestamps are taken from the file's metadata; a failure to
/// stat the file leaves them at zero rather than failing the parse.
pub fn load_recording(path: &Path) -> Result<Recording> {
    let input = std::fs::read_to_string(path)?;
    let mut recording = parse_sheet(&path.display().to_string(), &input)?;

    if let Ok(metadata) = std::fs::metadata(path) {
        recording.last_modified_unix_seconds = unix_seconds(metadata.modified());
        recording.last_accessed_unix_seconds = unix_seconds(metadata.accessed());
    }

    Ok(recording)
}

fn unix_seconds(time: std::io::Result<std::time::SystemTime>) -> i64 {
    time.ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Extract the text between the first pair of quotes, returning the inner
/// string and the remainder of the line after the closing quote.
///
/// Missing or unterminated quoting is a malformed line.
fn quoted(rest: &str, line_no: usize) -> Result<(String, &str)> {
    let start = rest
        .find('"')
        .ok_or(CueError::Malformed { line: line_no })?;
    let inner = &rest[start + 1..];
    let end = inner
        .find('"')
        .ok_or(CueError::Malformed { line: line_no })?;
    Ok((inner[..end].to_string(), &inner[end + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"REM DATE 2024-11-02
REM RECORDED_BY "rekordbox-dj"
REM DATE 2024-11-03
TITLE "Friday Night Mix"
PERFORMER "DJ Test"
FILE "mix.wav" WAVE
TRACK 01 AUDIO
	TITLE "Opening Track"
	PERFORMER "First Artist"
	FILE "01 Opening Track.flac" WAVE
	INDEX 01 00:00:00
TRACK 02 AUDIO
	TITLE "Second Track"
	PERFORMER "Second Artist"
	INDEX 01 07:41:12
"#;

    #[test]
    fn parses_sheet_level_metadata() {
        let recording = parse_sheet("/r/mix.cue", SHEET).unwrap();
        assert_eq!(recording.file_path, "/r/mix.cue");
        assert_eq!(recording.title.as_deref(), Some("Friday Night Mix"));
        assert_eq!(recording.performer.as_deref(), Some("DJ Test"));

        let file = recording.file.unwrap();
        assert_eq!(file.name, "mix.wav");
        assert_eq!(file.format, "WAVE");
    }

    #[test]
    fn rem_pairs_keep_duplicates_and_order() {
        let recording = parse_sheet("/r/mix.cue", SHEET).unwrap();
        assert_eq!(
            recording.rem,
            vec![
                ("DATE".to_string(), "2024-11-02".to_string()),
                ("RECORDED_BY".to_string(), "rekordbox-dj".to_string()),
                ("DATE".to_string(), "2024-11-03".to_string()),
            ]
        );
    }

    #[test]
    fn tracks_are_in_declaration_order() {
        let recording = parse_sheet("/r/mix.cue", SHEET).unwrap();
        assert_eq!(recording.tracks.len(), 2);
        assert_eq!(recording.tracks[0].title.as_deref(), Some("Opening Track"));
        assert_eq!(recording.tracks[1].title.as_deref(), Some("Second Track"));

        // Start times are raw tokens, not interpreted time codes.
        assert_eq!(recording.tracks[0].start_time.as_deref(), Some("00:00:00"));
        assert_eq!(recording.tracks[1].start_time.as_deref(), Some("07:41:12"));
    }

    #[test]
    fn track_file_overrides_stay_on_the_track() {
        let recording = parse_sheet("/r/mix.cue", SHEET).unwrap();
        let track_file = recording.tracks[0].file.as_ref().unwrap();
        assert_eq!(track_file.name, "01 Opening Track.flac");
        assert!(recording.tracks[1].file.is_none());
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let input = "title \"Lower Case\"\nperformer \"Someone\"\n";
        let recording = parse_sheet("/r/mix.cue", input).unwrap();
        assert_eq!(recording.title.as_deref(), Some("Lower Case"));
        assert_eq!(recording.performer.as_deref(), Some("Someone"));
    }

    #[test]
    fn unterminated_quote_reports_line_number() {
        let input = "TITLE \"Fine\"\nPERFORMER \"No closing quote\n";
        let err = parse_sheet("/r/mix.cue", input).unwrap_err();
        match err {
            CueError::Malformed { line } => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn missing_quotes_are_malformed() {
        let err = parse_sheet("/r/mix.cue", "TITLE Unquoted Title\n").unwrap_err();
        assert!(matches!(err, CueError::Malformed { line: 1 }));
    }

    #[test]
    fn file_without_format_is_malformed() {
        let err = parse_sheet("/r/mix.cue", "FILE \"mix.wav\"\n").unwrap_err();
        assert!(matches!(err, CueError::Malformed { line: 1 }));
    }

    #[test]
    fn unrecognized_commands_are_ignored() {
        let input = "CATALOG 1234567890123\nTITLE \"Kept\"\nPOSTGAP 00:02:00\n";
        let recording = parse_sheet("/r/mix.cue", input).unwrap();
        assert_eq!(recording.title.as_deref(), Some("Kept"));
    }

    #[test]
    fn short_rem_lines_are_ignored() {
        let recording = parse_sheet("/r/mix.cue", "REM DATE\n").unwrap();
        assert!(recording.rem.is_empty());
    }

    #[test]
    fn track_count_matches_track_commands() {
        let mut input = String::new();
        for n in 0..5 {
            input.push_str(&format!("TRACK {n:02} AUDIO\n"));
        }
        let recording = parse_sheet("/r/mix.cue", &input).unwrap();
        assert_eq!(recording.tracks.len(), 5);
    }

    #[test]
    fn empty_input_yields_empty_recording() {
        let recording = parse_sheet("/r/mix.cue", "").unwrap();
        assert!(recording.tracks.is_empty());
        assert!(recording.title.is_none());
        assert!(recording.rem.is_empty());
    }

    #[test]
    fn load_recording_fills_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mix.cue");
        std::fs::write(&path, SHEET).unwrap();

        let recording = load_recording(&path).unwrap();
        assert_eq!(recording.tracks.len(), 2);
        assert!(recording.last_modified_unix_seconds > 0);
    }
}
