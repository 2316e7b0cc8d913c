/// Song domain type
use serde::{Deserialize, Serialize};

/// A standalone, individually tagged audio file in the music library.
///
/// The schema carries the superset of fields seen across tag generations:
/// `bpm` only exists in one generation of the format, so it stays optional
/// for every record rather than being assumed present (or removed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// File path on disk. Sole identity key within the songs collection.
    pub file_path: String,

    /// Track title.
    pub title: Option<String>,

    /// Artist name.
    pub artist: Option<String>,

    /// Album name.
    pub album: Option<String>,

    /// Genre.
    pub genre: Option<String>,

    /// Tempo in beats per minute (legacy schema generation only).
    pub bpm: Option<f64>,

    /// Playback length in seconds. Always present; falls back to the
    /// container's measured length when no explicit duration tag exists.
    pub duration_seconds: f64,
}

impl Song {
    /// Create a song with only the required fields set
    pub fn new(file_path: impl Into<String>, duration_seconds: f64) -> Self {
        Self {
            file_path: file_path.into(),
            title: None,
            artist: None,
            album: None,
            genre: None,
            bpm: None,
            duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_optional_fields_default_to_none() {
        let song = Song::new("/music/track.flac", 180.0);
        assert!(song.title.is_none());
        assert!(song.bpm.is_none());
        assert_eq!(song.duration_seconds, 180.0);
    }

    #[test]
    fn song_deserializes_without_bpm() {
        // Records written before the bpm field existed must stay readable.
        let json = r#"{"filePath":"/music/a.mp3","title":"A","artist":null,
            "album":null,"genre":null,"durationSeconds":12.5}"#;
        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song.bpm, None);
        assert_eq!(song.duration_seconds, 12.5);
    }
}
