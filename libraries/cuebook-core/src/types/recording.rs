/// Recording domain types
use serde::{Deserialize, Serialize};

/// A continuously captured DJ mix, built from a track-listing (cue) file
/// plus an optional companion wave file found by matching base filename.
///
/// Only the fields the recording software actually exports are supported;
/// anything else in the source grammar is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    /// The original track-listing file path this data was extracted from.
    /// Sole identity key within the recordings collection.
    pub file_path: String,

    /// Last modified (unix seconds) taken from the file's metadata.
    pub last_modified_unix_seconds: i64,

    /// Last accessed (unix seconds) taken from the file's metadata.
    pub last_accessed_unix_seconds: i64,

    /// REM metadata comments as (key, value) pairs. Keys may repeat and
    /// declaration order may carry meaning, so this is a list, not a map.
    pub rem: Vec<(String, String)>,

    /// The title of the recording.
    pub title: Option<String>,

    /// The DJ who created the recording.
    pub performer: Option<String>,

    /// Sheet-level file reference. Points at the audio asset the listing
    /// describes, independent of whether header extraction succeeded.
    pub file: Option<FileRef>,

    /// Tracks in cue-sheet declaration order, never reordered.
    pub tracks: Vec<Track>,

    /// Extracted wave header metadata (if a companion file was found).
    pub wave: Option<WaveInfo>,
}

impl Recording {
    /// Create an empty recording for the given source path
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }
}

/// One track within a recording, as declared by the track-listing file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// The name of the song.
    pub title: Option<String>,

    /// The song's artist.
    pub performer: Option<String>,

    /// The local file where the song is located.
    pub file: Option<FileRef>,

    /// The time at which the track starts playing in the recording.
    /// Kept as the raw literal token from the source grammar; the
    /// time-code format is not canonicalized here.
    pub start_time: Option<String>,
}

/// File reference extracted from a track-listing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub name: String,
    pub format: String,
}

/// Technical metadata extracted from a companion wave (.wav) file,
/// needed for duration display and sample-layout info.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveInfo {
    /// The origin wave file path this data was extracted from.
    pub file_path: String,

    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub sample_format: String,
    pub duration_seconds: f64,
    pub total_samples: u32,
}
