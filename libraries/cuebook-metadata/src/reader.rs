//! Tag reading via lofty

use crate::error::{Result, TagError};
use cuebook_core::types::Song;
use lofty::{Accessor, AudioFile, Probe, TaggedFileExt};
use std::path::Path;

/// Read the embedded tags of a song file.
///
/// Prefers the container's primary tag, falling back to the first tag
/// present. A file with no tag at all still yields a song carrying its
/// path and measured duration; the descriptive fields stay `None`.
pub fn read_song(path: &Path) -> Result<Song> {
    if !path.exists() {
        return Err(TagError::FileNotFound(path.display().to_string()));
    }

    let tagged_file = Probe::open(path)?.read()?;

    // Duration comes from the container properties, not a tag, so it is
    // always available.
    let duration_seconds = tagged_file.properties().duration().as_secs_f64();
    let mut song = Song::new(path.display().to_string(), duration_seconds);

    let tag = tagged_file.primary_tag().or(tagged_file.first_tag());
    if let Some(tag) = tag {
        song.title = tag.title().map(|s| s.to_string());
        song.artist = tag.artist().map(|s| s.to_string());
        song.album = tag.album().map(|s| s.to_string());
        song.genre = tag.genre().map(|s| s.to_string());
        // Tempo only exists in the legacy tag generation; absent elsewhere.
        song.bpm = tag
            .get_string(&lofty::ItemKey::Bpm)
            .and_then(|s| s.parse().ok());
    }

    Ok(song)
}
