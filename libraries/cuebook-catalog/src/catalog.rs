//! Per-request catalog of recordings and songs

use crate::error::{CatalogError, Result};
use crate::pipeline::{find_recordings, find_songs};
use crate::scanner::ScanConfig;
use cuebook_core::types::{Recording, Song};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Path-keyed snapshot of everything the most recent scan produced.
///
/// A catalog is built fresh per request and discarded with the response;
/// it never mutates after construction. Lookups only see what that one
/// scan found.
#[derive(Debug, Default)]
pub struct Catalog {
    recordings: HashMap<String, Recording>,
    songs: HashMap<String, Song>,
    failures: Vec<(PathBuf, String)>,
}

impl Catalog {
    /// Build a catalog by scanning the given roots.
    ///
    /// Either root may be absent (unset in settings), in which case that
    /// collection is simply empty.
    pub async fn scan(
        recordings_dir: Option<&Path>,
        music_dir: Option<&Path>,
        config: &ScanConfig,
    ) -> Result<Self> {
        let mut catalog = Self::default();

        if let Some(dir) = recordings_dir {
            let report = find_recordings(dir, config).await?;
            for recording in report.items {
                catalog
                    .recordings
                    .insert(recording.file_path.clone(), recording);
            }
            catalog.failures.extend(report.failures);
        }

        if let Some(dir) = music_dir {
            let report = find_songs(dir, config).await?;
            for song in report.items {
                catalog.songs.insert(song.file_path.clone(), song);
            }
            catalog.failures.extend(report.failures);
        }

        Ok(catalog)
    }

    /// Look up the recording for `path`, failing with `NotFound` when the
    /// path was absent from this catalog's scan.
    pub fn recording(&self, path: &str) -> Result<&Recording> {
        self.recordings
            .get(path)
            .ok_or_else(|| CatalogError::NotFound(path.to_string()))
    }

    /// Look up the song for `path`, failing with `NotFound` when the path
    /// was absent from this catalog's scan.
    pub fn song(&self, path: &str) -> Result<&Song> {
        self.songs
            .get(path)
            .ok_or_else(|| CatalogError::NotFound(path.to_string()))
    }

    /// Full snapshot of the recordings collection.
    pub fn recordings(&self) -> Vec<Recording> {
        self.recordings.values().cloned().collect()
    }

    /// Full snapshot of the songs collection.
    pub fn songs(&self) -> Vec<Song> {
        self.songs.values().cloned().collect()
    }

    /// Paths that failed during the scan, with the error that skipped them.
    pub fn failures(&self) -> &[(PathBuf, String)] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_roots_yield_empty_catalog() {
        let config = ScanConfig::default();
        let catalog = Catalog::scan(None, None, &config).await.unwrap();
        assert!(catalog.recordings().is_empty());
        assert!(catalog.songs().is_empty());
    }

    #[tokio::test]
    async fn lookup_of_unknown_path_is_not_found() {
        let config = ScanConfig::default();
        let catalog = Catalog::scan(None, None, &config).await.unwrap();

        let err = catalog.recording("/recordings/ghost.cue").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));

        let err = catalog.song("/music/ghost.mp3").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn missing_root_fails_catalog_construction() {
        let config = ScanConfig::default();
        let err = Catalog::scan(Some(Path::new("/does/not/exist")), None, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}
