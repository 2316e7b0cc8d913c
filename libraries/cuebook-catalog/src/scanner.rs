//! Directory scanning for candidate files

use crate::error::{CatalogError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

/// Default track-listing extensions.
const LISTING_EXTENSIONS: &[&str] = &["cue"];

/// Default audio file extensions for the songs pipeline.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "opus", "wav", "m4a", "aac"];

/// Scan configuration, passed explicitly into each pipeline call so the
/// engine holds no hidden shared state.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Recognized track-listing extensions (default: cue)
    pub listing_extensions: Vec<String>,

    /// Recognized audio extensions for the songs pipeline
    pub audio_extensions: Vec<String>,

    /// Upper bound on files parsed concurrently (default: num_cpus)
    pub max_in_flight: usize,

    /// Whether the walker follows symbolic links (default: false)
    pub follow_links: bool,

    /// Optional deadline for a whole pipeline call; expiry aborts
    /// in-flight work and surfaces `Timeout`
    pub timeout: Option<Duration>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            listing_extensions: LISTING_EXTENSIONS.iter().map(ToString::to_string).collect(),
            audio_extensions: AUDIO_EXTENSIONS.iter().map(ToString::to_string).collect(),
            max_in_flight: num_cpus::get(),
            follow_links: false,
            timeout: None,
        }
    }
}

/// Result of walking one root: the candidate paths plus a side list of
/// per-entry failures that were skipped rather than aborting the walk.
///
/// Traversal order is not guaranteed stable; callers must not depend on it.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub files: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, String)>,
}

/// Recursive scanner for files matching a configured extension set
pub struct FileScanner {
    follow_links: bool,
    max_depth: Option<usize>,
}

impl Default for FileScanner {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: None,
        }
    }
}

impl FileScanner {
    /// Create a new file scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum directory depth to traverse
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Walk `root` recursively, selecting files whose extension matches
    /// `extensions` (case-insensitive).
    ///
    /// The root must exist and be a directory. Per-entry read errors
    /// (permission denied, broken symlink) are recorded in the outcome's
    /// failure list and the offending path is excluded; the walk itself
    /// never aborts for one bad entry.
    pub fn scan(&self, root: &Path, extensions: &[String]) -> Result<ScanOutcome> {
        if !root.exists() {
            return Err(CatalogError::NotFound(root.display().to_string()));
        }
        if !root.is_dir() {
            return Err(CatalogError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut outcome = ScanOutcome::default();
        let mut walker = WalkDir::new(root).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    let path = error
                        .path()
                        .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                    tracing::warn!(?error, path = %path.display(), "skipping unreadable entry");
                    outcome.failures.push((path, error.to_string()));
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && matches_extension(path, extensions) {
                outcome.files.push(path.to_path_buf());
            }
        }

        Ok(outcome)
    }
}

/// Check whether a path carries one of the recognized extensions
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn matches_extension_is_case_insensitive() {
        let cue = exts(&["cue"]);
        assert!(matches_extension(Path::new("mix.cue"), &cue));
        assert!(matches_extension(Path::new("MIX.CUE"), &cue));
        assert!(!matches_extension(Path::new("mix.wav"), &cue));
        assert!(!matches_extension(Path::new("mix"), &cue));
    }

    #[test]
    fn missing_root_is_not_found() {
        let scanner = FileScanner::new();
        let err = scanner
            .scan(Path::new("/definitely/does/not/exist"), &exts(&["cue"]))
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn file_root_is_invalid() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("mix.cue");
        fs::write(&file, "TITLE \"x\"").unwrap();

        let err = FileScanner::new().scan(&file, &exts(&["cue"])).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPath(_)));
    }

    #[test]
    fn scan_recurses_and_filters() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        fs::write(base.join("a.cue"), "").unwrap();
        fs::write(base.join("a.wav"), "").unwrap();
        fs::write(base.join("notes.txt"), "").unwrap();

        let subdir = base.join("exports");
        fs::create_dir(&subdir).unwrap();
        fs::write(subdir.join("b.CUE"), "").unwrap();

        let outcome = FileScanner::new().scan(base, &exts(&["cue"])).unwrap();
        assert_eq!(outcome.files.len(), 2);
        assert!(outcome.failures.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn broken_entries_are_reported_not_fatal() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        fs::write(base.join("good.cue"), "").unwrap();
        // A dangling symlink is unreadable once the walker follows it.
        std::os::unix::fs::symlink(base.join("missing"), base.join("dangling")).unwrap();

        let outcome = FileScanner::new()
            .follow_links(true)
            .scan(base, &exts(&["cue"]))
            .unwrap();

        assert_eq!(outcome.files.len(), 1);
        assert!(outcome.files[0].ends_with("good.cue"));
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].0.ends_with("dangling"));
    }

    #[test]
    fn max_depth_limits_recursion() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        fs::write(base.join("top.cue"), "").unwrap();

        let subdir = base.join("deep");
        fs::create_dir(&subdir).unwrap();
        fs::write(subdir.join("nested.cue"), "").unwrap();

        let outcome = FileScanner::new()
            .max_depth(1)
            .scan(base, &exts(&["cue"]))
            .unwrap();
        assert_eq!(outcome.files.len(), 1);
    }

    #[test]
    fn default_config_recognizes_common_audio() {
        let config = ScanConfig::default();
        assert!(config.listing_extensions.contains(&"cue".to_string()));
        assert!(config.audio_extensions.contains(&"mp3".to_string()));
        assert!(config.audio_extensions.contains(&"flac".to_string()));
        assert!(config.max_in_flight > 0);
        assert!(config.timeout.is_none());
    }
}
