//! Scan pipelines and single-item lookups
//!
//! Bulk pipelines discover candidates first, then hand each file to a
//! blocking worker; results are merged at a single join point. Every
//! worker produces an immutable record, so no locking is involved. One
//! unreadable file never fails the whole call: it is skipped and reported
//! in the failure list.

use crate::error::{CatalogError, Result};
use crate::scanner::{FileScanner, ScanConfig, ScanOutcome};
use cuebook_core::types::{Recording, Song, WaveInfo};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of a bulk pipeline: the parsed records plus the paths that were
/// skipped, each with the error that caused the skip.
#[derive(Debug)]
pub struct ScanReport<T> {
    pub items: Vec<T>,
    pub failures: Vec<(PathBuf, String)>,
}

/// Find and parse every recording under `dir`.
///
/// Runs the scanner, the track-listing parser, and the companion wave
/// header reader. A companion wave file is located by swapping the
/// listing's extension for `.wav`; header failures there only cost the
/// recording its wave metadata, never the recording itself.
pub async fn find_recordings(dir: &Path, config: &ScanConfig) -> Result<ScanReport<Recording>> {
    with_deadline(config, find_recordings_inner(dir, config)).await
}

async fn find_recordings_inner(dir: &Path, config: &ScanConfig) -> Result<ScanReport<Recording>> {
    let started = Instant::now();
    let outcome = scan_candidates(dir, config, &config.listing_extensions).await?;

    let report = process_files(outcome.files, outcome.failures, config, |path| {
        load_one_recording(&path)
    })
    .await?;

    tracing::info!(
        elapsed = ?started.elapsed(),
        found = report.items.len(),
        failed = report.failures.len(),
        "scanned recordings"
    );
    Ok(report)
}

/// Find and tag-read every song under `dir`.
pub async fn find_songs(dir: &Path, config: &ScanConfig) -> Result<ScanReport<Song>> {
    with_deadline(config, find_songs_inner(dir, config)).await
}

async fn find_songs_inner(dir: &Path, config: &ScanConfig) -> Result<ScanReport<Song>> {
    let started = Instant::now();
    let outcome = scan_candidates(dir, config, &config.audio_extensions).await?;

    let report = process_files(outcome.files, outcome.failures, config, |path| {
        cuebook_metadata::read_song(&path).map_err(CatalogError::from)
    })
    .await?;

    tracing::info!(
        elapsed = ?started.elapsed(),
        found = report.items.len(),
        failed = report.failures.len(),
        "scanned songs"
    );
    Ok(report)
}

/// Parse a single recording by path.
///
/// Unlike the bulk pipeline this propagates the failure directly:
/// `NotFound` when the path is absent, `Malformed` when the listing does
/// not parse.
pub async fn get_recording(path: &Path) -> Result<Recording> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.display().to_string()));
    }
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || load_one_recording(&path)).await?
}

/// Tag-read a single song by path, propagating `NotFound`/`Unsupported`.
pub async fn get_song(path: &Path) -> Result<Song> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.display().to_string()));
    }
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || {
        cuebook_metadata::read_song(&path).map_err(CatalogError::from)
    })
    .await?
}

/// Walk `dir` off the executor. The walk can take a while on a large
/// root, so it runs as a blocking task; the pipeline deadline is then
/// observed during discovery too, not only during per-file parsing.
async fn scan_candidates(
    dir: &Path,
    config: &ScanConfig,
    extensions: &[String],
) -> Result<ScanOutcome> {
    let root = dir.to_path_buf();
    let extensions = extensions.to_vec();
    let follow_links = config.follow_links;
    tokio::task::spawn_blocking(move || {
        FileScanner::new()
            .follow_links(follow_links)
            .scan(&root, &extensions)
    })
    .await?
}

/// Run per-file work in bounded batches of blocking tasks, merging results
/// and failures at the join point.
async fn process_files<T, F>(
    files: Vec<PathBuf>,
    walk_failures: Vec<(PathBuf, String)>,
    config: &ScanConfig,
    work: F,
) -> Result<ScanReport<T>>
where
    T: Send + 'static,
    F: Fn(PathBuf) -> Result<T> + Clone + Send + 'static,
{
    let mut report = ScanReport {
        items: Vec::with_capacity(files.len()),
        failures: walk_failures,
    };

    for batch in files.chunks(config.max_in_flight.max(1)) {
        let handles: Vec<_> = batch
            .iter()
            .cloned()
            .map(|path| {
                let work = work.clone();
                tokio::task::spawn_blocking(move || {
                    let result = work(path.clone());
                    (path, result)
                })
            })
            .collect();

        for handle in handles {
            let (path, result) = handle.await?;
            match result {
                Ok(item) => report.items.push(item),
                Err(error) => {
                    tracing::warn!(%error, path = %path.display(), "skipping unreadable file");
                    report.failures.push((path, error.to_string()));
                }
            }
        }
    }

    Ok(report)
}

fn load_one_recording(path: &Path) -> Result<Recording> {
    let mut recording = cuebook_cue::load_recording(path)?;
    recording.wave = find_companion_wave(path);
    Ok(recording)
}

/// Try to read the wave file sitting next to a track listing (same base
/// filename, `.wav` extension). Failures are logged and otherwise ignored;
/// the recording simply goes without wave metadata.
fn find_companion_wave(listing_path: &Path) -> Option<WaveInfo> {
    let wave_path = listing_path.with_extension("wav");
    if !wave_path.exists() {
        return None;
    }

    match cuebook_cue::read_wave_info(&wave_path) {
        Ok(info) => Some(info),
        Err(error) => {
            tracing::warn!(%error, path = %wave_path.display(), "failed to read companion wave file");
            None
        }
    }
}

async fn with_deadline<T>(
    config: &ScanConfig,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    match config.timeout {
        Some(deadline) => tokio::time::timeout(deadline, fut)
            .await
            .map_err(|_| CatalogError::Timeout)?,
        None => fut.await,
    }
}
