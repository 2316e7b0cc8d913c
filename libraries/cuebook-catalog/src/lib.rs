//! Cuebook Catalog
//!
//! Discovery and aggregation for Cuebook: walks the configured roots,
//! runs the cue/wave/tag readers over candidate files, and exposes the
//! resulting per-request catalog to the browser shell.
//!
//! The catalog is rebuilt on every request; there is no cross-call cache.
//! That trades repeated filesystem and parse work for always-fresh results,
//! which is deliberate. Bulk pipelines never fail wholesale because of one
//! bad file: failing paths are skipped and reported alongside the results.
//!
//! # Example
//!
//! ```rust,no_run
//! use cuebook_catalog::{find_recordings, ScanConfig};
//! use std::path::Path;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScanConfig::default();
//! let report = find_recordings(Path::new("/music/recordings"), &config).await?;
//! for (path, error) in &report.failures {
//!     eprintln!("skipped {}: {error}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod catalog;
mod error;
mod pipeline;
mod reveal;
mod scanner;
mod settings;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use pipeline::{find_recordings, find_songs, get_recording, get_song, ScanReport};
pub use reveal::open_file_location;
pub use scanner::{FileScanner, ScanConfig, ScanOutcome};
pub use settings::Settings;
