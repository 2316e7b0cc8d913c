//! Cuebook Core
//!
//! Domain types, error handling, and pure query helpers for Cuebook.
//!
//! This crate provides the foundational building blocks used by the
//! ingestion crates and the browser shell:
//! - **Domain Types**: `Recording`, `Track`, `Song`, `WaveInfo`, etc.
//! - **Error Handling**: Unified `CuebookError` and `Result` types
//! - **Query Helpers**: substring search and duration display formatting
//!
//! # Example
//!
//! ```rust
//! use cuebook_core::types::Song;
//! use cuebook_core::{search, time};
//!
//! let songs = vec![Song::new("/music/track.flac", 73.0)];
//! let hits = search::search(&songs, "  ");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(time::format_duration(73.0), "01:13");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod search;
pub mod time;
pub mod types;

// Re-export commonly used types
pub use error::{CuebookError, Result};
pub use search::Searchable;
pub use types::{FileRef, Recording, Song, Track, WaveInfo};
