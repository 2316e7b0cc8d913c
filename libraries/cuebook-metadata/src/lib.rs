//! Cuebook Metadata
//!
//! Embedded tag extraction for standalone songs in the music library.
//!
//! Whatever descriptive fields a song's container exposes are read into a
//! [`cuebook_core::Song`]: optional title/artist/album/genre, an optional
//! tempo (bpm) carried only by one schema generation, and a required
//! duration that falls back to the container's measured playback length.

#![forbid(unsafe_code)]

mod error;
mod reader;

pub use error::{Result, TagError};
pub use reader::read_song;
