//! Cuebook Cue
//!
//! Track-listing (.cue) parsing and companion wave-header extraction for
//! Cuebook recordings.
//!
//! This crate provides:
//! - A lenient line-oriented parser for the track-listing grammar the
//!   recording software exports (`sheet`)
//! - A RIFF/WAVE container-header reader for the companion audio file
//!   (`wave`)
//!
//! Support only extends to the fields the recording software exports; any
//! other commands that can appear in cue sheets are ignored for now.

#![forbid(unsafe_code)]

mod error;
pub mod sheet;
pub mod wave;

pub use error::{CueError, Result, WaveError};
pub use sheet::{load_recording, parse_sheet};
pub use wave::read_wave_info;
