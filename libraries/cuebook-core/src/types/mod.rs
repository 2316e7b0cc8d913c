//! Domain types for the Cuebook catalog
//!
//! All entities are immutable value records: they are built once per
//! scan/parse pass and never mutated in place afterwards. Optional fields
//! stay `None` when the source lacks them; "missing" and "present but
//! empty" are distinct states.

mod recording;
mod song;

pub use recording::{FileRef, Recording, Track, WaveInfo};
pub use song::Song;
