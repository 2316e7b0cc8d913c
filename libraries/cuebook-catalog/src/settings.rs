//! Root-directory settings
//!
//! Layered configuration: an optional `cuebook` config file, then
//! `CUEBOOK_`-prefixed environment variables, then platform defaults
//! derived from the user's audio directory. Either root may end up unset
//! on platforms without a known audio directory.

use crate::error::Result;
use serde::Deserialize;

/// Configured scan roots for the two collections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Root directory recordings are exported into
    pub recordings_dir: Option<String>,

    /// Root directory of the standalone music library
    pub music_dir: Option<String>,
}

impl Settings {
    /// Load settings, filling unset roots with platform defaults.
    pub fn load() -> Result<Self> {
        let settings: Self = ::config::Config::builder()
            .add_source(::config::File::with_name("cuebook").required(false))
            .add_source(::config::Environment::with_prefix("CUEBOOK"))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            recordings_dir: settings.recordings_dir.or_else(default_recordings_dir),
            music_dir: settings.music_dir.or_else(default_music_dir),
        })
    }

    /// The default path the browser opens on: the recordings root.
    pub fn default_path(&self) -> Option<String> {
        self.recordings_dir.clone()
    }
}

/// Recordings are exported by the DJ software into a fixed directory
/// under the user's audio dir.
fn default_recordings_dir() -> Option<String> {
    let mut dir = dirs::audio_dir()?;
    dir.push("PioneerDJ/Recording");
    dir.to_str().map(ToString::to_string)
}

fn default_music_dir() -> Option<String> {
    dirs::audio_dir().and_then(|dir| dir.to_str().map(ToString::to_string))
}
