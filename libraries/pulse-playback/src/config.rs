//! Player configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! document, then `PULSE_`-prefixed environment variables (nested keys use
//! `__`, e.g. `PULSE_DOM__PLAY=#play-button`).

use crate::error::{PlayerError, Result};
use crate::types::Track;
use crate::volume::validate_volume;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerConfig {
    /// Tracks the playlist starts with
    #[serde(default = "default_seed")]
    pub seed: Vec<SeedTrack>,

    /// Cover shown for tracks without one
    #[serde(default = "default_cover")]
    pub default_cover: String,

    /// Artist assigned to uploaded files
    #[serde(default = "default_placeholder_artist")]
    pub placeholder_artist: String,

    /// Volume applied at startup, in [0, 1]
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f64,

    /// Element selectors used by the browser host
    #[serde(default)]
    pub dom: DomSelectors,

    /// Track length reported by the console host's simulated handle
    #[serde(default = "default_simulated_duration_secs")]
    pub simulated_duration_secs: f64,
}

/// Seed playlist entry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeedTrack {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub cover: Option<String>,
    /// Remote audio URI
    pub audio: String,
}

impl SeedTrack {
    pub fn to_track<F>(&self) -> Track<F> {
        Track::remote(
            self.title.clone(),
            self.artist.clone(),
            self.cover.clone(),
            self.audio.clone(),
        )
    }
}

/// CSS selectors for the widget's render targets and controls
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DomSelectors {
    pub play: String,
    pub prev: String,
    pub next: String,
    pub shuffle: String,
    pub repeat: String,
    pub progress_fill: String,
    pub progress_track: String,
    pub current_time: String,
    pub duration: String,
    pub volume: String,
    pub cover: String,
    pub title: String,
    pub artist: String,
    pub like: String,
    pub upload_button: String,
    pub file_input: String,
    pub cards: String,
}

impl Default for DomSelectors {
    fn default() -> Self {
        Self {
            play: "#play".to_string(),
            prev: "#prev".to_string(),
            next: "#next".to_string(),
            shuffle: "#shuffle".to_string(),
            repeat: "#repeat".to_string(),
            progress_fill: ".progress-fill".to_string(),
            progress_track: ".progress-track".to_string(),
            current_time: "#current-time".to_string(),
            duration: "#duration".to_string(),
            volume: "#volume".to_string(),
            cover: ".now-playing-image".to_string(),
            title: ".song-name a".to_string(),
            artist: ".song-artist a".to_string(),
            like: ".like-button".to_string(),
            upload_button: "#upload-btn".to_string(),
            file_input: "#file-input".to_string(),
            cards: ".card".to_string(),
        }
    }
}

impl PlayerConfig {
    /// Load configuration from an optional TOML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(PlayerError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            settings = settings.add_source(config::File::from(path.to_path_buf()));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PULSE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: PlayerConfig = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML document (no environment layer)
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: PlayerConfig = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.seed.is_empty() {
            return Err(PlayerError::Config(
                "seed playlist must contain at least one track".to_string(),
            ));
        }

        validate_volume(self.initial_volume).map_err(|_| {
            PlayerError::Config(format!(
                "initial_volume must be within [0, 1], got {}",
                self.initial_volume
            ))
        })?;

        if !(self.simulated_duration_secs.is_finite() && self.simulated_duration_secs > 0.0) {
            return Err(PlayerError::Config(format!(
                "simulated_duration_secs must be positive, got {}",
                self.simulated_duration_secs
            )));
        }

        Ok(())
    }
}

// Default values
fn default_seed() -> Vec<SeedTrack> {
    vec![
        SeedTrack {
            title: "Kiss Me More".to_string(),
            artist: "Doja Cat ft. SZA".to_string(),
            cover: Some(
                "https://i.scdn.co/image/ab67616d00001e02ff9ca10b55ce82ae553c8228".to_string(),
            ),
            audio: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3".to_string(),
        },
        SeedTrack {
            title: "Good 4 U".to_string(),
            artist: "Olivia Rodrigo".to_string(),
            cover: Some(
                "https://i.scdn.co/image/ab67616d00001e02c8b444df094279e70d0ed856".to_string(),
            ),
            audio: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3".to_string(),
        },
    ]
}

fn default_cover() -> String {
    "default-cover.jpg".to_string()
}

fn default_placeholder_artist() -> String {
    "Unknown Artist".to_string()
}

fn default_initial_volume() -> f64 {
    1.0
}

fn default_simulated_duration_secs() -> f64 {
    180.0
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            default_cover: default_cover(),
            placeholder_artist: default_placeholder_artist(),
            initial_volume: default_initial_volume(),
            dom: DomSelectors::default(),
            simulated_duration_secs: default_simulated_duration_secs(),
        }
    }
}
