//! Error types for the playback controller

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Playlist has no tracks (seed set was empty)
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Volume input could not be used as a volume
    #[error("Invalid volume: {0:?}")]
    InvalidVolume(String),

    /// Local file could not be turned into a playable URI
    #[error("Object URL error: {0}")]
    ObjectUrl(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required render target is missing from the page
    #[error("Missing element: {0}")]
    MissingElement(String),
}

impl From<config::ConfigError> for PlayerError {
    fn from(err: config::ConfigError) -> Self {
        PlayerError::Config(err.to_string())
    }
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
