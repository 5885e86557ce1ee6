//! Player events
//!
//! Event-based communication for hosts that mirror player state elsewhere
//! (JavaScript callbacks, console output). Events are buffered by the
//! controller and drained by the host after each interaction.

use crate::types::PlayState;
use serde::{Deserialize, Serialize};

/// Events emitted by the controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// A track was loaded into the playback handle
    TrackChanged {
        index: usize,
        title: String,
        artist: String,
    },

    /// Play/pause state changed
    StateChanged { state: PlayState },

    ShuffleChanged { enabled: bool },

    RepeatChanged { enabled: bool },

    LikeChanged { liked: bool },

    VolumeChanged { volume: f64 },

    /// Uploaded files were appended to the playlist
    PlaylistExtended {
        /// Number of tracks added
        added: usize,
        /// Playlist length afterwards
        length: usize,
    },

    /// A play request was rejected by the backend
    PlaybackFailed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = PlayerEvent::StateChanged {
            state: PlayState::Requesting,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"stateChanged","state":"requesting"}"#);
    }

    #[test]
    fn track_changed_roundtrip() {
        let event = PlayerEvent::TrackChanged {
            index: 1,
            title: "Good 4 U".to_string(),
            artist: "Olivia Rodrigo".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: PlayerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
