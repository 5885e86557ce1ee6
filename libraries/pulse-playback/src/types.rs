//! Core types for the playback controller

use serde::{Deserialize, Serialize};

/// In-memory file handle supplied by a file picker
///
/// The browser host implements this for `web_sys::File`, the console host for
/// plain paths. The handle itself is what gets stored in the playlist; it is
/// only turned into a URI when the track is loaded.
pub trait MediaFile: Clone {
    /// File name as reported by the picker, extension included
    fn name(&self) -> String;
}

/// Where a track's audio comes from
#[derive(Debug, Clone, PartialEq)]
pub enum TrackSource<F> {
    /// Remote URI, handed to the playback handle verbatim
    Remote(String),

    /// User-supplied file, resolved to an object URI at load time
    Local(F),
}

/// One playable playlist entry
#[derive(Debug, Clone, PartialEq)]
pub struct Track<F> {
    /// Display title
    pub title: String,

    /// Display artist
    pub artist: String,

    /// Cover image URI (falls back to the configured default)
    pub cover: Option<String>,

    /// Audio source
    pub source: TrackSource<F>,
}

impl<F> Track<F> {
    /// Create a track backed by a remote URI
    pub fn remote(
        title: impl Into<String>,
        artist: impl Into<String>,
        cover: Option<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            cover,
            source: TrackSource::Remote(uri.into()),
        }
    }

    /// Whether the track was added from a local file
    pub fn is_local(&self) -> bool {
        matches!(self.source, TrackSource::Local(_))
    }
}

/// Playback state
///
/// A play request is asynchronous on every real backend, so the controller
/// distinguishes "asked to play" from "confirmed playing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayState {
    /// Not playing
    Paused,

    /// Play requested, waiting for the handle to confirm
    Requesting,

    /// Handle confirmed playback
    Playing,
}

impl PlayState {
    /// True while playback is requested or running
    pub fn is_playing(self) -> bool {
        matches!(self, PlayState::Requesting | PlayState::Playing)
    }
}

/// Glyph shown on the play/pause control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

impl PlayIcon {
    /// Icon matching a playback state
    pub fn for_state(state: PlayState) -> Self {
        if state.is_playing() {
            PlayIcon::Pause
        } else {
            PlayIcon::Play
        }
    }
}

/// Horizontal geometry of the progress track, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    pub left: f64,
    pub width: f64,
}

/// Mutable player state owned by the controller
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Index of the loaded track
    pub current_index: usize,

    /// Play/pause state
    pub play: PlayState,

    /// Random next-track selection
    pub shuffle: bool,

    /// Loop the current track
    pub repeat: bool,

    /// Volume in [0, 1]
    pub volume: f64,

    /// Like button state
    pub liked: bool,
}

impl PlayerState {
    /// Fresh state at track 0 with the given volume
    pub fn new(volume: f64) -> Self {
        Self {
            current_index: 0,
            play: PlayState::Paused,
            shuffle: false,
            repeat: false,
            volume,
            liked: false,
        }
    }

    /// True while playback is requested or running
    pub fn is_playing(&self) -> bool {
        self.play.is_playing()
    }
}
