//! Platform-agnostic playback handle trait
//!
//! Abstracts the native audio element (HTML `<audio>` in the browser, a
//! simulated clock in the console host).

use crate::error::Result;
use crate::types::MediaFile;

/// Native playback handle
///
/// The controller is the only component that mutates the handle. The handle
/// reports back through [`HandleEvent`]s delivered to
/// `PlaybackController::handle_event`.
pub trait PlaybackHandle {
    /// File handle type accepted for local tracks
    type File: MediaFile;

    /// Obtain a transient URI that lets `file` be used as a source
    fn object_url(&mut self, file: &Self::File) -> Result<String>;

    /// Replace the current source
    fn set_source(&mut self, uri: &str);

    /// Ask the backend to start playback
    ///
    /// The request may complete later. Implementors report the outcome with
    /// [`HandleEvent::PlayStarted`] or [`HandleEvent::PlayRejected`], carrying
    /// the same `request` id.
    fn request_play(&mut self, request: PlayRequest);

    /// Stop playback, keeping the position
    fn pause(&mut self);

    /// Current position in seconds
    fn current_time(&self) -> f64;

    /// Move the playback position (seconds)
    fn set_current_time(&mut self, seconds: f64);

    /// Track duration in seconds, `None` while unknown
    fn duration(&self) -> Option<f64>;

    /// Native loop flag
    fn set_loop(&mut self, enabled: bool);

    /// Output volume in [0, 1]
    fn set_volume(&mut self, volume: f64);
}

/// Identifies one play request so late outcomes can be matched or discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayRequest(pub u64);

/// Events emitted by the playback handle
#[derive(Debug, Clone, PartialEq)]
pub enum HandleEvent {
    /// Duration of the new source is known
    MetadataLoaded,

    /// Playback position advanced
    TimeUpdate,

    /// Source played to the end
    Ended,

    /// A play request succeeded
    PlayStarted(PlayRequest),

    /// A play request was rejected (autoplay policy, aborted load, decode error)
    PlayRejected {
        request: PlayRequest,
        reason: String,
    },
}

/// A duration is usable only when finite and positive
pub(crate) fn known_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}
