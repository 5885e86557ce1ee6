//! Render targets written by the controller

use crate::types::{PlayIcon, TrackBounds};

/// Everything the player displays
///
/// Implementors only render; they never change controller state themselves.
pub trait PlayerView {
    fn set_cover(&mut self, uri: &str);

    fn set_title(&mut self, title: &str);

    fn set_artist(&mut self, artist: &str);

    /// Progress fill width, in percent
    fn set_progress(&mut self, percent: f64);

    /// Elapsed-time label
    fn set_elapsed(&mut self, label: &str);

    /// Duration label
    fn set_duration(&mut self, label: &str);

    fn set_play_icon(&mut self, icon: PlayIcon);

    fn set_shuffle_active(&mut self, active: bool);

    fn set_repeat_active(&mut self, active: bool);

    fn set_liked(&mut self, liked: bool);

    /// Raw value of the volume input
    fn volume_input(&self) -> String;

    /// Bounding box of the progress track, used for click-to-seek
    fn progress_bounds(&self) -> TrackBounds;

    /// Blocking user-visible confirmation
    fn notify(&mut self, message: &str);
}
