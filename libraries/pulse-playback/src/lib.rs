//! Pulse Player - Playback Control
//!
//! Platform-agnostic playlist and playback controller for the Pulse Player
//! widget.
//!
//! This crate provides:
//! - Append-only playlist seeded from configuration
//! - Play/pause with request-and-confirm state (`Paused`, `Requesting`, `Playing`)
//! - Sequential and shuffled next, circular previous
//! - Repeat (native loop flag), like, volume and click-to-seek
//! - Local file uploads resolved to object URIs at load time
//! - Progress and duration labels (`M:SS`)
//!
//! # Architecture
//!
//! The controller never touches a platform API directly. The audio element
//! is a [`PlaybackHandle`], the render targets are a [`PlayerView`]. The
//! `wasm` feature provides both over `HtmlAudioElement` and the DOM; tests and
//! the console host provide their own.
//!
//! # Example
//!
//! ```rust
//! use pulse_playback::{
//!     HandleEvent, MediaFile, PlayIcon, PlayRequest, PlaybackController, PlaybackHandle,
//!     PlayerConfig, PlayerView, Result, TrackBounds,
//! };
//!
//! #[derive(Clone)]
//! struct NamedFile(String);
//!
//! impl MediaFile for NamedFile {
//!     fn name(&self) -> String {
//!         self.0.clone()
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Silent {
//!     requests: Vec<PlayRequest>,
//! }
//!
//! impl PlaybackHandle for Silent {
//!     type File = NamedFile;
//!
//!     fn object_url(&mut self, file: &NamedFile) -> Result<String> {
//!         Ok(format!("blob:{}", file.0))
//!     }
//!     fn set_source(&mut self, _uri: &str) {}
//!     fn request_play(&mut self, request: PlayRequest) {
//!         self.requests.push(request);
//!     }
//!     fn pause(&mut self) {}
//!     fn current_time(&self) -> f64 {
//!         0.0
//!     }
//!     fn set_current_time(&mut self, _seconds: f64) {}
//!     fn duration(&self) -> Option<f64> {
//!         None
//!     }
//!     fn set_loop(&mut self, _enabled: bool) {}
//!     fn set_volume(&mut self, _volume: f64) {}
//! }
//!
//! #[derive(Default)]
//! struct Screen {
//!     title: String,
//! }
//!
//! impl PlayerView for Screen {
//!     fn set_cover(&mut self, _uri: &str) {}
//!     fn set_title(&mut self, title: &str) {
//!         self.title = title.to_string();
//!     }
//!     fn set_artist(&mut self, _artist: &str) {}
//!     fn set_progress(&mut self, _percent: f64) {}
//!     fn set_elapsed(&mut self, _label: &str) {}
//!     fn set_duration(&mut self, _label: &str) {}
//!     fn set_play_icon(&mut self, _icon: PlayIcon) {}
//!     fn set_shuffle_active(&mut self, _active: bool) {}
//!     fn set_repeat_active(&mut self, _active: bool) {}
//!     fn set_liked(&mut self, _liked: bool) {}
//!     fn volume_input(&self) -> String {
//!         "1".to_string()
//!     }
//!     fn progress_bounds(&self) -> TrackBounds {
//!         TrackBounds { left: 0.0, width: 100.0 }
//!     }
//!     fn notify(&mut self, _message: &str) {}
//! }
//!
//! # fn main() -> Result<()> {
//! let mut player =
//!     PlaybackController::new(&PlayerConfig::default(), Silent::default(), Screen::default())?;
//! assert_eq!(player.view().title, "Kiss Me More");
//!
//! player.next_track()?;
//! assert_eq!(player.view().title, "Good 4 U");
//!
//! player.toggle_play();
//! let request = player.handle().requests[0];
//! player.handle_event(HandleEvent::PlayStarted(request))?;
//! assert!(player.is_playing());
//!
//! player.handle_file_upload(vec![NamedFile("demo.mp3".to_string())])?;
//! assert_eq!(player.playlist()[2].title, "demo");
//! # Ok(())
//! # }
//! ```

pub mod config;
mod controller;
mod error;
pub mod events;
pub mod format;
mod shuffle;
mod source;
pub mod types;
mod view;
pub mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use config::{DomSelectors, PlayerConfig, SeedTrack};
pub use controller::PlaybackController;
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use format::format_time;
pub use source::{HandleEvent, PlayRequest, PlaybackHandle};
pub use types::{MediaFile, PlayIcon, PlayState, PlayerState, Track, TrackBounds, TrackSource};
pub use view::PlayerView;
