//! Playback controller - core orchestration
//!
//! Owns the playlist and player state, drives the playback handle and pushes
//! every change into the view.

use crate::{
    config::PlayerConfig,
    error::{PlayerError, Result},
    events::PlayerEvent,
    format::{format_time, strip_extension},
    shuffle::{next_index, prev_index, random_index},
    source::{known_duration, HandleEvent, PlayRequest, PlaybackHandle},
    types::{MediaFile, PlayIcon, PlayState, PlayerState, Track, TrackSource},
    view::PlayerView,
    volume::parse_volume,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

/// Central playback control
///
/// One controller exists per widget. Every user control and every handle
/// event goes through one of its methods; nothing else mutates the handle or
/// the view.
pub struct PlaybackController<H: PlaybackHandle, V: PlayerView> {
    playlist: Vec<Track<H::File>>,
    state: PlayerState,

    handle: H,
    view: V,

    // Upload defaults
    default_cover: String,
    placeholder_artist: String,

    // Play request bookkeeping
    next_request: u64,
    outstanding: Option<PlayRequest>,

    rng: StdRng,

    // Event queue for host synchronization
    pending_events: Vec<PlayerEvent>,
}

impl<H: PlaybackHandle, V: PlayerView> PlaybackController<H, V> {
    /// Create a controller and render the first seed track
    pub fn new(config: &PlayerConfig, handle: H, view: V) -> Result<Self> {
        Self::with_rng(config, handle, view, StdRng::from_entropy())
    }

    /// Create a controller with a caller-supplied random source
    pub fn with_rng(config: &PlayerConfig, mut handle: H, view: V, rng: StdRng) -> Result<Self> {
        if config.seed.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }

        handle.set_volume(config.initial_volume);

        let mut controller = Self {
            playlist: config.seed.iter().map(|seed| seed.to_track()).collect(),
            state: PlayerState::new(config.initial_volume),
            handle,
            view,
            default_cover: config.default_cover.clone(),
            placeholder_artist: config.placeholder_artist.clone(),
            next_request: 0,
            outstanding: None,
            rng,
            pending_events: Vec::new(),
        };

        controller.load_track(0)?;
        Ok(controller)
    }

    // ===== Track Loading =====

    /// Load the track at `index` into the playback handle
    ///
    /// Playback continues on the new track if it was playing before.
    pub fn load_track(&mut self, index: usize) -> Result<()> {
        let track = self
            .playlist
            .get(index)
            .ok_or(PlayerError::IndexOutOfBounds(index))?;

        let uri = match &track.source {
            TrackSource::Remote(uri) => uri.clone(),
            TrackSource::Local(file) => self.handle.object_url(file)?,
        };
        self.handle.set_source(&uri);

        let cover = track.cover.as_deref().unwrap_or(&self.default_cover);
        self.view.set_cover(cover);
        self.view.set_title(&track.title);
        self.view.set_artist(&track.artist);
        self.view.set_progress(0.0);
        self.view.set_elapsed(&format_time(0.0));

        debug!(index, title = %track.title, uri = %uri, "Loaded track");

        self.pending_events.push(PlayerEvent::TrackChanged {
            index,
            title: track.title.clone(),
            artist: track.artist.clone(),
        });
        self.state.current_index = index;

        if self.state.is_playing() {
            self.start_request();
            self.refresh_play_icon();
        }

        Ok(())
    }

    // ===== Playback Control =====

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) {
        if self.state.is_playing() {
            self.outstanding = None;
            self.handle.pause();
            self.set_play_state(PlayState::Paused);
        } else {
            self.start_request();
        }
        self.refresh_play_icon();
    }

    /// Advance to the next track (random pick in shuffle mode)
    pub fn next_track(&mut self) -> Result<()> {
        let len = self.playlist.len();
        let index = if self.state.shuffle {
            random_index(&mut self.rng, len)
        } else {
            next_index(self.state.current_index, len)
        };
        self.load_track(index)
    }

    /// Go back one track, wrapping to the end; ignores shuffle
    pub fn prev_track(&mut self) -> Result<()> {
        let index = prev_index(self.state.current_index, self.playlist.len());
        self.load_track(index)
    }

    /// Play the track behind a card in the card grid
    ///
    /// Cards map onto the playlist by position only.
    pub fn select_card(&mut self, card_index: usize) -> Result<()> {
        let index = card_index % self.playlist.len();
        self.load_track(index)?;
        if !self.state.is_playing() {
            self.toggle_play();
        }
        Ok(())
    }

    // ===== Modes =====

    pub fn toggle_shuffle(&mut self) {
        self.state.shuffle = !self.state.shuffle;
        self.view.set_shuffle_active(self.state.shuffle);
        debug!(enabled = self.state.shuffle, "Shuffle toggled");
        self.pending_events.push(PlayerEvent::ShuffleChanged {
            enabled: self.state.shuffle,
        });
    }

    /// Toggle repeat; also drives the handle's native loop flag
    pub fn toggle_repeat(&mut self) {
        self.state.repeat = !self.state.repeat;
        self.view.set_repeat_active(self.state.repeat);
        self.handle.set_loop(self.state.repeat);
        debug!(enabled = self.state.repeat, "Repeat toggled");
        self.pending_events.push(PlayerEvent::RepeatChanged {
            enabled: self.state.repeat,
        });
    }

    pub fn toggle_like(&mut self) {
        self.state.liked = !self.state.liked;
        self.view.set_liked(self.state.liked);
        self.pending_events.push(PlayerEvent::LikeChanged {
            liked: self.state.liked,
        });
    }

    // ===== Progress, Seek, Volume =====

    /// Render elapsed time and the progress fill
    ///
    /// Does nothing until the handle knows the duration.
    pub fn update_progress(&mut self) {
        let Some(duration) = known_duration(self.handle.duration()) else {
            return;
        };

        let current = self.handle.current_time();
        self.view.set_progress(current / duration * 100.0);
        self.view.set_elapsed(&format_time(current));
    }

    /// Seek to the position under a click on the progress track
    ///
    /// The fraction is not clamped; clicks left of or beyond the track map to
    /// positions outside the media.
    pub fn seek(&mut self, client_x: f64) {
        let bounds = self.view.progress_bounds();
        let Some(duration) = known_duration(self.handle.duration()) else {
            debug!("Seek ignored: duration unknown");
            return;
        };
        if bounds.width <= 0.0 {
            return;
        }

        let fraction = (client_x - bounds.left) / bounds.width;
        self.handle.set_current_time(fraction * duration);
    }

    /// Apply the volume input's current value
    pub fn set_volume(&mut self) -> Result<()> {
        let input = self.view.volume_input();
        let volume = match parse_volume(&input) {
            Ok(volume) => volume,
            Err(e) => {
                warn!(error = %e, "Ignoring volume input");
                return Err(e);
            }
        };

        self.handle.set_volume(volume);
        self.state.volume = volume;
        self.pending_events.push(PlayerEvent::VolumeChanged { volume });
        Ok(())
    }

    // ===== Uploads =====

    /// Append user-selected files to the playlist
    ///
    /// Returns the number of tracks added. The user is always shown a
    /// confirmation, even for an empty selection.
    pub fn handle_file_upload(&mut self, files: Vec<H::File>) -> Result<usize> {
        let added = files.len();

        for file in files {
            let name = file.name();
            let title = strip_extension(&name).to_string();
            debug!(file = %name, title = %title, "Adding uploaded file");

            self.playlist.push(Track {
                title,
                artist: self.placeholder_artist.clone(),
                cover: Some(self.default_cover.clone()),
                source: TrackSource::Local(file),
            });
        }

        if added > 0 && self.playlist.len() == added {
            self.load_track(0)?;
        }

        info!(added, length = self.playlist.len(), "Files added to playlist");
        self.pending_events.push(PlayerEvent::PlaylistExtended {
            added,
            length: self.playlist.len(),
        });
        self.view
            .notify(&format!("Added {} song(s) to your library", added));

        Ok(added)
    }

    // ===== Handle Events =====

    /// Dispatch an event reported by the playback handle
    pub fn handle_event(&mut self, event: HandleEvent) -> Result<()> {
        match event {
            HandleEvent::MetadataLoaded => {
                let duration = self.handle.duration().unwrap_or(f64::NAN);
                self.view.set_duration(&format_time(duration));
            }
            HandleEvent::TimeUpdate => self.update_progress(),
            HandleEvent::Ended => self.on_track_ended()?,
            HandleEvent::PlayStarted(request) => {
                if self.outstanding == Some(request) {
                    self.outstanding = None;
                    self.set_play_state(PlayState::Playing);
                } else {
                    debug!(request = request.0, "Stale play confirmation ignored");
                }
            }
            HandleEvent::PlayRejected { request, reason } => {
                if self.outstanding == Some(request) {
                    warn!(request = request.0, reason = %reason, "Playback failed");
                    self.outstanding = None;
                    self.set_play_state(PlayState::Paused);
                    self.refresh_play_icon();
                    self.pending_events
                        .push(PlayerEvent::PlaybackFailed { message: reason });
                } else {
                    debug!(request = request.0, reason = %reason, "Stale play rejection ignored");
                }
            }
        }
        Ok(())
    }

    /// End of track: advance unless repeat is on (the native loop restarts it)
    fn on_track_ended(&mut self) -> Result<()> {
        if self.state.repeat {
            return Ok(());
        }
        self.next_track()
    }

    // ===== State Queries =====

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_track(&self) -> &Track<H::File> {
        &self.playlist[self.state.current_index]
    }

    pub fn playlist(&self) -> &[Track<H::File>] {
        &self.playlist
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internal =====

    fn start_request(&mut self) {
        let request = PlayRequest(self.next_request);
        self.next_request += 1;
        self.outstanding = Some(request);
        self.handle.request_play(request);
        self.set_play_state(PlayState::Requesting);
    }

    fn set_play_state(&mut self, state: PlayState) {
        if self.state.play != state {
            self.state.play = state;
            self.pending_events.push(PlayerEvent::StateChanged { state });
        }
    }

    fn refresh_play_icon(&mut self) {
        self.view.set_play_icon(PlayIcon::for_state(self.state.play));
    }
}
