//! Shared test doubles: a recording playback handle and view

#![allow(dead_code)]

use pulse_playback::{
    MediaFile, PlayIcon, PlayRequest, PlaybackController, PlaybackHandle, PlayerConfig,
    PlayerError, PlayerView, SeedTrack, TrackBounds,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type TestPlayer = PlaybackController<MockHandle, MockView>;

/// File handle as supplied by a picker
#[derive(Debug, Clone, PartialEq)]
pub struct MockFile {
    pub name: String,
}

impl MockFile {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl MediaFile for MockFile {
    fn name(&self) -> String {
        self.name.clone()
    }
}

/// Playback handle that records every call
#[derive(Debug, Default)]
pub struct MockHandle {
    pub source: Option<String>,
    pub sources: Vec<String>,
    pub requests: Vec<PlayRequest>,
    pub pauses: usize,
    pub current_time: f64,
    pub duration: Option<f64>,
    pub looping: bool,
    pub volume: Option<f64>,
    pub object_urls_issued: usize,
    pub fail_object_url: bool,
}

impl MockHandle {
    pub fn last_request(&self) -> PlayRequest {
        *self.requests.last().expect("no play request issued")
    }
}

impl PlaybackHandle for MockHandle {
    type File = MockFile;

    fn object_url(&mut self, file: &MockFile) -> pulse_playback::Result<String> {
        if self.fail_object_url {
            return Err(PlayerError::ObjectUrl(format!("cannot read {}", file.name)));
        }
        self.object_urls_issued += 1;
        Ok(format!("blob:mock/{}/{}", self.object_urls_issued, file.name))
    }

    fn set_source(&mut self, uri: &str) {
        self.source = Some(uri.to_string());
        self.sources.push(uri.to_string());
        self.current_time = 0.0;
    }

    fn request_play(&mut self, request: PlayRequest) {
        self.requests.push(request);
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn set_loop(&mut self, enabled: bool) {
        self.looping = enabled;
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = Some(volume);
    }
}

/// View that keeps the last value written to each render target
#[derive(Debug)]
pub struct MockView {
    pub cover: String,
    pub title: String,
    pub artist: String,
    pub progress: f64,
    pub progress_writes: usize,
    pub elapsed: String,
    pub duration: String,
    pub icon: Option<PlayIcon>,
    pub shuffle_active: bool,
    pub repeat_active: bool,
    pub liked: bool,
    pub volume_input: String,
    pub bounds: TrackBounds,
    pub notifications: Vec<String>,
}

impl Default for MockView {
    fn default() -> Self {
        Self {
            cover: String::new(),
            title: String::new(),
            artist: String::new(),
            progress: -1.0,
            progress_writes: 0,
            elapsed: String::new(),
            duration: String::new(),
            icon: None,
            shuffle_active: false,
            repeat_active: false,
            liked: false,
            volume_input: "1".to_string(),
            bounds: TrackBounds {
                left: 100.0,
                width: 400.0,
            },
            notifications: Vec::new(),
        }
    }
}

impl PlayerView for MockView {
    fn set_cover(&mut self, uri: &str) {
        self.cover = uri.to_string();
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_artist(&mut self, artist: &str) {
        self.artist = artist.to_string();
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = percent;
        self.progress_writes += 1;
    }

    fn set_elapsed(&mut self, label: &str) {
        self.elapsed = label.to_string();
    }

    fn set_duration(&mut self, label: &str) {
        self.duration = label.to_string();
    }

    fn set_play_icon(&mut self, icon: PlayIcon) {
        self.icon = Some(icon);
    }

    fn set_shuffle_active(&mut self, active: bool) {
        self.shuffle_active = active;
    }

    fn set_repeat_active(&mut self, active: bool) {
        self.repeat_active = active;
    }

    fn set_liked(&mut self, liked: bool) {
        self.liked = liked;
    }

    fn volume_input(&self) -> String {
        self.volume_input.clone()
    }

    fn progress_bounds(&self) -> TrackBounds {
        self.bounds
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

/// Player over the default two-track seed
pub fn player() -> TestPlayer {
    player_with(PlayerConfig::default())
}

/// Player over a seed of `len` generated tracks
pub fn player_with_tracks(len: usize) -> TestPlayer {
    let seed = (0..len)
        .map(|i| SeedTrack {
            title: format!("Track {}", i),
            artist: format!("Artist {}", i % 3),
            cover: None,
            audio: format!("https://example.com/{}.mp3", i),
        })
        .collect();

    player_with(PlayerConfig {
        seed,
        ..Default::default()
    })
}

pub fn player_with(config: PlayerConfig) -> TestPlayer {
    PlaybackController::with_rng(
        &config,
        MockHandle::default(),
        MockView::default(),
        StdRng::seed_from_u64(0x5eed),
    )
    .expect("controller")
}
