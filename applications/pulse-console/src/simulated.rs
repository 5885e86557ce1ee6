/// Simulated playback handle driven by a manual clock
use pulse_playback::{HandleEvent, MediaFile, PlayRequest, PlaybackHandle, Result};
use std::path::PathBuf;
use tracing::debug;

/// Local file named on the command line
///
/// The file is never opened; only its name matters to the player.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFile(pub PathBuf);

impl MediaFile for PathFile {
    fn name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.to_string_lossy().into_owned())
    }
}

/// Playback handle with a fixed track length and no audio output
///
/// Time only moves on [`tick`](Self::tick). Play requests stay outstanding
/// until the next tick confirms them or [`reject`](Self::reject) fails them,
/// the same two outcomes a media element's play promise can have.
#[derive(Debug)]
pub struct SimulatedHandle {
    track_secs: f64,

    source: Option<String>,
    current_time: f64,
    playing: bool,
    looping: bool,
    volume: f64,

    awaiting: Option<PlayRequest>,
    object_urls: u64,
    pending: Vec<HandleEvent>,
}

impl SimulatedHandle {
    pub fn new(track_secs: f64) -> Self {
        Self {
            track_secs,
            source: None,
            current_time: 0.0,
            playing: false,
            looping: false,
            volume: 1.0,
            awaiting: None,
            object_urls: 0,
            pending: Vec::new(),
        }
    }

    /// Advance the clock by `seconds`
    pub fn tick(&mut self, seconds: f64) {
        if let Some(request) = self.awaiting.take() {
            self.playing = true;
            self.pending.push(HandleEvent::PlayStarted(request));
        }
        if !self.playing {
            return;
        }

        self.current_time += seconds;
        if self.current_time >= self.track_secs {
            if self.looping {
                self.current_time %= self.track_secs;
            } else {
                self.current_time = self.track_secs;
                self.playing = false;
                self.pending.push(HandleEvent::TimeUpdate);
                self.pending.push(HandleEvent::Ended);
                return;
            }
        }
        self.pending.push(HandleEvent::TimeUpdate);
    }

    /// Jump to the end of the source
    ///
    /// With the loop flag set the source restarts instead, and no `Ended` is
    /// reported.
    pub fn finish(&mut self) {
        if self.looping {
            self.current_time = 0.0;
            self.pending.push(HandleEvent::TimeUpdate);
        } else {
            self.current_time = self.track_secs;
            self.playing = false;
            self.pending.push(HandleEvent::Ended);
        }
    }

    /// Fail the outstanding play request; false if there is none
    pub fn reject(&mut self, reason: &str) -> bool {
        match self.awaiting.take() {
            Some(request) => {
                self.pending.push(HandleEvent::PlayRejected {
                    request,
                    reason: reason.to_string(),
                });
                true
            }
            None => false,
        }
    }

    /// Take the events reported since the last call
    pub fn take_events(&mut self) -> Vec<HandleEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_audible(&self) -> bool {
        self.playing
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    // A new source or a pause aborts a pending play, as in the browser
    fn abort_pending_play(&mut self) {
        if let Some(request) = self.awaiting.take() {
            self.pending.push(HandleEvent::PlayRejected {
                request,
                reason: "AbortError".to_string(),
            });
        }
    }
}

impl PlaybackHandle for SimulatedHandle {
    type File = PathFile;

    fn object_url(&mut self, file: &PathFile) -> Result<String> {
        self.object_urls += 1;
        Ok(format!("blob:pulse-console/{}/{}", self.object_urls, file.name()))
    }

    fn set_source(&mut self, uri: &str) {
        self.abort_pending_play();
        debug!(uri, "Simulated source set");
        self.source = Some(uri.to_string());
        self.current_time = 0.0;
        self.playing = false;
        self.pending.push(HandleEvent::MetadataLoaded);
    }

    fn request_play(&mut self, request: PlayRequest) {
        self.awaiting = Some(request);
    }

    fn pause(&mut self) {
        self.abort_pending_play();
        self.playing = false;
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        // Media elements clamp positions into the source
        self.current_time = seconds.clamp(0.0, self.track_secs);
    }

    fn duration(&self) -> Option<f64> {
        self.source.as_ref().map(|_| self.track_secs)
    }

    fn set_loop(&mut self, enabled: bool) {
        self.looping = enabled;
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }
}
