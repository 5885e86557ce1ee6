/// Line-oriented view
use pulse_playback::{PlayIcon, PlayerView, TrackBounds};

/// View that turns every render into a printable line
///
/// The progress track is one unit wide starting at zero, so a click position
/// is the fraction of the track itself.
#[derive(Debug)]
pub struct ConsoleView {
    lines: Vec<String>,
    volume_input: String,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            volume_input: "1".to_string(),
        }
    }

    /// Value the next `set_volume` will read
    pub fn set_volume_input(&mut self, input: &str) {
        self.volume_input = input.to_string();
    }

    /// Take the lines rendered since the last call
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    fn render(&mut self, target: &str, value: impl std::fmt::Display) {
        self.lines.push(format!("{:<10}{}", target, value));
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

fn on_off(active: bool) -> &'static str {
    if active {
        "on"
    } else {
        "off"
    }
}

impl PlayerView for ConsoleView {
    fn set_cover(&mut self, uri: &str) {
        self.render("cover", uri);
    }

    fn set_title(&mut self, title: &str) {
        self.render("title", title);
    }

    fn set_artist(&mut self, artist: &str) {
        self.render("artist", artist);
    }

    fn set_progress(&mut self, percent: f64) {
        self.render("progress", format!("{:.1}%", percent));
    }

    fn set_elapsed(&mut self, label: &str) {
        self.render("elapsed", label);
    }

    fn set_duration(&mut self, label: &str) {
        self.render("duration", label);
    }

    fn set_play_icon(&mut self, icon: PlayIcon) {
        let glyph = match icon {
            PlayIcon::Play => "play",
            PlayIcon::Pause => "pause",
        };
        self.render("icon", glyph);
    }

    fn set_shuffle_active(&mut self, active: bool) {
        self.render("shuffle", on_off(active));
    }

    fn set_repeat_active(&mut self, active: bool) {
        self.render("repeat", on_off(active));
    }

    fn set_liked(&mut self, liked: bool) {
        self.render("liked", on_off(liked));
    }

    fn volume_input(&self) -> String {
        self.volume_input.clone()
    }

    fn progress_bounds(&self) -> TrackBounds {
        TrackBounds {
            left: 0.0,
            width: 1.0,
        }
    }

    fn notify(&mut self, message: &str) {
        self.render("notice", message);
    }
}
