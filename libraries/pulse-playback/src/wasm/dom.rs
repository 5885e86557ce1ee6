//! View over the widget's DOM elements

use crate::{DomSelectors, PlayIcon, PlayerError, PlayerView, Result, TrackBounds};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement};

const ICON_PLAY: &str = "fa-play";
const ICON_PAUSE: &str = "fa-pause";
const ACTIVE: &str = "active";
const LIKED: &str = "liked";

/// Render targets located once at mount time
pub struct DomView {
    cover: HtmlImageElement,
    title: Element,
    artist: Element,
    progress_fill: HtmlElement,
    progress_track: Element,
    current_time: Element,
    duration: Element,
    play_icon: Element,
    shuffle: Element,
    repeat: Element,
    like: Element,
    volume: HtmlInputElement,
}

impl DomView {
    /// Find every render target, failing on the first missing one
    pub fn locate(document: &Document, selectors: &DomSelectors) -> Result<Self> {
        let play = query(document, &selectors.play)?;
        // The glyph lives on the <i> inside the button when there is one
        let play_icon = play.query_selector("i").ok().flatten().unwrap_or(play);

        Ok(Self {
            cover: query_as(document, &selectors.cover)?,
            title: query(document, &selectors.title)?,
            artist: query(document, &selectors.artist)?,
            progress_fill: query_as(document, &selectors.progress_fill)?,
            progress_track: query(document, &selectors.progress_track)?,
            current_time: query(document, &selectors.current_time)?,
            duration: query(document, &selectors.duration)?,
            play_icon,
            shuffle: query(document, &selectors.shuffle)?,
            repeat: query(document, &selectors.repeat)?,
            like: query(document, &selectors.like)?,
            volume: query_as(document, &selectors.volume)?,
        })
    }
}

/// First element matching `selector`
pub(crate) fn query(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| PlayerError::MissingElement(selector.to_string()))
}

/// First element matching `selector`, cast to a concrete element type
pub(crate) fn query_as<T: JsCast>(document: &Document, selector: &str) -> Result<T> {
    query(document, selector)?
        .dyn_into::<T>()
        .map_err(|_| PlayerError::MissingElement(format!("{} (unexpected element type)", selector)))
}

impl PlayerView for DomView {
    fn set_cover(&mut self, uri: &str) {
        self.cover.set_src(uri);
    }

    fn set_title(&mut self, title: &str) {
        self.title.set_text_content(Some(title));
    }

    fn set_artist(&mut self, artist: &str) {
        self.artist.set_text_content(Some(artist));
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress_fill
            .style()
            .set_property("width", &format!("{}%", percent))
            .ok();
    }

    fn set_elapsed(&mut self, label: &str) {
        self.current_time.set_text_content(Some(label));
    }

    fn set_duration(&mut self, label: &str) {
        self.duration.set_text_content(Some(label));
    }

    fn set_play_icon(&mut self, icon: PlayIcon) {
        let classes = self.play_icon.class_list();
        classes
            .toggle_with_force(ICON_PLAY, icon == PlayIcon::Play)
            .ok();
        classes
            .toggle_with_force(ICON_PAUSE, icon == PlayIcon::Pause)
            .ok();
    }

    fn set_shuffle_active(&mut self, active: bool) {
        self.shuffle.class_list().toggle_with_force(ACTIVE, active).ok();
    }

    fn set_repeat_active(&mut self, active: bool) {
        self.repeat.class_list().toggle_with_force(ACTIVE, active).ok();
    }

    fn set_liked(&mut self, liked: bool) {
        self.like.class_list().toggle_with_force(LIKED, liked).ok();
    }

    fn volume_input(&self) -> String {
        self.volume.value()
    }

    fn progress_bounds(&self) -> TrackBounds {
        let rect = self.progress_track.get_bounding_client_rect();
        TrackBounds {
            left: rect.left(),
            width: rect.width(),
        }
    }

    fn notify(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(message).ok();
        }
    }
}
