//! WASM-exported player widget
//!
//! Mounts the controller onto an existing page, wires DOM and media events to
//! it and forwards controller events to JavaScript callbacks.

use super::audio::AudioElementHandle;
use super::callbacks::CallbackSlots;
use super::dom::{query, query_as, DomView};
use super::types::WasmTrack;
use crate::{HandleEvent, PlaybackController, PlayerConfig, PlayerError, PlayerEvent, Result};
use js_sys::Function;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, File, HtmlInputElement, MouseEvent};

type WebController = PlaybackController<AudioElementHandle, DomView>;

struct Shared {
    controller: RefCell<WebController>,
    callbacks: RefCell<CallbackSlots<Function>>,
}

/// Music player widget bound to the page
#[wasm_bindgen]
pub struct PulseWidget {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl PulseWidget {
    /// Mount the widget on the current document
    ///
    /// `config_toml` optionally overrides the default configuration (seed
    /// playlist, selectors, defaults for uploads).
    #[wasm_bindgen(constructor)]
    pub fn mount(config_toml: Option<String>) -> std::result::Result<PulseWidget, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_toml {
            Some(toml) => PlayerConfig::from_toml_str(&toml),
            None => Ok(PlayerConfig::default()),
        }
        .map_err(to_js)?;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;

        let view = DomView::locate(&document, &config.dom).map_err(to_js)?;
        let handle = AudioElementHandle::new()?;
        let audio = handle.element().clone();
        let controller = PlaybackController::new(&config, handle, view).map_err(to_js)?;

        let shared = Rc::new(Shared {
            controller: RefCell::new(controller),
            callbacks: RefCell::new(CallbackSlots::default()),
        });

        let weak = Rc::downgrade(&shared);
        shared
            .controller
            .borrow_mut()
            .handle_mut()
            .set_outcome_listener(Rc::new(move |event: HandleEvent| {
                if let Some(shared) = weak.upgrade() {
                    dispatch(&shared, |c| c.handle_event(event));
                }
            }));

        wire_controls(&document, &config, &shared)?;

        // Media element events
        listen(&audio, "loadedmetadata", &shared, |c, _| {
            c.handle_event(HandleEvent::MetadataLoaded)
        })?;
        listen(&audio, "timeupdate", &shared, |c, _| {
            c.handle_event(HandleEvent::TimeUpdate)
        })?;
        listen(&audio, "ended", &shared, |c, _| c.handle_event(HandleEvent::Ended))?;

        Ok(PulseWidget { shared })
    }

    // ===== Playback Control =====

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&self) {
        dispatch(&self.shared, |c| {
            c.toggle_play();
            Ok(())
        });
    }

    pub fn next(&self) {
        dispatch(&self.shared, |c| c.next_track());
    }

    pub fn previous(&self) {
        dispatch(&self.shared, |c| c.prev_track());
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&self) {
        dispatch(&self.shared, |c| {
            c.toggle_shuffle();
            Ok(())
        });
    }

    #[wasm_bindgen(js_name = toggleRepeat)]
    pub fn toggle_repeat(&self) {
        dispatch(&self.shared, |c| {
            c.toggle_repeat();
            Ok(())
        });
    }

    #[wasm_bindgen(js_name = toggleLike)]
    pub fn toggle_like(&self) {
        dispatch(&self.shared, |c| {
            c.toggle_like();
            Ok(())
        });
    }

    #[wasm_bindgen(js_name = selectCard)]
    pub fn select_card(&self, index: usize) {
        dispatch(&self.shared, |c| c.select_card(index));
    }

    // ===== State Queries =====

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.shared.controller.borrow().is_playing()
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.shared.controller.borrow().current_index()
    }

    #[wasm_bindgen(js_name = playlistLength)]
    pub fn playlist_length(&self) -> usize {
        self.shared.controller.borrow().playlist().len()
    }

    #[wasm_bindgen(js_name = currentTrack)]
    pub fn current_track(&self) -> JsValue {
        let track = WasmTrack::from(self.shared.controller.borrow().current_track());
        serde_wasm_bindgen::to_value(&track).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(js_name = getPlaylist)]
    pub fn get_playlist(&self) -> JsValue {
        let tracks: Vec<WasmTrack> = self
            .shared
            .controller
            .borrow()
            .playlist()
            .iter()
            .map(WasmTrack::from)
            .collect();

        serde_wasm_bindgen::to_value(&tracks).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register a callback receiving every controller event
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&self, callback: Function) {
        self.shared.callbacks.borrow_mut().on_event = Some(callback);
    }

    #[wasm_bindgen(js_name = onTrackChange)]
    pub fn on_track_change(&self, callback: Function) {
        self.shared.callbacks.borrow_mut().on_track_change = Some(callback);
    }

    #[wasm_bindgen(js_name = onStateChange)]
    pub fn on_state_change(&self, callback: Function) {
        self.shared.callbacks.borrow_mut().on_state_change = Some(callback);
    }

    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&self, callback: Function) {
        self.shared.callbacks.borrow_mut().on_error = Some(callback);
    }
}

/// Attach click/input/change handlers to the widget's controls
fn wire_controls(
    document: &Document,
    config: &PlayerConfig,
    shared: &Rc<Shared>,
) -> std::result::Result<(), JsValue> {
    let dom = &config.dom;
    let find = |selector: &str| query(document, selector).map_err(to_js);

    listen(find(&dom.play)?.as_ref(), "click", shared, |c, _| {
        c.toggle_play();
        Ok(())
    })?;
    listen(find(&dom.prev)?.as_ref(), "click", shared, |c, _| c.prev_track())?;
    listen(find(&dom.next)?.as_ref(), "click", shared, |c, _| c.next_track())?;
    listen(find(&dom.shuffle)?.as_ref(), "click", shared, |c, _| {
        c.toggle_shuffle();
        Ok(())
    })?;
    listen(find(&dom.repeat)?.as_ref(), "click", shared, |c, _| {
        c.toggle_repeat();
        Ok(())
    })?;
    listen(find(&dom.like)?.as_ref(), "click", shared, |c, _| {
        c.toggle_like();
        Ok(())
    })?;
    listen(find(&dom.progress_track)?.as_ref(), "click", shared, |c, event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            c.seek(f64::from(mouse.client_x()));
        }
        Ok(())
    })?;
    listen(find(&dom.volume)?.as_ref(), "input", shared, |c, _| c.set_volume())?;

    let file_input: HtmlInputElement = query_as(document, &dom.file_input).map_err(to_js)?;
    listen(&file_input, "change", shared, |c, event| {
        let files = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect::<Vec<File>>())
            .unwrap_or_default();
        c.handle_file_upload(files).map(|_| ())
    })?;

    // The upload button only opens the hidden file picker
    let picker = file_input.clone();
    let open_picker = Closure::<dyn FnMut(Event)>::new(move |_: Event| picker.click());
    find(&dom.upload_button)?
        .add_event_listener_with_callback("click", open_picker.as_ref().unchecked_ref())?;
    open_picker.forget();

    let cards = document.query_selector_all(&dom.cards)?;
    for index in 0..cards.length() {
        if let Some(card) = cards.get(index) {
            let card_index = index as usize;
            listen(&card, "click", shared, move |c, _| c.select_card(card_index))?;
        }
    }

    Ok(())
}

/// Register `action` for `event` on `target` for the lifetime of the page
fn listen<F>(
    target: &EventTarget,
    event: &str,
    shared: &Rc<Shared>,
    action: F,
) -> std::result::Result<(), JsValue>
where
    F: Fn(&mut WebController, Event) -> Result<()> + 'static,
{
    let shared = Rc::clone(shared);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        dispatch(&shared, |c| action(c, event));
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run one controller operation, then forward the events it produced
fn dispatch<F>(shared: &Shared, operation: F)
where
    F: FnOnce(&mut WebController) -> Result<()>,
{
    let (outcome, events) = {
        let Ok(mut controller) = shared.controller.try_borrow_mut() else {
            web_sys::console::warn_1(&JsValue::from_str(
                "Player busy, dropping re-entrant event",
            ));
            return;
        };
        let outcome = operation(&mut *controller);
        (outcome, controller.drain_events())
    };

    if let Err(err) = outcome {
        report_error(shared, &err.to_string());
    }
    for event in events {
        emit(shared, &event);
    }
}

fn emit(shared: &Shared, event: &PlayerEvent) {
    let (general, specific) = shared.callbacks.borrow().for_event(event);

    if let Some(cb) = general {
        if let Ok(value) = serde_wasm_bindgen::to_value(event) {
            cb.call1(&JsValue::NULL, &value).ok();
        }
    }

    let payload = match event {
        PlayerEvent::TrackChanged { .. } => {
            let track = WasmTrack::from(shared.controller.borrow().current_track());
            serde_wasm_bindgen::to_value(&track).ok()
        }
        PlayerEvent::StateChanged { state } => serde_wasm_bindgen::to_value(state).ok(),
        PlayerEvent::PlaybackFailed { message } => {
            web_sys::console::error_2(
                &JsValue::from_str("Playback failed:"),
                &JsValue::from_str(message),
            );
            Some(JsValue::from_str(message))
        }
        _ => None,
    };

    if let (Some(cb), Some(value)) = (specific, payload) {
        cb.call1(&JsValue::NULL, &value).ok();
    }
}

fn report_error(shared: &Shared, message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
    let callback = shared.callbacks.borrow().error();
    if let Some(cb) = callback {
        cb.call1(&JsValue::NULL, &JsValue::from_str(message)).ok();
    }
}

fn to_js(err: PlayerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
