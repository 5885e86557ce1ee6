//! Playback handle over `HtmlAudioElement`

use crate::{HandleEvent, MediaFile, PlayRequest, PlaybackHandle, PlayerError, Result};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{File, HtmlAudioElement, Url};

/// Receives play outcomes once the element's play promise settles
pub type OutcomeListener = Rc<dyn Fn(HandleEvent)>;

impl MediaFile for File {
    fn name(&self) -> String {
        File::name(self)
    }
}

/// Playback handle backed by a detached `<audio>` element
pub struct AudioElementHandle {
    audio: HtmlAudioElement,

    // Object URL created for the track being loaded
    issued_object_url: Option<String>,

    // Object URL the element is currently playing from
    active_object_url: Option<String>,

    outcome_listener: Option<OutcomeListener>,
}

impl AudioElementHandle {
    pub fn new() -> std::result::Result<Self, JsValue> {
        Ok(Self::from_element(HtmlAudioElement::new()?))
    }

    pub fn from_element(audio: HtmlAudioElement) -> Self {
        Self {
            audio,
            issued_object_url: None,
            active_object_url: None,
            outcome_listener: None,
        }
    }

    /// Underlying element, for attaching media event listeners
    pub fn element(&self) -> &HtmlAudioElement {
        &self.audio
    }

    /// Register where play outcomes are delivered
    pub fn set_outcome_listener(&mut self, listener: OutcomeListener) {
        self.outcome_listener = Some(listener);
    }

    // Outcomes are always delivered from a later task so the controller that
    // issued the request is no longer borrowed.
    fn deliver_later(&self, event: HandleEvent) {
        let listener = self.outcome_listener.clone();
        spawn_local(async move {
            if let Some(listener) = listener {
                listener(event);
            }
        });
    }
}

impl PlaybackHandle for AudioElementHandle {
    type File = File;

    fn object_url(&mut self, file: &File) -> Result<String> {
        let url = Url::create_object_url_with_blob(file)
            .map_err(|err| PlayerError::ObjectUrl(describe_js_error(&err)))?;

        // A URL issued for a load that never reached set_source is dead weight
        if let Some(stale) = self.issued_object_url.replace(url.clone()) {
            Url::revoke_object_url(&stale).ok();
        }
        Ok(url)
    }

    fn set_source(&mut self, uri: &str) {
        let previous = self.active_object_url.take();
        self.audio.set_src(uri);

        if self.issued_object_url.as_deref() == Some(uri) {
            self.active_object_url = self.issued_object_url.take();
        }
        if let Some(previous) = previous {
            if previous != uri {
                Url::revoke_object_url(&previous).ok();
            }
        }
    }

    fn request_play(&mut self, request: PlayRequest) {
        match self.audio.play() {
            Ok(promise) => {
                let listener = self.outcome_listener.clone();
                spawn_local(async move {
                    let event = match JsFuture::from(promise).await {
                        Ok(_) => HandleEvent::PlayStarted(request),
                        Err(err) => HandleEvent::PlayRejected {
                            request,
                            reason: describe_js_error(&err),
                        },
                    };
                    if let Some(listener) = listener {
                        listener(event);
                    }
                });
            }
            Err(err) => self.deliver_later(HandleEvent::PlayRejected {
                request,
                reason: describe_js_error(&err),
            }),
        }
    }

    fn pause(&mut self) {
        self.audio.pause().ok();
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn duration(&self) -> Option<f64> {
        let duration = self.audio.duration();
        if duration.is_nan() || duration == 0.0 {
            None
        } else {
            Some(duration)
        }
    }

    fn set_loop(&mut self, enabled: bool) {
        self.audio.set_loop(enabled);
    }

    fn set_volume(&mut self, volume: f64) {
        self.audio.set_volume(volume);
    }
}

/// Best-effort human readable text for a JS exception
pub(crate) fn describe_js_error(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
