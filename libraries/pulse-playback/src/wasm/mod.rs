//! WASM bindings for pulse-playback
//!
//! Implements the controller's collaborators over the browser: the playback
//! handle over `HtmlAudioElement`, the view over the widget's DOM elements,
//! and a `#[wasm_bindgen]` widget that wires page events to the controller.

pub mod audio;
mod callbacks;
pub mod dom;
pub mod types;
pub mod widget;

pub use audio::AudioElementHandle;
pub use dom::DomView;
pub use types::WasmTrack;
pub use widget::PulseWidget;
