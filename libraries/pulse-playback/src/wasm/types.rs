//! WASM-compatible type definitions

use crate::Track;
use serde::{Deserialize, Serialize};
use web_sys::File;

/// Track as handed to JavaScript
///
/// Local tracks carry no URI here; their object URL only exists while loaded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WasmTrack {
    pub title: String,
    pub artist: String,
    pub cover: Option<String>,
    pub is_local: bool,
}

impl From<&Track<File>> for WasmTrack {
    fn from(track: &Track<File>) -> Self {
        Self {
            title: track.title.clone(),
            artist: track.artist.clone(),
            cover: track.cover.clone(),
            is_local: track.is_local(),
        }
    }
}
