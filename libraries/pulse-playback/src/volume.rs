//! Volume input parsing
//!
//! The volume slider reports its value as a string. Playback handles accept a
//! linear gain in [0, 1], the same range as `HTMLMediaElement.volume`.

use crate::error::{PlayerError, Result};

/// Lowest accepted volume
pub const MIN_VOLUME: f64 = 0.0;

/// Highest accepted volume (unity gain)
pub const MAX_VOLUME: f64 = 1.0;

/// Parse a volume input value
///
/// Surrounding whitespace is ignored. Values that do not parse, are not
/// finite or fall outside [0, 1] are rejected rather than clamped, matching
/// the media element which refuses out-of-range volumes.
pub fn parse_volume(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlayerError::InvalidVolume(input.to_string()))?;

    validate_volume(value).map_err(|_| PlayerError::InvalidVolume(input.to_string()))
}

/// Check that a numeric volume is usable
pub fn validate_volume(value: f64) -> Result<f64> {
    if value.is_finite() && (MIN_VOLUME..=MAX_VOLUME).contains(&value) {
        Ok(value)
    } else {
        Err(PlayerError::InvalidVolume(value.to_string()))
    }
}
