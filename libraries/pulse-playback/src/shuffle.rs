//! Next-track selection
//!
//! Sequential mode walks the playlist circularly. Shuffle mode draws a
//! uniformly random index and may land on the current track again.

use rand::Rng;

/// Index after `current` in a playlist of `len` tracks
pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

/// Index before `current`, wrapping from 0 to `len - 1`
pub fn prev_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

/// Uniformly random index in `[0, len)`
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.gen_range(0..len)
}
