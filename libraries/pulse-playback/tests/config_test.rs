//! Configuration loading through the environment layer
//!
//! Lives in its own test binary because it mutates process environment.

use pulse_playback::PlayerConfig;
use std::env;

#[test]
fn environment_overrides_defaults() {
    env::set_var("PULSE_INITIAL_VOLUME", "0.3");
    env::set_var("PULSE_DOM__PLAY", "#play-button");
    env::set_var("PULSE_PLACEHOLDER_ARTIST", "Nobody");

    let result = PlayerConfig::load(None);

    env::remove_var("PULSE_INITIAL_VOLUME");
    env::remove_var("PULSE_DOM__PLAY");
    env::remove_var("PULSE_PLACEHOLDER_ARTIST");

    let config = result.unwrap();
    assert_eq!(config.initial_volume, 0.3);
    assert_eq!(config.dom.play, "#play-button");
    assert_eq!(config.placeholder_artist, "Nobody");

    // Untouched keys keep their defaults
    assert_eq!(config.dom.next, "#next");
    assert_eq!(config.seed.len(), 2);
    assert_eq!(config.default_cover, "default-cover.jpg");
}
