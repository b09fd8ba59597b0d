// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use lectura_core::constants as fx;
use std::collections::HashSet;

#[test]
fn reveal_areas_are_unique_and_named_for_drill_modes() {
    let ids: HashSet<_> = REVEAL_AREAS.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids.len(), REVEAL_AREAS.len());
    let modes: HashSet<_> = REVEAL_AREAS.iter().map(|(_, m)| *m).collect();
    for m in ["numbers", "vowels", "consonants", "syllables", "words"] {
        assert!(modes.contains(m), "missing {m}");
    }
}

#[test]
fn settings_inputs_have_distinct_ids() {
    let ids = [
        SETTING_ENABLED_ID,
        SETTING_INTERVAL_ID,
        SETTING_DURATION_ID,
        SETTING_COOLDOWN_ID,
    ];
    let set: HashSet<_> = ids.iter().collect();
    assert_eq!(set.len(), ids.len());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn config_ranges_contain_their_defaults() {
    assert!(fx::MIN_TRIGGER_INTERVAL >= 1);
    assert!(
        (fx::MIN_TRIGGER_INTERVAL..=fx::MAX_TRIGGER_INTERVAL)
            .contains(&fx::DEFAULT_TRIGGER_INTERVAL)
    );
    assert!(
        (fx::MIN_DURATION_MS..=fx::MAX_DURATION_MS).contains(&fx::DEFAULT_DURATION_MS)
    );
    assert!(
        (fx::MIN_COOLDOWN_MS..=fx::MAX_COOLDOWN_MS).contains(&fx::DEFAULT_COOLDOWN_MS)
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_tuning_has_logical_relationships() {
    assert!(fx::CONFETTI_MAX_COUNT >= fx::CONFETTI_MIN_COUNT);
    assert!(fx::EMOJI_MAX_COUNT >= fx::EMOJI_MIN_COUNT);
    assert!(fx::FIREWORKS_MAX_BURSTS >= fx::FIREWORKS_MIN_BURSTS);
    assert!(fx::FIREWORKS_SCHEDULE_FRACTION > 0.0 && fx::FIREWORKS_SCHEDULE_FRACTION <= 1.0);
    assert!(fx::BUBBLE_POP_CHANCE > 0.0 && fx::BUBBLE_POP_CHANCE < 1.0);
    assert!(fx::STAR_INNER_RATIO > 0.0 && fx::STAR_INNER_RATIO < 1.0);
    assert!(fx::GRAVITY > 0.0);
    assert!(fx::CONFETTI_SPAWN_Y < 0.0 && fx::EMOJI_SPAWN_Y < 0.0);
    assert_eq!(fx::EMOJI_SET.len(), 10);
}
