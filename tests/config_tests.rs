// Host-side tests for the effect settings store and the reveal trigger gate.

use lectura_core::{EffectConfig, TriggerCounter};

#[test]
fn defaults_match_the_settings_panel() {
    let s = EffectConfig::default().settings();
    assert!(s.enabled);
    assert_eq!(s.interval, 5);
    assert_eq!(s.duration_ms, 4000.0);
    assert_eq!(s.cooldown_ms, 1000.0);
}

#[test]
fn setters_clamp_into_range() {
    let mut cfg = EffectConfig::default();
    assert_eq!(cfg.set_trigger_interval(0), 1);
    assert_eq!(cfg.set_trigger_interval(1000), 100);
    assert_eq!(cfg.set_animation_duration_ms(10.0), 500.0);
    assert_eq!(cfg.set_animation_duration_ms(1e9), 60_000.0);
    assert_eq!(cfg.set_cooldown_ms(-5.0), 0.0);
    assert_eq!(cfg.set_cooldown_ms(90_000.0), 60_000.0);
}

#[test]
fn non_finite_values_keep_the_previous_setting() {
    let mut cfg = EffectConfig::default();
    cfg.set_animation_duration_ms(2500.0);
    assert_eq!(cfg.set_animation_duration_ms(f64::NAN), 2500.0);
    assert_eq!(cfg.set_cooldown_ms(f64::INFINITY), 1000.0);
}

#[test]
fn interval_round_trips_through_settings() {
    let mut cfg = EffectConfig::default();
    cfg.set_trigger_interval(7);
    assert_eq!(cfg.settings().interval, 7);
}

#[test]
fn constructor_clamps_like_the_setters() {
    let cfg = EffectConfig::new(false, 0, 0.0, -1.0);
    assert!(!cfg.enabled());
    assert_eq!(cfg.trigger_interval(), 1);
    assert_eq!(cfg.animation_duration_ms(), 500.0);
    assert_eq!(cfg.cooldown_ms(), 0.0);
}

#[test]
fn trigger_fires_on_every_nth_reveal() {
    let cfg = EffectConfig::new(true, 3, 4000.0, 1000.0);
    let mut t = TriggerCounter::new();
    let fired: Vec<bool> = (0..7).map(|_| t.on_reveal(&cfg)).collect();
    assert_eq!(fired, [false, false, true, false, false, true, false]);
    assert_eq!(t.count(), 1);
}

#[test]
fn interval_of_one_fires_every_time() {
    let cfg = EffectConfig::new(true, 1, 4000.0, 1000.0);
    let mut t = TriggerCounter::new();
    assert!((0..5).all(|_| t.on_reveal(&cfg)));
    assert_eq!(t.count(), 0);
}

#[test]
fn disabled_trigger_never_fires_and_resets() {
    let enabled = EffectConfig::new(true, 3, 4000.0, 1000.0);
    let disabled = EffectConfig::new(false, 3, 4000.0, 1000.0);
    let mut t = TriggerCounter::new();
    t.on_reveal(&enabled);
    t.on_reveal(&enabled);
    assert_eq!(t.count(), 2);
    assert!(!t.on_reveal(&disabled));
    assert_eq!(t.count(), 0);
}
