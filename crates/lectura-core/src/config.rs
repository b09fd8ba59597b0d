//! Effect configuration store.
//!
//! Every setter clamps its input into the documented range so the store can
//! never hold an out-of-range value. Non-finite numbers are ignored and the
//! previous value is kept.

use crate::constants::*;

/// Process-wide effect settings. Mutated only through the setters below.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    enabled: bool,
    trigger_interval: u32,
    animation_duration_ms: f64,
    cooldown_ms: f64,
}

/// Plain snapshot handed to the settings panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectSettings {
    pub enabled: bool,
    pub interval: u32,
    pub duration_ms: f64,
    pub cooldown_ms: f64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            trigger_interval: DEFAULT_TRIGGER_INTERVAL,
            animation_duration_ms: DEFAULT_DURATION_MS,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}

impl EffectConfig {
    /// Build a config from raw values, clamping each one.
    pub fn new(enabled: bool, interval: u32, duration_ms: f64, cooldown_ms: f64) -> Self {
        let mut cfg = Self::default();
        cfg.set_enabled(enabled);
        cfg.set_trigger_interval(interval);
        cfg.set_animation_duration_ms(duration_ms);
        cfg.set_cooldown_ms(cooldown_ms);
        cfg
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn trigger_interval(&self) -> u32 {
        self.trigger_interval
    }

    pub fn animation_duration_ms(&self) -> f64 {
        self.animation_duration_ms
    }

    pub fn cooldown_ms(&self) -> f64 {
        self.cooldown_ms
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns the stored (clamped) interval.
    pub fn set_trigger_interval(&mut self, interval: u32) -> u32 {
        self.trigger_interval = interval.clamp(MIN_TRIGGER_INTERVAL, MAX_TRIGGER_INTERVAL);
        self.trigger_interval
    }

    pub fn set_animation_duration_ms(&mut self, ms: f64) -> f64 {
        if ms.is_finite() {
            self.animation_duration_ms = ms.clamp(MIN_DURATION_MS, MAX_DURATION_MS);
        }
        self.animation_duration_ms
    }

    pub fn set_cooldown_ms(&mut self, ms: f64) -> f64 {
        if ms.is_finite() {
            self.cooldown_ms = ms.clamp(MIN_COOLDOWN_MS, MAX_COOLDOWN_MS);
        }
        self.cooldown_ms
    }

    pub fn settings(&self) -> EffectSettings {
        EffectSettings {
            enabled: self.enabled,
            interval: self.trigger_interval,
            duration_ms: self.animation_duration_ms,
            cooldown_ms: self.cooldown_ms,
        }
    }
}
