use crate::SharedEngine;
use lectura_core::EffectKind;
use wasm_bindgen::prelude::*;

/// Script-facing control surface, published as `window.lecturaEffects`.
#[wasm_bindgen]
pub struct EffectsHandle {
    engine: SharedEngine,
}

impl EffectsHandle {
    pub(crate) fn new(engine: SharedEngine) -> Self {
        Self { engine }
    }
}

#[wasm_bindgen]
impl EffectsHandle {
    /// Count one reveal and start a random effect when it reaches the
    /// interval. Returns the effect name, or `undefined` when the interval
    /// was not reached or effects are disabled.
    #[wasm_bindgen(js_name = triggerRandomEffect)]
    pub fn trigger_random_effect(&self) -> Option<String> {
        self.engine
            .borrow_mut()
            .trigger_random_effect()
            .map(|k| k.name().to_string())
    }

    #[wasm_bindgen(js_name = forceEffect)]
    pub fn force_effect(&self, name: &str) -> Result<(), JsValue> {
        let kind: EffectKind = name
            .parse()
            .map_err(|e: lectura_core::UnknownEffect| JsValue::from_str(&e.to_string()))?;
        if self.engine.borrow_mut().start_effect(kind) {
            Ok(())
        } else {
            Err(JsValue::from_str("effects are disabled"))
        }
    }

    #[wasm_bindgen(js_name = stopEffect)]
    pub fn stop_effect(&self) {
        self.engine.borrow_mut().interrupt();
    }

    #[wasm_bindgen(js_name = setEffectsEnabled)]
    pub fn set_effects_enabled(&self, enabled: bool) {
        self.engine.borrow_mut().set_effects_enabled(enabled);
    }

    #[wasm_bindgen(js_name = setEffectInterval)]
    pub fn set_effect_interval(&self, interval: u32) {
        self.engine.borrow_mut().set_effect_interval(interval);
    }

    #[wasm_bindgen(js_name = setEffectDuration)]
    pub fn set_effect_duration(&self, ms: f64) {
        self.engine.borrow_mut().set_effect_duration(ms);
    }

    #[wasm_bindgen(js_name = setEffectCooldown)]
    pub fn set_effect_cooldown(&self, ms: f64) {
        self.engine.borrow_mut().set_effect_cooldown(ms);
    }

    #[wasm_bindgen(js_name = isEffectInCooldown)]
    pub fn is_effect_in_cooldown(&self) -> bool {
        self.engine.borrow().is_effect_in_cooldown()
    }

    /// `{ enabled, interval, duration, cooldown }` with times in milliseconds.
    #[wasm_bindgen(js_name = getEffectSettings)]
    pub fn effect_settings(&self) -> Result<js_sys::Object, JsValue> {
        let s = self.engine.borrow().effect_settings();
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"enabled".into(), &JsValue::from_bool(s.enabled))?;
        js_sys::Reflect::set(&obj, &"interval".into(), &JsValue::from(s.interval))?;
        js_sys::Reflect::set(&obj, &"duration".into(), &JsValue::from_f64(s.duration_ms))?;
        js_sys::Reflect::set(&obj, &"cooldown".into(), &JsValue::from_f64(s.cooldown_ms))?;
        Ok(obj)
    }
}
