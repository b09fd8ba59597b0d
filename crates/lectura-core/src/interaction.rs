//! Pointer routing onto the active effect.
//!
//! The router only touches session objects; lifecycle transitions stay with
//! the engine.

use crate::lifecycle::LifecycleState;
use crate::session::EffectSession;
use glam::Vec2;
use rand::rngs::StdRng;

#[inline]
fn accepts_pointer(session: &EffectSession, state: LifecycleState) -> bool {
    session.interactive && state == LifecycleState::Active
}

/// Forward a click to the active effect. Returns whether it was delivered.
pub fn route_click(
    session: &mut EffectSession,
    state: LifecycleState,
    point: Vec2,
    rng: &mut StdRng,
) -> bool {
    if !accepts_pointer(session, state) || !point.is_finite() {
        return false;
    }
    session.scene.effect_mut().on_click(point, rng);
    true
}

/// Advisory cursor feedback: is there an object under the pointer?
pub fn route_hover(session: &EffectSession, state: LifecycleState, point: Vec2) -> bool {
    accepts_pointer(session, state)
        && point.is_finite()
        && session.scene.effect().hit_test(point).is_some()
}
