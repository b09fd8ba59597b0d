use crate::effects::{EffectKind, EffectScene};
use crate::platform::Generation;

/// Where a session sits inside its timing window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// `elapsed <= duration`: update and render.
    Animating,
    /// `duration < elapsed <= duration + cooldown`: blank, non-interactive hold.
    Cooling,
    /// `elapsed > duration + cooldown`: tear down.
    Finished,
}

impl SessionPhase {
    pub fn at(elapsed_ms: f64, duration_ms: f64, cooldown_ms: f64) -> Self {
        if elapsed_ms > duration_ms + cooldown_ms {
            SessionPhase::Finished
        } else if elapsed_ms > duration_ms {
            SessionPhase::Cooling
        } else {
            SessionPhase::Animating
        }
    }
}

/// One run of one effect. Timing is snapshotted from the config at spawn so
/// settings changed mid-run only affect the next session.
#[derive(Clone, Debug)]
pub struct EffectSession {
    pub generation: Generation,
    pub scene: EffectScene,
    pub start_ms: f64,
    pub animation_duration_ms: f64,
    pub cooldown_ms: f64,
    pub interactive: bool,
}

impl EffectSession {
    pub fn kind(&self) -> EffectKind {
        self.scene.kind()
    }

    /// Clamped to zero so a clock that steps backwards never reads as negative.
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.start_ms).max(0.0)
    }

    pub fn phase_at(&self, now_ms: f64) -> SessionPhase {
        SessionPhase::at(
            self.elapsed_ms(now_ms),
            self.animation_duration_ms,
            self.cooldown_ms,
        )
    }
}
