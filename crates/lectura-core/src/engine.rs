//! The effect engine: configuration, trigger gate, lifecycle and the single
//! active session, driven one frame at a time by the host.
//!
//! Tick protocol: the engine asks the host for a frame via
//! `FrameScheduler::request_tick(generation)`; the host answers by calling
//! `on_frame(generation)`. Every new session and every teardown bumps the
//! generation, so a frame that arrives for a discarded session is a no-op.

use crate::config::{EffectConfig, EffectSettings};
use crate::effects::{EffectKind, Step};
use crate::interaction;
use crate::lifecycle::{Lifecycle, LifecycleState};
use crate::platform::{Generation, Platform, TickHandle};
use crate::session::{EffectSession, SessionPhase};
use crate::trigger::TriggerCounter;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct EffectEngine<P: Platform> {
    platform: P,
    config: EffectConfig,
    trigger: TriggerCounter,
    lifecycle: Lifecycle,
    session: Option<EffectSession>,
    generation: Generation,
    pending_tick: Option<TickHandle>,
    rng: StdRng,
}

impl<P: Platform> EffectEngine<P> {
    pub fn new(platform: P, config: EffectConfig) -> Self {
        Self::with_rng(platform, config, StdRng::from_entropy())
    }

    /// Deterministic engine for tests and replays.
    pub fn with_seed(platform: P, config: EffectConfig, seed: u64) -> Self {
        Self::with_rng(platform, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(platform: P, config: EffectConfig, rng: StdRng) -> Self {
        Self {
            platform,
            config,
            trigger: TriggerCounter::new(),
            lifecycle: Lifecycle::new(),
            session: None,
            generation: Generation::default(),
            pending_tick: None,
            rng,
        }
    }

    // ---------------- accessors ----------------

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn lifecycle_state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    pub fn session(&self) -> Option<&EffectSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut EffectSession> {
        self.session.as_mut()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending_tick
    }

    pub fn trigger_count(&self) -> u32 {
        self.trigger.count()
    }

    pub fn is_effect_in_cooldown(&self) -> bool {
        self.lifecycle.state() == LifecycleState::Cooldown
    }

    /// Content reveals are only honoured while no effect is playing.
    pub fn reveal_allowed(&self) -> bool {
        self.lifecycle.is_idle()
    }

    // ---------------- settings surface ----------------

    pub fn effect_settings(&self) -> EffectSettings {
        self.config.settings()
    }

    pub fn set_effects_enabled(&mut self, enabled: bool) {
        self.config.set_enabled(enabled);
        log::info!("[settings] effects enabled={}", enabled);
        if !enabled {
            self.trigger.reset();
            self.interrupt();
        }
    }

    pub fn set_effect_interval(&mut self, interval: u32) {
        let stored = self.config.set_trigger_interval(interval);
        self.trigger.reset();
        log::info!("[settings] interval={}", stored);
    }

    pub fn set_effect_duration(&mut self, ms: f64) {
        let stored = self.config.set_animation_duration_ms(ms);
        log::info!("[settings] duration={}ms", stored);
    }

    pub fn set_effect_cooldown(&mut self, ms: f64) {
        let stored = self.config.set_cooldown_ms(ms);
        log::info!("[settings] cooldown={}ms", stored);
    }

    // ---------------- triggering ----------------

    /// Counts one reveal interaction; true when an effect is due.
    pub fn on_reveal_interaction(&mut self) -> bool {
        self.trigger.on_reveal(&self.config)
    }

    /// Called by every reveal handler. Starts a random effect when the
    /// trigger interval is reached and returns its kind.
    pub fn trigger_random_effect(&mut self) -> Option<EffectKind> {
        if !self.on_reveal_interaction() {
            return None;
        }
        let kind = EffectKind::random(&mut self.rng);
        self.start_effect(kind).then_some(kind)
    }

    /// Start `kind` immediately, tearing down any running session first.
    /// Returns false when effects are disabled.
    pub fn start_effect(&mut self, kind: EffectKind) -> bool {
        if !self.config.enabled() {
            log::debug!("[effects] {} skipped: effects disabled", kind);
            return false;
        }
        self.interrupt();

        self.generation = self.generation.next();
        let now = self.platform.now_ms();
        let bounds = self.platform.bounds();
        let duration = self.config.animation_duration_ms();
        let cooldown = self.config.cooldown_ms();
        let scene = kind.spawn(bounds, duration, &mut self.rng);
        let interactive = scene.effect().is_interactive();

        if let Err(e) = self.lifecycle.activate(&mut self.platform, interactive) {
            log::warn!("[effects] cannot start {}: {}", kind, e);
            return false;
        }
        log::info!(
            "[effects] start {} gen={} objects={} duration={}ms cooldown={}ms",
            kind,
            self.generation.0,
            scene.effect().live_count(),
            duration,
            cooldown
        );
        self.session = Some(EffectSession {
            generation: self.generation,
            scene,
            start_ms: now,
            animation_duration_ms: duration,
            cooldown_ms: cooldown,
            interactive,
        });
        self.schedule_tick()
    }

    // ---------------- frame loop ----------------

    /// Host frame callback for a tick requested with `generation`.
    pub fn on_frame(&mut self, generation: Generation) {
        if generation != self.generation {
            log::trace!(
                "[effects] stale tick gen={} (current {})",
                generation.0,
                self.generation.0
            );
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        self.pending_tick = None;

        let now = self.platform.now_ms();
        let elapsed = session.elapsed_ms(now);
        match session.phase_at(now) {
            SessionPhase::Finished => {
                self.finish();
                return;
            }
            SessionPhase::Cooling => {
                if self.lifecycle.state() == LifecycleState::Active {
                    match self.lifecycle.enter_cooldown(&mut self.platform) {
                        Ok(()) => log::info!(
                            "[effects] cooldown {} at {:.0}ms",
                            session.kind(),
                            elapsed
                        ),
                        Err(e) => log::warn!("[effects] {}", e),
                    }
                }
                self.platform.clear();
            }
            SessionPhase::Animating => {
                let step = Step {
                    bounds: self.platform.bounds(),
                    elapsed_ms: elapsed,
                    recycle: elapsed < session.animation_duration_ms,
                };
                self.platform.clear();
                let effect = session.scene.effect_mut();
                effect.update(&step, &mut self.rng);
                effect.render(&mut self.platform);
            }
        }
        self.schedule_tick();
    }

    /// Queue the next frame. If the host cannot schedule one the session is
    /// torn down rather than left Active with nothing driving it.
    fn schedule_tick(&mut self) -> bool {
        if let Some(stale) = self.pending_tick.take() {
            self.platform.cancel_tick(stale);
        }
        match self.platform.request_tick(self.generation) {
            Some(handle) => {
                self.pending_tick = Some(handle);
                true
            }
            None => {
                log::warn!("[effects] no frame for gen={}, stopping", self.generation.0);
                self.interrupt();
                false
            }
        }
    }

    /// Normal end of the timing window.
    fn finish(&mut self) {
        self.pending_tick = None;
        let kind = self.session.take().map(|s| s.kind());
        self.generation = self.generation.next();
        self.platform.clear();
        match self.lifecycle.return_to_idle(&mut self.platform) {
            Ok(()) => {
                if let Some(kind) = kind {
                    log::info!("[effects] idle after {}", kind);
                }
            }
            Err(e) => log::warn!("[effects] {}", e),
        }
    }

    /// Forced teardown: cancel the pending tick, clear the canvas, unblock
    /// input and return to Idle. Safe to call repeatedly.
    pub fn interrupt(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            self.platform.cancel_tick(handle);
        }
        let session = self.session.take();
        if session.is_none() && self.lifecycle.is_idle() {
            return;
        }
        self.generation = self.generation.next();
        self.platform.clear();
        let from = self.lifecycle.state();
        self.lifecycle.force_idle(&mut self.platform);
        log::info!(
            "[effects] interrupted {} ({} -> idle)",
            session.map(|s| s.kind().name()).unwrap_or("no session"),
            from
        );
    }

    // ---------------- pointer input ----------------

    pub fn pointer_click(&mut self, x: f32, y: f32) -> bool {
        let state = self.lifecycle.state();
        match self.session.as_mut() {
            Some(session) => {
                interaction::route_click(session, state, Vec2::new(x, y), &mut self.rng)
            }
            None => false,
        }
    }

    pub fn pointer_hover(&self, x: f32, y: f32) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| interaction::route_hover(s, self.lifecycle.state(), Vec2::new(x, y)))
    }
}
