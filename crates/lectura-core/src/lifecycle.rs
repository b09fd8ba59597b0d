//! Idle / Active / Cooldown state machine.
//!
//! Transitions are the only place host UI affordances change:
//! - Active: reveal taps disabled, "active" class, canvas takes pointer input
//!   when the effect is interactive.
//! - Cooldown: "cooldown" class, canvas stops taking input, reveals stay disabled.
//! - Idle: no class, canvas passive, reveals enabled again.

use crate::platform::HostUi;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    #[default]
    Idle,
    Active,
    Cooldown,
}

impl LifecycleState {
    /// Document-root class that marks this state, if any.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            LifecycleState::Idle => None,
            LifecycleState::Active => Some("effect-active"),
            LifecycleState::Cooldown => Some("effect-cooldown"),
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Idle => "idle",
            LifecycleState::Active => "active",
            LifecycleState::Cooldown => "cooldown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("illegal lifecycle transition {from} -> {to}")]
pub struct TransitionError {
    pub from: LifecycleState,
    pub to: LifecycleState,
}

#[derive(Clone, Debug, Default)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == LifecycleState::Idle
    }

    /// Idle -> Active.
    pub fn activate(
        &mut self,
        ui: &mut dyn HostUi,
        interactive: bool,
    ) -> Result<(), TransitionError> {
        self.check(LifecycleState::Idle, LifecycleState::Active)?;
        self.state = LifecycleState::Active;
        ui.set_reveal_enabled(false);
        ui.set_phase_class(LifecycleState::Active);
        ui.set_canvas_interactive(interactive);
        Ok(())
    }

    /// Active -> Cooldown.
    pub fn enter_cooldown(&mut self, ui: &mut dyn HostUi) -> Result<(), TransitionError> {
        self.check(LifecycleState::Active, LifecycleState::Cooldown)?;
        self.state = LifecycleState::Cooldown;
        ui.set_phase_class(LifecycleState::Cooldown);
        ui.set_canvas_interactive(false);
        Ok(())
    }

    /// Active|Cooldown -> Idle at the end of the timing window. With a zero
    /// cooldown the session goes straight from Active to Idle.
    pub fn return_to_idle(&mut self, ui: &mut dyn HostUi) -> Result<(), TransitionError> {
        if self.state == LifecycleState::Idle {
            return Err(TransitionError {
                from: LifecycleState::Idle,
                to: LifecycleState::Idle,
            });
        }
        self.reset(ui);
        Ok(())
    }

    /// Forced reset from any state. Returns whether the state actually changed.
    pub fn force_idle(&mut self, ui: &mut dyn HostUi) -> bool {
        if self.state == LifecycleState::Idle {
            return false;
        }
        self.reset(ui);
        true
    }

    fn reset(&mut self, ui: &mut dyn HostUi) {
        self.state = LifecycleState::Idle;
        ui.set_canvas_interactive(false);
        ui.set_phase_class(LifecycleState::Idle);
        ui.set_reveal_enabled(true);
    }

    fn check(&self, from: LifecycleState, to: LifecycleState) -> Result<(), TransitionError> {
        if self.state == from {
            Ok(())
        } else {
            Err(TransitionError {
                from: self.state,
                to,
            })
        }
    }
}
