pub mod color;
pub mod config;
pub mod constants;
pub mod effects;
pub mod engine;
pub mod interaction;
pub mod lifecycle;
pub mod platform;
pub mod session;
pub mod trigger;

pub use color::Rgba;
pub use config::{EffectConfig, EffectSettings};
pub use effects::{Effect, EffectKind, EffectScene, Step, UnknownEffect};
pub use engine::EffectEngine;
pub use lifecycle::{Lifecycle, LifecycleState, TransitionError};
pub use platform::{
    Bounds, Clock, FrameScheduler, Generation, HostUi, InstantClock, Platform, Surface, TickHandle,
};
pub use session::{EffectSession, SessionPhase};
pub use trigger::TriggerCounter;
