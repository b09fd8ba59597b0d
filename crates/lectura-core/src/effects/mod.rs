mod balloons;
mod bubbles;
mod confetti;
mod emoji_rain;
mod fireworks;
mod stars;

pub use balloons::{Balloon, Balloons};
pub use bubbles::{Bubble, Bubbles};
pub use confetti::{Confetti, ConfettiPiece};
pub use emoji_rain::{EmojiDrop, EmojiRain};
pub use fireworks::{burst_count, Fireworks, PendingBurst, Spark};
pub use stars::{Star, Stars};

use crate::platform::{Bounds, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Per-tick context handed to `Effect::update`.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub bounds: Bounds,
    /// Milliseconds since the session started.
    pub elapsed_ms: f64,
    /// True while inside the active window: continuous effects respawn
    /// objects instead of letting them expire.
    pub recycle: bool,
}

/// Shared capability set of every catalog entry.
pub trait Effect {
    /// Advance every live object by one tick and drop expired ones.
    fn update(&mut self, step: &Step, rng: &mut StdRng);

    fn render(&self, surface: &mut dyn Surface);

    /// Index of the object under `point`, nearest first.
    fn hit_test(&self, point: Vec2) -> Option<usize>;

    fn on_click(&mut self, point: Vec2, rng: &mut StdRng);

    /// Objects still in the collection (including ones mid pop animation).
    fn live_count(&self) -> usize;

    fn is_interactive(&self) -> bool {
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Confetti,
    Fireworks,
    Balloons,
    Stars,
    Bubbles,
    EmojiRain,
}

impl EffectKind {
    pub const ALL: [EffectKind; 6] = [
        EffectKind::Confetti,
        EffectKind::Fireworks,
        EffectKind::Balloons,
        EffectKind::Stars,
        EffectKind::Bubbles,
        EffectKind::EmojiRain,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Confetti => "confetti",
            EffectKind::Fireworks => "fireworks",
            EffectKind::Balloons => "balloons",
            EffectKind::Stars => "stars",
            EffectKind::Bubbles => "bubbles",
            EffectKind::EmojiRain => "emoji",
        }
    }

    pub fn random(rng: &mut StdRng) -> EffectKind {
        *Self::ALL.choose(rng).unwrap_or(&EffectKind::Confetti)
    }

    /// Build the initial object set for this kind.
    pub fn spawn(self, bounds: Bounds, duration_ms: f64, rng: &mut StdRng) -> EffectScene {
        match self {
            EffectKind::Confetti => EffectScene::Confetti(Confetti::spawn(bounds, rng)),
            EffectKind::Fireworks => {
                EffectScene::Fireworks(Fireworks::spawn(bounds, duration_ms, rng))
            }
            EffectKind::Balloons => EffectScene::Balloons(Balloons::spawn(bounds, rng)),
            EffectKind::Stars => EffectScene::Stars(Stars::spawn(bounds, rng)),
            EffectKind::Bubbles => EffectScene::Bubbles(Bubbles::spawn(bounds, rng)),
            EffectKind::EmojiRain => EffectScene::EmojiRain(EmojiRain::spawn(bounds, rng)),
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown effect '{0}'")]
pub struct UnknownEffect(pub String);

impl FromStr for EffectKind {
    type Err = UnknownEffect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "confetti" => Ok(EffectKind::Confetti),
            "fireworks" => Ok(EffectKind::Fireworks),
            "balloons" => Ok(EffectKind::Balloons),
            "stars" => Ok(EffectKind::Stars),
            "bubbles" => Ok(EffectKind::Bubbles),
            "emoji" | "emoji-rain" | "emojirain" => Ok(EffectKind::EmojiRain),
            _ => Err(UnknownEffect(s.to_string())),
        }
    }
}

/// Object set of one running effect. Variants expose their concrete state
/// for inspection; behaviour goes through `Effect`.
#[derive(Clone, Debug)]
pub enum EffectScene {
    Confetti(Confetti),
    Fireworks(Fireworks),
    Balloons(Balloons),
    Stars(Stars),
    Bubbles(Bubbles),
    EmojiRain(EmojiRain),
}

impl EffectScene {
    pub fn kind(&self) -> EffectKind {
        match self {
            EffectScene::Confetti(_) => EffectKind::Confetti,
            EffectScene::Fireworks(_) => EffectKind::Fireworks,
            EffectScene::Balloons(_) => EffectKind::Balloons,
            EffectScene::Stars(_) => EffectKind::Stars,
            EffectScene::Bubbles(_) => EffectKind::Bubbles,
            EffectScene::EmojiRain(_) => EffectKind::EmojiRain,
        }
    }

    pub fn effect(&self) -> &dyn Effect {
        match self {
            EffectScene::Confetti(e) => e,
            EffectScene::Fireworks(e) => e,
            EffectScene::Balloons(e) => e,
            EffectScene::Stars(e) => e,
            EffectScene::Bubbles(e) => e,
            EffectScene::EmojiRain(e) => e,
        }
    }

    pub fn effect_mut(&mut self) -> &mut dyn Effect {
        match self {
            EffectScene::Confetti(e) => e,
            EffectScene::Fireworks(e) => e,
            EffectScene::Balloons(e) => e,
            EffectScene::Stars(e) => e,
            EffectScene::Bubbles(e) => e,
            EffectScene::EmojiRain(e) => e,
        }
    }
}

// ---------------- shared helpers ----------------

/// Uniform sample in `[0, span)`; yields 0 for degenerate spans instead of panicking.
#[inline]
pub(crate) fn rand_span(rng: &mut StdRng, extent: f32) -> f32 {
    use rand::Rng;
    if extent > 0.0 {
        rng.gen::<f32>() * extent
    } else {
        0.0
    }
}

/// Respawn budget for one `update` pass. Only the spawn allocation is kept
/// topped up; objects added by clicks expire once they leave play.
pub(crate) struct Refill {
    live: usize,
    target: usize,
    recycle: bool,
}

impl Refill {
    pub(crate) fn new(live: usize, target: usize, recycle: bool) -> Self {
        Self {
            live,
            target,
            recycle,
        }
    }

    /// Called for an object that just left play; true when it should respawn.
    pub(crate) fn respawn(&mut self) -> bool {
        if self.recycle && self.live <= self.target {
            return true;
        }
        self.live = self.live.saturating_sub(1);
        false
    }
}

/// Nearest index whose circle (`center`, `radius`) contains `point`.
/// Entries with a negative radius never match.
pub(crate) fn nearest_hit<I>(point: Vec2, circles: I) -> Option<usize>
where
    I: IntoIterator<Item = (Vec2, f32)>,
{
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in circles.into_iter().enumerate() {
        let d = center.distance(point);
        if d <= radius {
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((i, d)),
            }
        }
    }
    best.map(|(i, _)| i)
}
