use super::{nearest_hit, rand_span, Effect, Refill, Step};
use crate::constants::*;
use crate::platform::{Bounds, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct EmojiDrop {
    pub glyph: &'static str,
    pub pos: Vec2,
    pub size: f32,
    /// Steady fall speed the drop returns to after a bounce.
    pub fall_speed: f32,
    pub vy: f32,
    pub rotation: f32, // degrees
    pub rotation_speed: f32,
}

impl EmojiDrop {
    fn at(pos: Vec2, rng: &mut StdRng) -> Self {
        let fall_speed = rng.gen_range(2.0..5.0);
        Self {
            glyph: EMOJI_SET.choose(rng).copied().unwrap_or("⭐"),
            pos,
            size: rng.gen_range(30.0..60.0),
            fall_speed,
            vy: fall_speed,
            rotation: rng.gen_range(0.0..360.0),
            rotation_speed: rng.gen_range(-2.5..2.5),
        }
    }

    fn falling(bounds: Bounds, rng: &mut StdRng) -> Self {
        let pos = Vec2::new(
            rand_span(rng, bounds.width),
            EMOJI_SPAWN_Y - rand_span(rng, 150.0),
        );
        Self::at(pos, rng)
    }

    pub fn bounce(&mut self) {
        self.vy = -EMOJI_BOUNCE_SPEED;
        self.rotation_speed = -self.rotation_speed;
    }
}

/// Falling, rotating emoji that bounce back up when clicked.
#[derive(Clone, Debug, Default)]
pub struct EmojiRain {
    pub drops: Vec<EmojiDrop>,
    /// Spawn count kept alive while the window is open.
    pub target: usize,
}

impl EmojiRain {
    pub fn spawn(bounds: Bounds, rng: &mut StdRng) -> Self {
        let count = rng.gen_range(EMOJI_MIN_COUNT..=EMOJI_MAX_COUNT);
        Self {
            drops: (0..count).map(|_| EmojiDrop::falling(bounds, rng)).collect(),
            target: count,
        }
    }
}

impl Effect for EmojiRain {
    fn update(&mut self, step: &Step, rng: &mut StdRng) {
        let floor = step.bounds.height - EMOJI_SPAWN_Y;
        let mut refill = Refill::new(self.drops.len(), self.target, step.recycle);
        self.drops.retain_mut(|d| {
            d.pos.y += d.vy;
            d.vy = (d.vy + EMOJI_RECOVERY).min(d.fall_speed);
            d.rotation += d.rotation_speed;
            if d.pos.y <= floor {
                return true;
            }
            if refill.respawn() {
                *d = EmojiDrop::falling(step.bounds, rng);
                true
            } else {
                false
            }
        });
    }

    fn render(&self, surface: &mut dyn Surface) {
        for d in &self.drops {
            surface.fill_glyph(d.glyph, d.pos, d.size, d.rotation.to_radians());
        }
    }

    fn hit_test(&self, point: Vec2) -> Option<usize> {
        nearest_hit(point, self.drops.iter().map(|d| (d.pos, d.size * 0.5)))
    }

    fn on_click(&mut self, point: Vec2, rng: &mut StdRng) {
        match self.hit_test(point) {
            Some(i) => {
                self.drops[i].bounce();
                log::debug!("[click] bounced emoji {}", i);
            }
            None => self.drops.push(EmojiDrop::at(point, rng)),
        }
    }

    fn live_count(&self) -> usize {
        self.drops.len()
    }
}
