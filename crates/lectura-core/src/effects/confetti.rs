use super::{nearest_hit, rand_span, Effect, Refill, Step};
use crate::color::{random_palette_color, Rgba};
use crate::constants::*;
use crate::platform::{Bounds, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct ConfettiPiece {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Rgba,
    pub rotation: f32, // degrees
    pub rotation_speed: f32,
}

impl ConfettiPiece {
    fn falling(bounds: Bounds, rng: &mut StdRng) -> Self {
        Self {
            pos: Vec2::new(
                rand_span(rng, bounds.width),
                CONFETTI_SPAWN_Y - rand_span(rng, 120.0),
            ),
            vel: Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(2.0..5.0)),
            size: rng.gen_range(4.0..12.0),
            color: random_palette_color(rng),
            rotation: rng.gen_range(0.0..360.0),
            rotation_speed: rng.gen_range(-5.0..5.0),
        }
    }

    fn burst(at: Vec2, rng: &mut StdRng) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(2.0..7.0);
        Self {
            pos: at,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            size: rng.gen_range(4.0..10.0),
            color: random_palette_color(rng),
            rotation: rng.gen_range(0.0..360.0),
            rotation_speed: rng.gen_range(-10.0..10.0),
        }
    }

    fn advance(&mut self) {
        self.pos += self.vel;
        self.rotation += self.rotation_speed;
        self.vel.y = (self.vel.y + GRAVITY).min(CONFETTI_MAX_FALL_SPEED);
    }
}

/// Falling rotated squares with gravity.
#[derive(Clone, Debug, Default)]
pub struct Confetti {
    pub pieces: Vec<ConfettiPiece>,
    /// Spawn count kept alive while the window is open.
    pub target: usize,
}

impl Confetti {
    pub fn spawn(bounds: Bounds, rng: &mut StdRng) -> Self {
        let count = rng.gen_range(CONFETTI_MIN_COUNT..=CONFETTI_MAX_COUNT);
        let pieces = (0..count)
            .map(|_| ConfettiPiece::falling(bounds, rng))
            .collect();
        Self {
            pieces,
            target: count,
        }
    }
}

impl Effect for Confetti {
    fn update(&mut self, step: &Step, rng: &mut StdRng) {
        let floor = step.bounds.height;
        let mut refill = Refill::new(self.pieces.len(), self.target, step.recycle);
        self.pieces.retain_mut(|p| {
            p.advance();
            if p.pos.y <= floor + p.size {
                return true;
            }
            if refill.respawn() {
                *p = ConfettiPiece::falling(step.bounds, rng);
                true
            } else {
                false
            }
        });
    }

    fn render(&self, surface: &mut dyn Surface) {
        for p in &self.pieces {
            surface.fill_rect(p.pos, p.size, p.rotation.to_radians(), p.color);
        }
    }

    fn hit_test(&self, point: Vec2) -> Option<usize> {
        nearest_hit(
            point,
            self.pieces
                .iter()
                .map(|p| (p.pos, p.size.max(MIN_HIT_RADIUS))),
        )
    }

    fn on_click(&mut self, point: Vec2, rng: &mut StdRng) {
        self.pieces
            .extend((0..CONFETTI_CLICK_BURST).map(|_| ConfettiPiece::burst(point, rng)));
    }

    fn live_count(&self) -> usize {
        self.pieces.len()
    }
}
