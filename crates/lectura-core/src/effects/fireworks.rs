use super::{nearest_hit, rand_span, Effect, Step};
use crate::color::{random_palette_color, Rgba};
use crate::constants::*;
use crate::platform::{Bounds, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub color: Rgba,
}

/// Explosion waiting for its due time (ms since session start).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingBurst {
    pub due_ms: f64,
    pub at: Vec2,
}

/// Timed radial bursts with gravity and fade.
///
/// Bursts are staggered through a per-session queue drained by `update`, so a
/// discarded session takes its pending bursts with it.
#[derive(Clone, Debug, Default)]
pub struct Fireworks {
    pub sparks: Vec<Spark>,
    pub pending: Vec<PendingBurst>,
}

impl Fireworks {
    pub fn spawn(bounds: Bounds, duration_ms: f64, rng: &mut StdRng) -> Self {
        let bursts = burst_count(duration_ms);
        let spacing = duration_ms.max(0.0) * FIREWORKS_SCHEDULE_FRACTION / bursts as f64;
        let pending = (0..bursts)
            .map(|i| PendingBurst {
                due_ms: i as f64 * spacing,
                at: Vec2::new(
                    rand_span(rng, bounds.width),
                    rand_span(rng, bounds.height * 0.5),
                ),
            })
            .collect();
        Self {
            sparks: Vec::new(),
            pending,
        }
    }

    pub fn explode(&mut self, at: Vec2, rng: &mut StdRng) {
        let n = FIREWORKS_PARTICLES_PER_BURST;
        self.sparks.reserve(n);
        for i in 0..n {
            let angle = TAU * i as f32 / n as f32;
            let speed = rng.gen_range(2.0..6.0);
            self.sparks.push(Spark {
                pos: at,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life: FIREWORKS_PARTICLE_LIFE,
                color: random_palette_color(rng),
            });
        }
    }
}

/// Number of scheduled bursts for a window of `duration_ms`.
pub fn burst_count(duration_ms: f64) -> usize {
    let n = (duration_ms.max(0.0) / FIREWORKS_MS_PER_BURST).round() as usize;
    n.clamp(FIREWORKS_MIN_BURSTS, FIREWORKS_MAX_BURSTS)
}

impl Effect for Fireworks {
    fn update(&mut self, step: &Step, rng: &mut StdRng) {
        if step.recycle {
            let mut due = Vec::new();
            self.pending.retain(|b| {
                if b.due_ms <= step.elapsed_ms {
                    due.push(b.at);
                    false
                } else {
                    true
                }
            });
            for at in due {
                self.explode(at, rng);
            }
        } else {
            self.pending.clear();
        }

        self.sparks.retain_mut(|s| {
            s.pos += s.vel;
            s.vel.y += GRAVITY;
            s.life -= FIREWORKS_LIFE_DECAY;
            s.life > 0.0
        });
    }

    fn render(&self, surface: &mut dyn Surface) {
        for s in &self.sparks {
            let alpha = s.life / FIREWORKS_PARTICLE_LIFE;
            surface.fill_rect(s.pos, FIREWORKS_PARTICLE_SIZE, 0.0, s.color.with_alpha(alpha));
        }
    }

    fn hit_test(&self, point: Vec2) -> Option<usize> {
        nearest_hit(point, self.sparks.iter().map(|s| (s.pos, MIN_HIT_RADIUS)))
    }

    fn on_click(&mut self, point: Vec2, rng: &mut StdRng) {
        self.explode(point, rng);
    }

    fn live_count(&self) -> usize {
        self.sparks.len()
    }
}
