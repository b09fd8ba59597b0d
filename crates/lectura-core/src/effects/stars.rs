use super::{nearest_hit, rand_span, Effect, Refill, Step};
use crate::color::Rgba;
use crate::constants::*;
use crate::platform::{Bounds, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub life: f32,
    pub growing: bool,
    pub rotation: f32, // degrees
    pub drift: Vec2,
    /// Remaining ticks of the twinkle started by a click.
    pub twinkle: u32,
}

impl Star {
    fn at(pos: Vec2, rng: &mut StdRng) -> Self {
        Self {
            pos,
            size: rng.gen_range(10.0..30.0),
            life: STAR_LIFE,
            growing: true,
            rotation: rng.gen_range(0.0..360.0),
            drift: Vec2::ZERO,
            twinkle: 0,
        }
    }

    fn anywhere(bounds: Bounds, rng: &mut StdRng) -> Self {
        let pos = Vec2::new(rand_span(rng, bounds.width), rand_span(rng, bounds.height));
        Self::at(pos, rng)
    }

    /// Pulse scale: grows over the first half of its life, shrinks over the second.
    pub fn scale(&self) -> f32 {
        let half = STAR_LIFE * 0.5;
        if self.growing {
            (STAR_LIFE - self.life) / half
        } else {
            self.life / half
        }
    }

    pub fn outline(&self) -> SmallVec<[Vec2; 10]> {
        let twinkle = if self.twinkle > 0 {
            1.0 + 0.3 * (self.twinkle as f32 * 0.6).sin().abs()
        } else {
            1.0
        };
        let outer = self.size * self.scale() * twinkle;
        let inner = outer * STAR_INNER_RATIO;
        let rot = self.rotation.to_radians();
        let mut pts = SmallVec::new();
        for i in 0..5 {
            let a = TAU * i as f32 / 5.0 - PI / 2.0 + rot;
            pts.push(self.pos + Vec2::new(a.cos(), a.sin()) * outer);
            let b = a + PI / 5.0;
            pts.push(self.pos + Vec2::new(b.cos(), b.sin()) * inner);
        }
        pts
    }
}

/// Pulsing five-pointed stars; clicks make them twinkle and drift.
#[derive(Clone, Debug, Default)]
pub struct Stars {
    pub stars: Vec<Star>,
    /// Spawn count kept alive while the window is open.
    pub target: usize,
}

impl Stars {
    pub fn spawn(bounds: Bounds, rng: &mut StdRng) -> Self {
        Self {
            stars: (0..STAR_COUNT).map(|_| Star::anywhere(bounds, rng)).collect(),
            target: STAR_COUNT,
        }
    }
}

impl Effect for Stars {
    fn update(&mut self, step: &Step, rng: &mut StdRng) {
        let mut refill = Refill::new(self.stars.len(), self.target, step.recycle);
        self.stars.retain_mut(|s| {
            if s.growing && s.life < STAR_LIFE * 0.5 {
                s.growing = false;
            }
            s.life -= STAR_LIFE_DECAY;
            s.rotation += STAR_SPIN_STEP;
            s.pos += s.drift;
            s.twinkle = s.twinkle.saturating_sub(1);
            if s.life > 0.0 {
                return true;
            }
            if refill.respawn() {
                *s = Star::anywhere(step.bounds, rng);
                true
            } else {
                false
            }
        });
    }

    fn render(&self, surface: &mut dyn Surface) {
        let gold = Rgba::from(STAR_GOLD);
        for s in &self.stars {
            let alpha = (s.life / STAR_LIFE).clamp(0.0, 1.0);
            let glow = if s.twinkle > 0 { 1.0 } else { alpha * 0.5 };
            surface.fill_polygon(
                &s.outline(),
                gold.with_alpha(alpha),
                Some((2.0, Rgba::WHITE.with_alpha(glow))),
            );
        }
    }

    fn hit_test(&self, point: Vec2) -> Option<usize> {
        nearest_hit(
            point,
            self.stars
                .iter()
                .map(|s| (s.pos, (s.size * s.scale()).max(MIN_HIT_RADIUS))),
        )
    }

    fn on_click(&mut self, point: Vec2, rng: &mut StdRng) {
        match self.hit_test(point) {
            Some(i) => {
                let s = &mut self.stars[i];
                let a = rng.gen_range(0.0..TAU);
                s.drift = Vec2::new(a.cos(), a.sin()) * STAR_DRIFT_SPEED;
                s.twinkle = STAR_TWINKLE_TICKS;
                log::debug!("[click] twinkle star {}", i);
            }
            None => self.stars.push(Star::at(point, rng)),
        }
    }

    fn live_count(&self) -> usize {
        self.stars.len()
    }
}
