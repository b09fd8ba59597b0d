use super::{nearest_hit, rand_span, Effect, Step};
use crate::color::{random_palette_color, Rgba};
use crate::constants::*;
use crate::platform::{Bounds, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Balloon {
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgba,
    pub speed: f32,
    pub sway: f32,
    pub sway_offset: f32,
    pub popped: bool,
    pub pop_progress: f32,
    /// Unit directions of the burst lines drawn while popping.
    pub shards: SmallVec<[Vec2; BALLOON_SHARDS]>,
}

impl Balloon {
    fn rising(bounds: Bounds, rng: &mut StdRng) -> Self {
        Self {
            pos: Vec2::new(
                rand_span(rng, bounds.width),
                bounds.height + BALLOON_SPAWN_OFFSET + rand_span(rng, 150.0),
            ),
            size: rng.gen_range(40.0..70.0),
            color: random_palette_color(rng),
            speed: rng.gen_range(1.0..3.0),
            sway: rng.gen_range(0.0..15.0),
            sway_offset: rng.gen_range(0.0..TAU),
            popped: false,
            pop_progress: 0.0,
            shards: SmallVec::new(),
        }
    }

    /// Body centre including the current sway.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.sway_offset.sin() * self.sway, self.pos.y)
    }

    pub fn pop(&mut self, rng: &mut StdRng) {
        if self.popped {
            return;
        }
        self.pos = self.center();
        self.sway = 0.0;
        self.popped = true;
        self.pop_progress = 0.0;
        let jitter = rng.gen_range(0.0..TAU / BALLOON_SHARDS as f32);
        self.shards = (0..BALLOON_SHARDS)
            .map(|i| {
                let a = jitter + TAU * i as f32 / BALLOON_SHARDS as f32;
                Vec2::new(a.cos(), a.sin())
            })
            .collect();
    }
}

/// Rising balloons that pop into radial burst lines when clicked.
#[derive(Clone, Debug, Default)]
pub struct Balloons {
    pub balloons: Vec<Balloon>,
}

impl Balloons {
    pub fn spawn(bounds: Bounds, rng: &mut StdRng) -> Self {
        Self {
            balloons: (0..BALLOON_COUNT)
                .map(|_| Balloon::rising(bounds, rng))
                .collect(),
        }
    }
}

impl Effect for Balloons {
    fn update(&mut self, step: &Step, rng: &mut StdRng) {
        self.balloons.retain_mut(|b| {
            let gone = if b.popped {
                b.pop_progress += BALLOON_POP_STEP;
                b.pop_progress >= 1.0
            } else {
                b.pos.y -= b.speed;
                b.sway_offset += BALLOON_SWAY_STEP;
                b.pos.y < -b.size
            };
            if !gone {
                return true;
            }
            if step.recycle {
                *b = Balloon::rising(step.bounds, rng);
                true
            } else {
                false
            }
        });
    }

    fn render(&self, surface: &mut dyn Surface) {
        for b in &self.balloons {
            let c = b.center();
            if b.popped {
                let alpha = 1.0 - b.pop_progress;
                let inner = b.size * 0.2;
                let outer = b.size * (0.4 + b.pop_progress);
                for dir in &b.shards {
                    surface.stroke_line(
                        c + *dir * inner,
                        c + *dir * outer,
                        3.0,
                        b.color.with_alpha(alpha),
                    );
                }
                continue;
            }
            surface.fill_ellipse(c, Vec2::new(b.size * 0.4, b.size * 0.5), b.color);
            // string
            let tail = Vec2::new(
                b.pos.x + (b.sway_offset + 0.5).sin() * b.sway,
                b.pos.y + b.size * 0.7,
            );
            surface.stroke_line(c + Vec2::new(0.0, b.size * 0.5), tail, 2.0, b.color);
            surface.fill_ellipse(
                c + Vec2::new(-b.size * 0.1, -b.size * 0.15),
                Vec2::new(b.size * 0.15, b.size * 0.2),
                Rgba::WHITE.with_alpha(0.4),
            );
        }
    }

    fn hit_test(&self, point: Vec2) -> Option<usize> {
        nearest_hit(
            point,
            self.balloons.iter().map(|b| {
                let r = if b.popped { -1.0 } else { b.size * 0.5 };
                (b.center(), r)
            }),
        )
    }

    fn on_click(&mut self, point: Vec2, rng: &mut StdRng) {
        if let Some(i) = self.hit_test(point) {
            self.balloons[i].pop(rng);
            log::debug!("[click] popped balloon {}", i);
        }
    }

    fn live_count(&self) -> usize {
        self.balloons.len()
    }
}
