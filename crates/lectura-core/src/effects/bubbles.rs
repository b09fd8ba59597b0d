use super::{nearest_hit, rand_span, Effect, Step};
use crate::color::Rgba;
use crate::constants::*;
use crate::platform::{Bounds, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Bubble {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub sway: f32,
    pub sway_offset: f32,
    pub pop: bool,
    pub pop_progress: f32,
}

impl Bubble {
    fn rising(bounds: Bounds, rng: &mut StdRng) -> Self {
        Self {
            pos: Vec2::new(
                rand_span(rng, bounds.width),
                bounds.height + BUBBLE_SPAWN_OFFSET + rand_span(rng, 120.0),
            ),
            size: rng.gen_range(20.0..60.0),
            speed: rng.gen_range(1.0..3.0),
            sway: rng.gen_range(0.0..3.0),
            sway_offset: rng.gen_range(0.0..TAU),
            pop: false,
            pop_progress: 0.0,
        }
    }

    /// Drawn centre including sway; the ring of a popped bubble stays put.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.sway_offset.sin() * self.sway, self.pos.y)
    }

    pub fn burst(&mut self) {
        if self.pop {
            return;
        }
        self.pos = self.center();
        self.sway = 0.0;
        self.pop = true;
        self.pop_progress = 0.0;
    }
}

/// Rising gradient bubbles that pop by chance or on click.
#[derive(Clone, Debug, Default)]
pub struct Bubbles {
    pub bubbles: Vec<Bubble>,
}

impl Bubbles {
    pub fn spawn(bounds: Bounds, rng: &mut StdRng) -> Self {
        Self {
            bubbles: (0..BUBBLE_COUNT)
                .map(|_| Bubble::rising(bounds, rng))
                .collect(),
        }
    }
}

impl Effect for Bubbles {
    fn update(&mut self, step: &Step, rng: &mut StdRng) {
        self.bubbles.retain_mut(|b| {
            if !b.pop {
                b.pos.y -= b.speed;
                b.sway_offset += BUBBLE_SWAY_STEP;
                if b.pos.y < -b.size {
                    if step.recycle {
                        *b = Bubble::rising(step.bounds, rng);
                    } else {
                        b.burst();
                    }
                } else if rng.gen_bool(BUBBLE_POP_CHANCE) {
                    b.burst();
                }
                return true;
            }
            b.pop_progress += BUBBLE_POP_STEP;
            if b.pop_progress < 1.0 {
                return true;
            }
            if step.recycle {
                *b = Bubble::rising(step.bounds, rng);
                true
            } else {
                false
            }
        });
    }

    fn render(&self, surface: &mut dyn Surface) {
        let light = Rgba::from(BUBBLE_BLUE);
        let deep = Rgba::from(BUBBLE_DEEP);
        for b in &self.bubbles {
            let c = b.center();
            if b.pop {
                let alpha = 1.0 - b.pop_progress;
                let radius = b.size * (1.0 + b.pop_progress);
                surface.stroke_circle(c, radius, 3.0, light.with_alpha(alpha));
                continue;
            }
            let focus = c - Vec2::splat(b.size * 0.3);
            surface.fill_gradient_circle(
                c,
                b.size,
                focus,
                &[
                    (0.0, Rgba::WHITE.with_alpha(0.8)),
                    (0.5, light.with_alpha(0.3)),
                    (1.0, deep.with_alpha(0.4)),
                ],
            );
            surface.fill_ellipse(focus, Vec2::splat(b.size * 0.2), Rgba::WHITE.with_alpha(0.6));
        }
    }

    fn hit_test(&self, point: Vec2) -> Option<usize> {
        nearest_hit(
            point,
            self.bubbles
                .iter()
                .map(|b| (b.center(), if b.pop { -1.0 } else { b.size })),
        )
    }

    fn on_click(&mut self, point: Vec2, _rng: &mut StdRng) {
        if let Some(i) = self.hit_test(point) {
            self.bubbles[i].burst();
            log::debug!("[click] popped bubble {}", i);
        }
    }

    fn live_count(&self) -> usize {
        self.bubbles.len()
    }
}
