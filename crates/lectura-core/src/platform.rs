//! Host seams the engine is driven through.
//!
//! The web front-end implements these on top of `requestAnimationFrame`,
//! `performance.now()`, a 2D canvas and the document root; tests implement
//! them with a recording mock.

use crate::color::Rgba;
use crate::lifecycle::LifecycleState;
use glam::Vec2;

/// Identifies one scheduled frame callback so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// Monotonic session tag. A tick carrying an older generation is inert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

impl Generation {
    #[inline]
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

/// Drawing-area size in canvas pixels. May be degenerate (0×0).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }
}

fn sanitize(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

pub trait Clock {
    fn now_ms(&self) -> f64;
}

pub trait FrameScheduler {
    /// Ask the host to call `EffectEngine::on_frame(generation)` on the next frame.
    /// `None` when no frame could be scheduled.
    fn request_tick(&mut self, generation: Generation) -> Option<TickHandle>;
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// Canvas-like drawing surface. Only the contract matters: the surface must
/// be blank whenever the engine is outside its active rendering window.
pub trait Surface {
    fn bounds(&self) -> Bounds;
    fn clear(&mut self);
    /// Axis-aligned square of side `size` centred on `center`, rotated by `rotation` radians.
    fn fill_rect(&mut self, center: Vec2, size: f32, rotation: f32, color: Rgba);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);
    fn fill_polygon(&mut self, points: &[Vec2], fill: Rgba, outline: Option<(f32, Rgba)>);
    /// Circle filled with a radial gradient running from `focus` out to the rim.
    fn fill_gradient_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        focus: Vec2,
        stops: &[(f32, Rgba)],
    );
    fn fill_glyph(&mut self, glyph: &str, center: Vec2, size: f32, rotation: f32);
}

/// Document-level affordances toggled by lifecycle transitions.
pub trait HostUi {
    /// Apply the state class for `state` on the document root, removing the others.
    fn set_phase_class(&mut self, state: LifecycleState);
    fn set_reveal_enabled(&mut self, enabled: bool);
    /// `pointer-events` on the effects canvas.
    fn set_canvas_interactive(&mut self, interactive: bool);
}

/// Everything the engine needs from its host.
pub trait Platform: Clock + FrameScheduler + Surface + HostUi {}

impl<T: Clock + FrameScheduler + Surface + HostUi> Platform for T {}

/// Wall clock backed by `instant::Instant`, for native hosts.
#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    origin: instant::Instant,
}

impl Default for InstantClock {
    fn default() -> Self {
        Self {
            origin: instant::Instant::now(),
        }
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
