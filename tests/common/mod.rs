// Recording host for driving the effect engine in host-side tests.

#![allow(dead_code)]

use glam::Vec2;
use lectura_core::{
    Bounds, Clock, EffectConfig, EffectEngine, FrameScheduler, Generation, HostUi,
    LifecycleState, Rgba, Surface, TickHandle,
};

#[derive(Debug, Default)]
pub struct MockPlatform {
    pub now: f64,
    pub bounds: Bounds,
    next_handle: u64,
    /// Every tick ever requested, in order.
    pub requested: Vec<(TickHandle, Generation)>,
    pub cancelled: Vec<TickHandle>,
    pub clears: usize,
    pub draws: usize,
    pub phase: LifecycleState,
    pub reveal_enabled: bool,
    pub canvas_interactive: bool,
    /// When set, frame requests are refused.
    pub refuse_ticks: bool,
}

impl MockPlatform {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            reveal_enabled: true,
            ..Default::default()
        }
    }

    pub fn last_request(&self) -> Option<(TickHandle, Generation)> {
        self.requested.last().copied()
    }
}

impl Clock for MockPlatform {
    fn now_ms(&self) -> f64 {
        self.now
    }
}

impl FrameScheduler for MockPlatform {
    fn request_tick(&mut self, generation: Generation) -> Option<TickHandle> {
        if self.refuse_ticks {
            return None;
        }
        self.next_handle += 1;
        let handle = TickHandle(self.next_handle);
        self.requested.push((handle, generation));
        Some(handle)
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        self.cancelled.push(handle);
    }
}

impl Surface for MockPlatform {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
    fn clear(&mut self) {
        self.clears += 1;
    }
    fn fill_rect(&mut self, _: Vec2, _: f32, _: f32, _: Rgba) {
        self.draws += 1;
    }
    fn fill_ellipse(&mut self, _: Vec2, _: Vec2, _: Rgba) {
        self.draws += 1;
    }
    fn stroke_line(&mut self, _: Vec2, _: Vec2, _: f32, _: Rgba) {
        self.draws += 1;
    }
    fn stroke_circle(&mut self, _: Vec2, _: f32, _: f32, _: Rgba) {
        self.draws += 1;
    }
    fn fill_polygon(&mut self, _: &[Vec2], _: Rgba, _: Option<(f32, Rgba)>) {
        self.draws += 1;
    }
    fn fill_gradient_circle(&mut self, _: Vec2, _: f32, _: Vec2, _: &[(f32, Rgba)]) {
        self.draws += 1;
    }
    fn fill_glyph(&mut self, _: &str, _: Vec2, _: f32, _: f32) {
        self.draws += 1;
    }
}

impl HostUi for MockPlatform {
    fn set_phase_class(&mut self, state: LifecycleState) {
        self.phase = state;
    }
    fn set_reveal_enabled(&mut self, enabled: bool) {
        self.reveal_enabled = enabled;
    }
    fn set_canvas_interactive(&mut self, interactive: bool) {
        self.canvas_interactive = interactive;
    }
}

pub type TestEngine = EffectEngine<MockPlatform>;

pub fn engine_with(config: EffectConfig) -> TestEngine {
    EffectEngine::with_seed(MockPlatform::new(800.0, 600.0), config, 7)
}

/// Advance the clock to `now` and deliver the most recently requested tick.
pub fn tick_at(engine: &mut TestEngine, now: f64) {
    engine.platform_mut().now = now;
    if let Some((_, generation)) = engine.platform().last_request() {
        engine.on_frame(generation);
    }
}
