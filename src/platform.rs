use crate::canvas::CanvasSurface;
use crate::frame::FrameLoop;
use crate::ui;
use glam::Vec2;
use lectura_core::{
    Bounds, Clock, FrameScheduler, Generation, HostUi, LifecycleState, Rgba, Surface, TickHandle,
};
use web_sys as web;

/// Browser host for the effect engine: rAF ticks, `performance.now()`,
/// the overlay canvas and document-root state classes.
pub struct WebPlatform {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    performance: Option<web::Performance>,
    surface: CanvasSurface,
    frames: FrameLoop,
}

impl WebPlatform {
    pub fn new(
        window: &web::Window,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        frames: FrameLoop,
    ) -> Self {
        Self {
            document,
            surface: CanvasSurface::new(canvas.clone(), ctx),
            canvas,
            performance: window.performance(),
            frames,
        }
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl Clock for WebPlatform {
    fn now_ms(&self) -> f64 {
        self.performance
            .as_ref()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}

impl FrameScheduler for WebPlatform {
    fn request_tick(&mut self, generation: Generation) -> Option<TickHandle> {
        self.frames.request(generation)
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        self.frames.cancel(handle);
    }
}

impl Surface for WebPlatform {
    fn bounds(&self) -> Bounds {
        self.surface.bounds()
    }

    fn clear(&mut self) {
        self.surface.clear();
    }

    fn fill_rect(&mut self, center: Vec2, size: f32, rotation: f32, color: Rgba) {
        self.surface.fill_rect(center, size, rotation, color);
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgba) {
        self.surface.fill_ellipse(center, radii, color);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.surface.stroke_line(from, to, width, color);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.surface.stroke_circle(center, radius, width, color);
    }

    fn fill_polygon(&mut self, points: &[Vec2], fill: Rgba, outline: Option<(f32, Rgba)>) {
        self.surface.fill_polygon(points, fill, outline);
    }

    fn fill_gradient_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        focus: Vec2,
        stops: &[(f32, Rgba)],
    ) {
        self.surface.fill_gradient_circle(center, radius, focus, stops);
    }

    fn fill_glyph(&mut self, glyph: &str, center: Vec2, size: f32, rotation: f32) {
        self.surface.fill_glyph(glyph, center, size, rotation);
    }
}

impl HostUi for WebPlatform {
    fn set_phase_class(&mut self, state: LifecycleState) {
        ui::set_phase_class(&self.document, state);
    }

    fn set_reveal_enabled(&mut self, enabled: bool) {
        ui::set_reveal_enabled(&self.document, enabled);
    }

    fn set_canvas_interactive(&mut self, interactive: bool) {
        ui::set_canvas_interactive(&self.canvas, interactive);
    }
}
