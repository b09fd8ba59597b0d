use crate::constants::EMOJI_FONT_FAMILY;
use glam::Vec2;
use lectura_core::{Bounds, Rgba};
use std::f64::consts::TAU;
use web_sys as web;

/// 2D canvas implementation of the engine's drawing contract.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    pub fn fill_rect(&self, center: Vec2, size: f32, rotation: f32, color: Rgba) {
        let ctx = &self.ctx;
        let s = size as f64;
        ctx.save();
        _ = ctx.translate(center.x as f64, center.y as f64);
        if rotation != 0.0 {
            _ = ctx.rotate(rotation as f64);
        }
        ctx.set_fill_style_str(&color.to_css());
        ctx.fill_rect(-s / 2.0, -s / 2.0, s, s);
        ctx.restore();
    }

    pub fn fill_ellipse(&self, center: Vec2, radii: Vec2, color: Rgba) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x.max(0.0) as f64,
            radii.y.max(0.0) as f64,
            0.0,
            0.0,
            TAU,
        );
        ctx.set_fill_style_str(&color.to_css());
        ctx.fill();
    }

    pub fn stroke_line(&self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_line_width(width as f64);
        ctx.set_stroke_style_str(&color.to_css());
        ctx.stroke();
    }

    pub fn stroke_circle(&self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        ctx.set_line_width(width as f64);
        ctx.set_stroke_style_str(&color.to_css());
        ctx.stroke();
    }

    pub fn fill_polygon(&self, points: &[Vec2], fill: Rgba, outline: Option<(f32, Rgba)>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.close_path();
        ctx.set_fill_style_str(&fill.to_css());
        ctx.fill();
        if let Some((width, color)) = outline {
            ctx.set_line_width(width as f64);
            ctx.set_stroke_style_str(&color.to_css());
            ctx.stroke();
        }
    }

    pub fn fill_gradient_circle(
        &self,
        center: Vec2,
        radius: f32,
        focus: Vec2,
        stops: &[(f32, Rgba)],
    ) {
        let ctx = &self.ctx;
        let r = radius.max(0.0) as f64;
        let gradient = match ctx.create_radial_gradient(
            focus.x as f64,
            focus.y as f64,
            0.0,
            center.x as f64,
            center.y as f64,
            r,
        ) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[canvas] radial gradient failed: {:?}", e);
                return;
            }
        };
        for (offset, color) in stops {
            _ = gradient.add_color_stop(offset.clamp(0.0, 1.0), &color.to_css());
        }
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, r, 0.0, TAU);
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();
    }

    pub fn fill_glyph(&self, glyph: &str, center: Vec2, size: f32, rotation: f32) {
        let ctx = &self.ctx;
        ctx.save();
        _ = ctx.translate(center.x as f64, center.y as f64);
        _ = ctx.rotate(rotation as f64);
        ctx.set_font(&format!("{}px {}", size.round(), EMOJI_FONT_FAMILY));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        _ = ctx.fill_text(glyph, 0.0, 0.0);
        ctx.restore();
    }
}
