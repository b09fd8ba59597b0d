use glam::Vec2;
use web_sys as web;

/// Pointer position in canvas backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    css_to_canvas_px(
        Vec2::new(x_css, y_css),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Scale a CSS-pixel offset into backing-store pixels. A zero-sized CSS box
/// maps 1:1 instead of dividing by zero.
#[inline]
pub fn css_to_canvas_px(css: Vec2, css_size: Vec2, backing_size: Vec2) -> Vec2 {
    let sx = if css_size.x > 0.0 {
        backing_size.x / css_size.x
    } else {
        1.0
    };
    let sy = if css_size.y > 0.0 {
        backing_size.y / css_size.y
    } else {
        1.0
    };
    Vec2::new(css.x * sx, css.y * sy)
}
