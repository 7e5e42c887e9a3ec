use glam::Vec2;
use showcase_core::{DrawSurface, Stroke};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

/// `DrawSurface` over a 2D canvas context. Canvas calls that can throw are
/// fire-and-forget: a failed draw just leaves that element out of the frame.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
    }

    fn set_dash(&self, dash: Option<[f32; 2]>) {
        let pattern = js_sys::Array::new();
        if let Some([on, off]) = dash {
            pattern.push(&JsValue::from_f64(on as f64));
            pattern.push(&JsValue::from_f64(off as f64));
        }
        _ = self.ctx.set_line_dash(&pattern);
    }
}

impl DrawSurface for CanvasSurface {
    fn reset_transform(&mut self, pixel_ratio: f32) {
        let r = pixel_ratio as f64;
        _ = self.ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0);
    }

    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_linear_gradient(&mut self, size: Vec2, stops: &[(f32, &str)]) {
        let (w, h) = (size.x as f64, size.y as f64);
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, h);
        for (offset, color) in stops {
            _ = gradient.add_color_stop(*offset, color);
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[(f32, &str)]) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius.max(0.0) as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        for (offset, color) in stops {
            _ = gradient.add_color_stop(*offset, color);
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(color);
        self.circle_path(center, radius);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke<'_>) {
        self.ctx.set_stroke_style_str(stroke.color);
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.set_global_alpha(stroke.alpha as f64);
        if stroke.dash.is_some() {
            self.set_dash(stroke.dash);
        }
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        if stroke.dash.is_some() {
            self.set_dash(None);
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke<'_>) {
        self.ctx.set_stroke_style_str(stroke.color);
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.set_global_alpha(stroke.alpha as f64);
        if stroke.glow > 0.0 {
            self.ctx.set_shadow_blur(stroke.glow as f64);
            self.ctx.set_shadow_color(stroke.color);
        }
        self.circle_path(center, radius);
        self.ctx.stroke();
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_global_alpha(1.0);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(color);
        _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
