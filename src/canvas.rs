use crate::surface::Surface;
use anyhow::Context;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] backed by an HTML canvas and its 2d context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .context("canvas has no 2d context")?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    #[inline]
    fn arc(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_filter(&mut self, filter: &str) {
        self.ctx.set_filter(filter);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, style: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(style);
        self.ctx.set_line_width(line_width as f64);
        self.arc(center, radius);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str) {
        self.ctx.set_fill_style_str(style);
        self.arc(center, radius);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &str, line_width: f32, dash: &[f32]) {
        self.ctx.set_stroke_style_str(style);
        self.ctx.set_line_width(line_width as f64);
        let segments = js_sys::Array::new();
        for d in dash {
            segments.push(&JsValue::from_f64(*d as f64));
        }
        _ = self.ctx.set_line_dash(&segments);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn composite(&mut self, source: &Self, origin: Vec2) {
        _ = self.ctx.draw_image_with_html_canvas_element(
            &source.canvas,
            origin.x as f64,
            origin.y as f64,
        );
    }
}
