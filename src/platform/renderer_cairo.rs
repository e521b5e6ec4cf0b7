/// Cairo-based renderer implementation.

use crate::core::types::{Color, Vec2};
use crate::platform::renderer::Renderer;
use cairo::{Context, RadialGradient};
use std::f64::consts::PI;

const FONT_FACE: &str = "monospace";

pub struct RendererCairo {
    cr: Context,
}

impl RendererCairo {
    pub fn new(cr: Context) -> Self {
        Self { cr }
    }

    /// Update the Cairo context (e.g., after window resize).
    pub fn set_context(&mut self, cr: Context) {
        self.cr = cr;
    }

    fn set_color(&self, color: Color) {
        self.cr.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn rounded_rect_path(&self, x: f64, y: f64, w: f64, h: f64, r: f64) {
        self.cr.new_path();
        if r <= 0.0 {
            self.cr.rectangle(x, y, w, h);
            return;
        }
        let r = r.min(w / 2.0).min(h / 2.0);
        self.cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
        self.cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
        self.cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
        self.cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
        self.cr.close_path();
    }

    fn polygon_path(&self, points: &[Vec2]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.cr.new_path();
        self.cr.move_to(first.x, first.y);
        for p in rest {
            self.cr.line_to(p.x, p.y);
        }
        self.cr.close_path();
        true
    }

    fn select_font(&self, size: f64) {
        self.cr
            .select_font_face(FONT_FACE, cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.cr.set_font_size(size);
    }
}

impl Renderer for RendererCairo {
    fn begin_frame(&mut self, _width: i32, _height: i32) {
        self.cr.save().ok();
    }

    fn end_frame(&mut self) {
        self.cr.restore().ok();
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_color(color);
        self.cr.rectangle(x, y, w, h);
        self.cr.fill().ok();
    }

    fn fill_rounded_rect(&self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color) {
        self.set_color(color);
        self.rounded_rect_path(x, y, w, h, radius);
        self.cr.fill().ok();
    }

    fn stroke_rounded_rect(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        color: Color,
        line_width: f64,
    ) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.rounded_rect_path(x, y, w, h, radius);
        self.cr.stroke().ok();
    }

    fn draw_line(&self, from: Vec2, to: Vec2, color: Color, line_width: f64) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.cr.new_path();
        self.cr.move_to(from.x, from.y);
        self.cr.line_to(to.x, to.y);
        self.cr.stroke().ok();
    }

    fn fill_polygon(&self, points: &[Vec2], color: Color) {
        if self.polygon_path(points) {
            self.set_color(color);
            self.cr.fill().ok();
        }
    }

    fn stroke_polygon(&self, points: &[Vec2], color: Color, line_width: f64) {
        if self.polygon_path(points) {
            self.set_color(color);
            self.cr.set_line_width(line_width);
            self.cr.stroke().ok();
        }
    }

    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color) {
        self.set_color(color);
        self.select_font(size);
        self.cr.move_to(x, y + size);
        self.cr.show_text(text).ok();
    }

    fn draw_text_centered(&self, cx: f64, y: f64, text: &str, size: f64, color: Color) {
        self.set_color(color);
        self.select_font(size);
        let width = self
            .cr
            .text_extents(text)
            .map(|ext| ext.x_advance())
            .unwrap_or(0.0);
        self.cr.move_to(cx - width / 2.0, y + size);
        self.cr.show_text(text).ok();
    }

    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.set_color(color);
        self.cr.new_path();
        self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        self.cr.fill().ok();
    }

    fn stroke_circle(&self, cx: f64, cy: f64, radius: f64, color: Color, line_width: f64) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.cr.new_path();
        self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        self.cr.stroke().ok();
    }

    fn fill_radial_glow(&self, cx: f64, cy: f64, radius: f64, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let gradient = RadialGradient::new(cx, cy, 0.0, cx, cy, radius);
        gradient.add_color_stop_rgba(0.0, color.r, color.g, color.b, color.a);
        gradient.add_color_stop_rgba(1.0, color.r, color.g, color.b, 0.0);

        self.cr.save().ok();
        if self.cr.set_source(&gradient).is_ok() {
            self.cr.new_path();
            self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
            self.cr.fill().ok();
        }
        self.cr.restore().ok();
    }

    fn push_clip(&self, x: f64, y: f64, w: f64, h: f64) {
        self.cr.save().ok();
        self.cr.rectangle(x, y, w, h);
        self.cr.clip();
    }

    fn pop_clip(&self) {
        self.cr.restore().ok();
    }

    fn push_group(&self) {
        self.cr.push_group();
    }

    fn pop_group(&self, alpha: f64) {
        if self.cr.pop_group_to_source().is_ok() {
            self.cr.paint_with_alpha(alpha.clamp(0.0, 1.0)).ok();
        }
    }
}
