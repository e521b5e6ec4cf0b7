/// Abstract rendering interface.

use crate::core::types::{Color, Vec2};

pub trait Renderer {
    fn begin_frame(&mut self, width: i32, height: i32);
    fn end_frame(&mut self);

    // Primitives
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn fill_rounded_rect(&self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color);
    fn stroke_rounded_rect(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        color: Color,
        line_width: f64,
    );
    fn draw_line(&self, from: Vec2, to: Vec2, color: Color, line_width: f64);
    fn fill_polygon(&self, points: &[Vec2], color: Color);
    fn stroke_polygon(&self, points: &[Vec2], color: Color, line_width: f64);

    // Text: `y` is the top of the line box
    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color);
    fn draw_text_centered(&self, cx: f64, y: f64, text: &str, size: f64, color: Color);

    // Circles
    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color);
    fn stroke_circle(&self, cx: f64, cy: f64, radius: f64, color: Color, line_width: f64);

    /// Radial gradient from `color` at the center to transparent at `radius`.
    fn fill_radial_glow(&self, cx: f64, cy: f64, radius: f64, color: Color);

    // Clipping
    fn push_clip(&self, x: f64, y: f64, w: f64, h: f64);
    fn pop_clip(&self);

    // Group opacity (fades of whole layers)
    fn push_group(&self);
    fn pop_group(&self, alpha: f64);
}
