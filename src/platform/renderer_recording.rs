/// Display-list renderer: records draw calls instead of rasterizing them.
///
/// Used to cache scenes that only change on specific events (the skills
/// constellation) and replay them every frame, and by tests to inspect what
/// a view drew.

use crate::core::types::{Color, Vec2};
use crate::platform::renderer::Renderer;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect { x: f64, y: f64, w: f64, h: f64, color: Color },
    FillRoundedRect { x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color },
    StrokeRoundedRect { x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color, line_width: f64 },
    Line { from: Vec2, to: Vec2, color: Color, line_width: f64 },
    FillPolygon { points: Vec<Vec2>, color: Color },
    StrokePolygon { points: Vec<Vec2>, color: Color, line_width: f64 },
    Text { x: f64, y: f64, text: String, size: f64, color: Color, centered: bool },
    FillCircle { cx: f64, cy: f64, radius: f64, color: Color },
    StrokeCircle { cx: f64, cy: f64, radius: f64, color: Color, line_width: f64 },
    RadialGlow { cx: f64, cy: f64, radius: f64, color: Color },
    PushClip { x: f64, y: f64, w: f64, h: f64 },
    PopClip,
    PushGroup,
    PopGroup { alpha: f64 },
}

impl DrawCmd {
    pub fn replay(&self, r: &dyn Renderer) {
        match self {
            DrawCmd::FillRect { x, y, w, h, color } => r.fill_rect(*x, *y, *w, *h, *color),
            DrawCmd::FillRoundedRect { x, y, w, h, radius, color } => {
                r.fill_rounded_rect(*x, *y, *w, *h, *radius, *color)
            }
            DrawCmd::StrokeRoundedRect { x, y, w, h, radius, color, line_width } => {
                r.stroke_rounded_rect(*x, *y, *w, *h, *radius, *color, *line_width)
            }
            DrawCmd::Line { from, to, color, line_width } => {
                r.draw_line(*from, *to, *color, *line_width)
            }
            DrawCmd::FillPolygon { points, color } => r.fill_polygon(points, *color),
            DrawCmd::StrokePolygon { points, color, line_width } => {
                r.stroke_polygon(points, *color, *line_width)
            }
            DrawCmd::Text { x, y, text, size, color, centered } => {
                if *centered {
                    r.draw_text_centered(*x, *y, text, *size, *color)
                } else {
                    r.draw_text(*x, *y, text, *size, *color)
                }
            }
            DrawCmd::FillCircle { cx, cy, radius, color } => r.fill_circle(*cx, *cy, *radius, *color),
            DrawCmd::StrokeCircle { cx, cy, radius, color, line_width } => {
                r.stroke_circle(*cx, *cy, *radius, *color, *line_width)
            }
            DrawCmd::RadialGlow { cx, cy, radius, color } => {
                r.fill_radial_glow(*cx, *cy, *radius, *color)
            }
            DrawCmd::PushClip { x, y, w, h } => r.push_clip(*x, *y, *w, *h),
            DrawCmd::PopClip => r.pop_clip(),
            DrawCmd::PushGroup => r.push_group(),
            DrawCmd::PopGroup { alpha } => r.pop_group(*alpha),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: RefCell<Vec<DrawCmd>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<DrawCmd> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    #[cfg(test)]
    pub fn commands(&self) -> Vec<DrawCmd> {
        self.commands.borrow().clone()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }

    /// Every line segment drawn so far.
    #[cfg(test)]
    pub fn lines(&self) -> Vec<(Vec2, Vec2, Color, f64)> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Line { from, to, color, line_width } => {
                    Some((*from, *to, *color, *line_width))
                }
                _ => None,
            })
            .collect()
    }

    /// Every piece of text drawn so far.
    #[cfg(test)]
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, cmd: DrawCmd) {
        self.commands.borrow_mut().push(cmd);
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, _width: i32, _height: i32) {
        self.commands.get_mut().clear();
    }

    fn end_frame(&mut self) {}

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.push(DrawCmd::FillRect { x, y, w, h, color });
    }

    fn fill_rounded_rect(&self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color) {
        self.push(DrawCmd::FillRoundedRect { x, y, w, h, radius, color });
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
        self.push(DrawCmd::StrokeRoundedRect { x, y, w, h, radius, color, line_width });
    }

    fn draw_line(&self, from: Vec2, to: Vec2, color: Color, line_width: f64) {
        self.push(DrawCmd::Line { from, to, color, line_width });
    }

    fn fill_polygon(&self, points: &[Vec2], color: Color) {
        self.push(DrawCmd::FillPolygon { points: points.to_vec(), color });
    }

    fn stroke_polygon(&self, points: &[Vec2], color: Color, line_width: f64) {
        self.push(DrawCmd::StrokePolygon { points: points.to_vec(), color, line_width });
    }

    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color) {
        self.push(DrawCmd::Text { x, y, text: text.to_string(), size, color, centered: false });
    }

    fn draw_text_centered(&self, cx: f64, y: f64, text: &str, size: f64, color: Color) {
        self.push(DrawCmd::Text { x: cx, y, text: text.to_string(), size, color, centered: true });
    }

    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.push(DrawCmd::FillCircle { cx, cy, radius, color });
    }

    fn stroke_circle(&self, cx: f64, cy: f64, radius: f64, color: Color, line_width: f64) {
        self.push(DrawCmd::StrokeCircle { cx, cy, radius, color, line_width });
    }

    fn fill_radial_glow(&self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.push(DrawCmd::RadialGlow { cx, cy, radius, color });
    }

    fn push_clip(&self, x: f64, y: f64, w: f64, h: f64) {
        self.push(DrawCmd::PushClip { x, y, w, h });
    }

    fn pop_clip(&self) {
        self.push(DrawCmd::PopClip);
    }

    fn push_group(&self) {
        self.push(DrawCmd::PushGroup);
    }

    fn pop_group(&self, alpha: f64) {
        self.push(DrawCmd::PopGroup { alpha });
    }
}
