/// Shared view helpers: actions, buttons, links and text layout.

use crate::core::types::{Color, Mode, Rect, Vec2};
use crate::platform::renderer::Renderer;

/// What a view asks the application to do in response to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Entry screen choice.
    Enter(Mode),
    /// Switch between the logical and creative presentations.
    Toggle,
    OpenLink(String),
}

/// Monospace advance used for layout; the Cairo renderer measures exactly
/// when centering, this is only for boxes and wrapping.
pub const CHAR_WIDTH_FACTOR: f64 = 0.6;

pub fn text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * CHAR_WIDTH_FACTOR
}

/// Greedy word wrap to at most `max_width` pixels per line.
pub fn wrap_text(text: &str, size: f64, max_width: f64) -> Vec<String> {
    let max_chars = ((max_width / (size * CHAR_WIDTH_FACTOR)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Clickable text box.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub size: f64,
}

impl Button {
    /// A button sized to its label with the given padding.
    pub fn fit(pos: Vec2, label: &'static str, size: f64, pad_x: f64, pad_y: f64) -> Self {
        Self {
            rect: Rect::new(
                pos.x,
                pos.y,
                text_width(label, size) + pad_x * 2.0,
                size + pad_y * 2.0,
            ),
            label,
            size,
        }
    }

    pub fn hit(&self, p: Vec2) -> bool {
        self.rect.contains(p)
    }

    pub fn draw(&self, r: &dyn Renderer, fg: Color, bg: Option<Color>, border: Option<Color>) {
        let Rect { x, y, w, h } = self.rect;
        if let Some(bg) = bg {
            r.fill_rect(x, y, w, h, bg);
        }
        if let Some(border) = border {
            r.stroke_rounded_rect(x, y, w, h, 0.0, border, 1.0);
        }
        r.draw_text_centered(x + w / 2.0, y + (h - self.size) / 2.0, self.label, self.size, fg);
    }
}

/// Text that opens `url` when clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub rect: Rect,
    pub text: String,
    pub url: String,
    pub size: f64,
}

impl Link {
    pub fn new(pos: Vec2, text: impl Into<String>, url: impl Into<String>, size: f64) -> Self {
        let text = text.into();
        let rect = Rect::new(pos.x, pos.y, text_width(&text, size), size * 1.4);
        Self {
            rect,
            text,
            url: url.into(),
            size,
        }
    }

    /// Same link laid out centered on `cx`.
    pub fn centered(cx: f64, y: f64, text: impl Into<String>, url: impl Into<String>, size: f64) -> Self {
        let mut link = Self::new(Vec2::new(0.0, y), text, url, size);
        link.rect.x = cx - link.rect.w / 2.0;
        link
    }

    pub fn hit(&self, p: Vec2) -> Option<ViewAction> {
        self.rect
            .contains(p)
            .then(|| ViewAction::OpenLink(self.url.clone()))
    }

    pub fn draw(&self, r: &dyn Renderer, color: Color, underline: Option<Color>) {
        r.draw_text(self.rect.x, self.rect.y, &self.text, self.size, color);
        if let Some(u) = underline {
            let y = self.rect.y + self.rect.h;
            r.draw_line(
                Vec2::new(self.rect.x, y),
                Vec2::new(self.rect.x + self.rect.w, y),
                u,
                1.0,
            );
        }
    }
}

/// Hand a URL to the desktop's default handler. Failures are logged only.
pub fn open_link(url: &str) {
    log::info!("opening {}", url);
    if let Err(e) = open::that(url) {
        log::warn!("failed to open {}: {}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("Where design meets code and code meets design", 10.0, 120.0);
        // 120 / 6 = 20 chars per line
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), "Where design meets code and code meets design");
    }

    #[test]
    fn test_wrap_keeps_long_words() {
        let lines = wrap_text("supercalifragilistic ok", 10.0, 30.0);
        assert_eq!(lines, vec!["supercalifragilistic".to_string(), "ok".to_string()]);
    }

    #[test]
    fn test_link_hit() {
        let link = Link::new(Vec2::new(10.0, 10.0), "github", "https://github.com/x", 10.0);
        assert_eq!(
            link.hit(Vec2::new(12.0, 12.0)),
            Some(ViewAction::OpenLink("https://github.com/x".to_string()))
        );
        assert_eq!(link.hit(Vec2::new(100.0, 12.0)), None);

        let centered = Link::centered(100.0, 0.0, "abcd", "u", 10.0);
        assert_eq!(centered.rect.x, 88.0);
    }

    #[test]
    fn test_button_fit() {
        let b = Button::fit(Vec2::new(0.0, 0.0), "GO", 10.0, 5.0, 2.0);
        assert_eq!(b.rect.w, 22.0);
        assert_eq!(b.rect.h, 14.0);
        assert!(b.hit(Vec2::new(21.0, 13.0)));
    }
}
