/// Entry screen: pick how to see the portfolio.

use crate::core::config;
use crate::core::content;
use crate::core::types::{Color, Mode, MouseEvent, Rect, Vec2};
use crate::effects::animation::{Animation, Easing};
use crate::platform::renderer::Renderer;
use crate::views::widgets::ViewAction;

struct Choice {
    label: &'static str,
    sub: &'static str,
    icon: &'static str,
    color: u32,
    mode: Mode,
}

/// "Curious" has no presentation of its own and opens the logical one.
const CHOICES: [Choice; 3] = [
    Choice {
        label: "RECRUITER",
        sub: "Structured · Professional",
        icon: "⬡",
        color: config::ACCENT_BLUE,
        mode: Mode::Logical,
    },
    Choice {
        label: "CREATIVE DIRECTOR",
        sub: "Experimental · Immersive",
        icon: "◈",
        color: config::ACCENT_VIOLET,
        mode: Mode::Creative,
    },
    Choice {
        label: "CURIOUS",
        sub: "Show me everything",
        icon: "◫",
        color: config::ACCENT_MINT,
        mode: Mode::Logical,
    },
];

const CHOICE_W: f64 = 220.0;
const CHOICE_H: f64 = 110.0;
const CHOICE_GAP: f64 = 24.0;
const HOVER_LIFT: f64 = 4.0;

pub struct EntryView {
    fade: Animation,
    hovered: Option<usize>,
    time_sec: f64,
}

impl EntryView {
    pub fn new() -> Self {
        Self {
            fade: Animation::new(Easing::Linear),
            hovered: None,
            time_sec: 0.0,
        }
    }

    /// Reset to the invisible pre-fade state.
    pub fn mount(&mut self) {
        self.fade.reset();
        self.hovered = None;
        self.time_sec = 0.0;
    }

    /// Deferred fade-in, fired by the application timer after mount.
    pub fn begin_fade_in(&mut self) {
        self.fade.start(config::ENTRY_FADE_MS);
    }

    pub fn opacity(&self) -> f64 {
        self.fade.progress()
    }

    pub fn update(&mut self, dt_ms: f64) {
        self.time_sec += dt_ms / 1000.0;
        self.fade.update(dt_ms);
    }

    fn choice_rects(width: f64, height: f64) -> Vec<Rect> {
        let total = CHOICES.len() as f64 * CHOICE_W + (CHOICES.len() as f64 - 1.0) * CHOICE_GAP;
        let x0 = (width - total) / 2.0;
        let y = height * 0.62;
        (0..CHOICES.len())
            .map(|i| Rect::new(x0 + i as f64 * (CHOICE_W + CHOICE_GAP), y, CHOICE_W, CHOICE_H))
            .collect()
    }

    pub fn handle_mouse(&mut self, e: &MouseEvent, width: f64, height: f64) -> Option<ViewAction> {
        let pos = e.pos();
        self.hovered = Self::choice_rects(width, height)
            .iter()
            .position(|r| r.contains(pos));

        if e.is_left_click() {
            if let Some(i) = self.hovered {
                log::info!("entry choice: {}", CHOICES[i].label);
                return Some(ViewAction::Enter(CHOICES[i].mode));
            }
        }
        None
    }

    pub fn render(&self, r: &dyn Renderer, width: f64, height: f64) {
        r.fill_rect(0.0, 0.0, width, height, Color::from_hex(config::ENTRY_BG, 1.0));

        r.push_group();
        self.render_lines(r, width, height);
        self.render_titles(r, width, height);
        self.render_choices(r, width, height);
        r.pop_group(self.opacity());
    }

    fn render_lines(&self, r: &dyn Renderer, width: f64, height: f64) {
        for i in 0..config::ENTRY_LINE_COUNT {
            let period = 2.0 + i as f64 * 0.1;
            let phase = ((self.time_sec - i as f64 * 0.1) / period) * std::f64::consts::TAU;
            // 0.3..1.0 pulse, scaled by the line's base alpha
            let pulse = 0.65 - 0.35 * phase.cos();
            let x = width * i as f64 * 5.26 / 100.0;
            r.fill_rect(x, 0.0, 1.0, height, Color::from_hex(config::ENTRY_LINE, 0.08 * pulse));
        }
    }

    fn render_titles(&self, r: &dyn Renderer, width: f64, height: f64) {
        let cx = width / 2.0;
        let title_size = (width * 0.07).clamp(36.0, 96.0);
        let mut y = height * 0.18;

        r.draw_text_centered(cx, y, "◈ PERSONA SPLIT ◈", 14.0, Color::from_hex(config::ENTRY_LINE, 0.6));
        y += 38.0;
        r.draw_text_centered(cx, y, content::OWNER_NAME, title_size, Color::white(1.0));
        y += title_size + 12.0;
        r.draw_text_centered(cx, y, content::OWNER_ROLE, 16.0, Color::white(0.4));
        y += 16.0 + 56.0;
        r.draw_text_centered(cx, y, "How do you want to see me?", 14.0, Color::white(0.5));
    }

    fn render_choices(&self, r: &dyn Renderer, width: f64, height: f64) {
        for (i, (choice, rect)) in CHOICES
            .iter()
            .zip(Self::choice_rects(width, height))
            .enumerate()
        {
            let hovered = self.hovered == Some(i);
            let accent = Color::from_hex(choice.color, 1.0);
            let lift = if hovered { HOVER_LIFT } else { 0.0 };
            let Rect { x, y, w, h } = rect;
            let y = y - lift;

            if hovered {
                r.fill_radial_glow(x + w / 2.0, y + h / 2.0, w * 0.75, accent.with_alpha(0.19));
                r.fill_rect(x, y, w, h, accent.with_alpha(0.09));
            }
            let border = if hovered { accent } else { Color::white(0.15) };
            r.stroke_rounded_rect(x, y, w, h, 0.0, border, 1.0);

            let fg = if hovered { accent } else { Color::white(0.6) };
            r.draw_text_centered(x + w / 2.0, y + 18.0, choice.icon, 24.0, fg);
            r.draw_text_centered(x + w / 2.0, y + 54.0, choice.label, 11.0, fg);
            r.draw_text_centered(x + w / 2.0, y + 74.0, choice.sub, 11.0, fg.with_alpha(fg.a * 0.6));
        }
    }

    #[cfg(test)]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Center of a choice button, for driving the view from outside (tests, keyboard).
    #[cfg(test)]
    pub fn choice_center(index: usize, width: f64, height: f64) -> Option<Vec2> {
        Self::choice_rects(width, height)
            .get(index)
            .map(|r| Vec2::new(r.x + r.w / 2.0, r.y + r.h / 2.0))
    }
}

impl Default for EntryView {
    fn default() -> Self {
        Self::new()
    }
}
