/// Recruiter-style presentation: light, structured, one section at a time.

use crate::core::config;
use crate::core::content::{self, PROJECTS, SKILLS};
use crate::core::types::{Color, MouseEvent, Rect, Vec2};
use crate::effects::animation::{Animation, Easing};
use crate::platform::renderer::Renderer;
use crate::views::widgets::{text_width, wrap_text, Button, Link, ViewAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

const PAD_X: f64 = 64.0;
const PROJECT_ROW_H: f64 = 88.0;

/// Geometry shared by rendering and hit testing.
struct Layout {
    brand: Rect,
    nav: Vec<(Section, Rect)>,
    toggle: Button,
    hero_buttons: [(Section, Button); 2],
    project_rows: Vec<Rect>,
    project_links: Vec<Link>,
    contact_links: Vec<Link>,
}

impl Layout {
    fn compute(width: f64, height: f64) -> Self {
        let nav_y = (config::NAV_HEIGHT - 11.0) / 2.0;
        let toggle = Button::fit(Vec2::new(0.0, 0.0), "◈ Creative Mode", 11.0, 20.0, 8.0);
        let toggle = Button {
            rect: Rect::new(
                width - PAD_X - toggle.rect.w,
                (config::NAV_HEIGHT - toggle.rect.h) / 2.0,
                toggle.rect.w,
                toggle.rect.h,
            ),
            ..toggle
        };

        let mut nav = Vec::new();
        let mut x = toggle.rect.x - 32.0;
        for section in Section::ALL[1..].iter().rev() {
            let w = text_width(section.label(), 11.0);
            x -= w;
            nav.push((*section, Rect::new(x, nav_y - 4.0, w, 19.0)));
            x -= 32.0;
        }
        nav.reverse();

        let hero_y = height * 0.68;
        let view_projects = Button::fit(Vec2::new(PAD_X, hero_y), "View Projects", 12.0, 28.0, 14.0);
        let touch_x = view_projects.rect.x + view_projects.rect.w + 16.0;
        let get_in_touch = Button::fit(Vec2::new(touch_x, hero_y), "Get in Touch", 12.0, 28.0, 14.0);

        let list_top = config::NAV_HEIGHT + 96.0;
        let project_rows: Vec<Rect> = (0..PROJECTS.len())
            .map(|i| Rect::new(PAD_X, list_top + i as f64 * PROJECT_ROW_H, width - PAD_X * 2.0, PROJECT_ROW_H))
            .collect();
        let project_links = PROJECTS
            .iter()
            .zip(&project_rows)
            .map(|(p, row)| {
                let text = "VIEW REPOSITORY →";
                Link::new(
                    Vec2::new(row.x + row.w - text_width(text, 11.0), row.y + 12.0),
                    text,
                    p.link,
                    11.0,
                )
            })
            .collect();

        let cx = width / 2.0;
        let contact_y = height * 0.52;
        let contact_links = vec![
            Link::centered(cx, contact_y, content::CONTACT_EMAIL, content::mailto(), 24.0),
            Link::centered(cx - 60.0, contact_y + 72.0, "GitHub", content::GITHUB_URL, 14.0),
            Link::centered(cx + 60.0, contact_y + 72.0, "LinkedIn", content::LINKEDIN_URL, 14.0),
        ];

        Self {
            brand: Rect::new(PAD_X, nav_y - 4.0, text_width("BAM / UI UX DEV", 13.0), 21.0),
            nav,
            toggle,
            hero_buttons: [(Section::Projects, view_projects), (Section::Contact, get_in_touch)],
            project_rows,
            project_links,
            contact_links,
        }
    }
}

pub struct LogicalView {
    section: Section,
    hovered_project: Option<usize>,
    hovered_toggle: bool,
    skill_bars: Animation,
}

impl LogicalView {
    pub fn new() -> Self {
        Self {
            section: Section::Hero,
            hovered_project: None,
            hovered_toggle: false,
            skill_bars: Animation::new(Easing::OutCubic),
        }
    }

    pub fn mount(&mut self) {
        self.section = Section::Hero;
        self.hovered_project = None;
        self.hovered_toggle = false;
        self.skill_bars.reset();
    }

    /// Deferred skill-bar fill, fired by the application timer after mount.
    pub fn begin_skill_bars(&mut self) {
        self.skill_bars.start(config::SKILL_BAR_FILL_MS);
    }

    #[cfg(test)]
    pub fn section(&self) -> Section {
        self.section
    }

    /// Rendered width of a skill bar as a fraction of the track.
    pub fn skill_fill(&self, index: usize) -> f64 {
        SKILLS
            .get(index)
            .map_or(0.0, |s| s.level as f64 / 100.0 * self.skill_bars.progress())
    }

    pub fn update(&mut self, dt_ms: f64) {
        self.skill_bars.update(dt_ms);
    }

    pub fn handle_mouse(&mut self, e: &MouseEvent, width: f64, height: f64) -> Option<ViewAction> {
        let layout = Layout::compute(width, height);
        let pos = e.pos();

        self.hovered_toggle = layout.toggle.hit(pos);
        self.hovered_project = if self.section == Section::Projects {
            layout.project_rows.iter().position(|r| r.contains(pos))
        } else {
            None
        };

        if !e.is_left_click() {
            return None;
        }

        if self.hovered_toggle {
            log::info!("toggle clicked from logical view");
            return Some(ViewAction::Toggle);
        }
        if layout.brand.contains(pos) {
            self.section = Section::Hero;
            return None;
        }
        if let Some((section, _)) = layout.nav.iter().find(|(_, r)| r.contains(pos)) {
            self.section = *section;
            return None;
        }

        match self.section {
            Section::Hero => {
                if let Some((section, _)) = layout.hero_buttons.iter().find(|(_, b)| b.hit(pos)) {
                    self.section = *section;
                }
                None
            }
            Section::Projects => layout.project_links.iter().find_map(|l| l.hit(pos)),
            Section::Contact => layout.contact_links.iter().find_map(|l| l.hit(pos)),
            Section::About | Section::Skills => None,
        }
    }

    pub fn render(&self, r: &dyn Renderer, width: f64, height: f64) {
        let layout = Layout::compute(width, height);
        let bg = if self.section == Section::Skills {
            config::LOGICAL_BG_ALT
        } else {
            config::LOGICAL_BG
        };
        r.fill_rect(0.0, 0.0, width, height, Color::from_hex(bg, 1.0));

        match self.section {
            Section::Hero => self.render_hero(r, &layout, width, height),
            Section::About => self.render_about(r, width),
            Section::Skills => self.render_skills(r, width),
            Section::Projects => self.render_projects(r, &layout),
            Section::Contact => self.render_contact(r, &layout, width, height),
        }

        self.render_nav(r, &layout, width);
    }

    fn render_nav(&self, r: &dyn Renderer, layout: &Layout, width: f64) {
        let text = Color::from_hex(config::LOGICAL_TEXT, 1.0);
        r.fill_rect(0.0, 0.0, width, config::NAV_HEIGHT, Color::from_hex(config::LOGICAL_BG, 0.92));
        r.fill_rect(0.0, config::NAV_HEIGHT - 1.0, width, 1.0, Color::from_hex(0x000000, 0.06));
        r.draw_text(layout.brand.x, layout.brand.y + 4.0, "BAM / UI UX DEV", 13.0, text);

        for (section, rect) in &layout.nav {
            let color = if *section == self.section {
                text
            } else {
                Color::from_hex(config::LOGICAL_MUTED, 1.0)
            };
            r.draw_text(rect.x, rect.y + 4.0, section.label(), 11.0, color);
        }

        let (fg, bg) = if self.hovered_toggle {
            (Color::white(1.0), Color::from_hex(config::ACCENT_VIOLET, 1.0))
        } else {
            (Color::from_hex(config::LOGICAL_BG, 1.0), text)
        };
        layout.toggle.draw(r, fg, Some(bg), None);
    }

    fn render_hero(&self, r: &dyn Renderer, layout: &Layout, width: f64, height: f64) {
        let text = Color::from_hex(config::LOGICAL_TEXT, 1.0);
        let muted = Color::from_hex(config::LOGICAL_MUTED, 1.0);
        let title = (width * 0.08).clamp(48.0, 120.0);
        let mut y = height * 0.2;

        r.draw_text(PAD_X, y, content::OWNER_LOCATION, 12.0, muted);
        y += 40.0;
        r.draw_text(PAD_X, y, "Ben Amor", title, text);
        y += title;
        r.draw_text(PAD_X, y, "Moutie.", title, text);
        y += title + 24.0;
        for line in wrap_text(content::ABOUT_LINES[0], 16.0, (width * 0.5).max(320.0)) {
            r.draw_text(PAD_X, y, &line, 16.0, muted);
            y += 24.0;
        }

        let [(_, primary), (_, secondary)] = &layout.hero_buttons;
        primary.draw(r, Color::from_hex(config::LOGICAL_BG, 1.0), Some(text), None);
        secondary.draw(r, text, None, Some(text));
    }

    fn render_about(&self, r: &dyn Renderer, width: f64) {
        let text = Color::from_hex(config::LOGICAL_TEXT, 1.0);
        let muted = Color::from_hex(0x666666, 1.0);
        let mut y = config::NAV_HEIGHT + 96.0;

        r.draw_text(PAD_X, y, "Where design", 48.0, text);
        y += 52.0;
        r.draw_text(PAD_X, y, "meets code.", 48.0, text);

        let col_x = (width * 0.5).max(PAD_X + 420.0);
        let col_w = (width - col_x - PAD_X).max(200.0);
        let mut y = config::NAV_HEIGHT + 100.0;
        for para in &content::ABOUT_LINES[1..] {
            for line in wrap_text(para, 15.0, col_w) {
                r.draw_text(col_x, y, &line, 15.0, muted);
                y += 26.0;
            }
            y += 18.0;
        }
    }

    fn render_skills(&self, r: &dyn Renderer, width: f64) {
        let text = Color::from_hex(config::LOGICAL_TEXT, 1.0);
        let track_w = (width - PAD_X * 2.0).min(720.0);
        let mut y = config::NAV_HEIGHT + 80.0;

        r.draw_text(PAD_X, y, "Skills", 40.0, text);
        y += 72.0;
        for (i, skill) in SKILLS.iter().enumerate() {
            r.draw_text(PAD_X, y, skill.name, 14.0, text);
            let pct = format!("{}%", skill.level);
            r.draw_text(PAD_X + track_w - text_width(&pct, 12.0), y, &pct, 12.0, Color::from_hex(0xAAAAAA, 1.0));
            r.draw_text(PAD_X, y + 18.0, skill.category, 10.0, Color::from_hex(config::LOGICAL_MUTED, 1.0));
            r.fill_rect(PAD_X, y + 36.0, track_w, 2.0, Color::from_hex(0x000000, 0.08));
            r.fill_rect(PAD_X, y + 36.0, track_w * self.skill_fill(i), 2.0, text);
            y += 64.0;
        }
    }

    fn render_projects(&self, r: &dyn Renderer, layout: &Layout) {
        let text = Color::from_hex(config::LOGICAL_TEXT, 1.0);
        let muted = Color::from_hex(0xAAAAAA, 1.0);
        r.draw_text(PAD_X, config::NAV_HEIGHT + 32.0, "Selected Work", 40.0, text);

        for (i, ((project, row), link)) in PROJECTS
            .iter()
            .zip(&layout.project_rows)
            .zip(&layout.project_links)
            .enumerate()
        {
            let hovered = self.hovered_project == Some(i);
            let accent = Color::from_hex(project.color, 1.0);
            if hovered {
                r.fill_rect(row.x, row.y, row.w, row.h, accent.with_alpha(0.06));
            }
            r.fill_rect(row.x, row.y, row.w, 1.0, Color::from_hex(0x000000, 0.08));

            let indent = if hovered { 12.0 } else { 0.0 };
            let x = row.x + indent;
            r.draw_text(x, row.y + 12.0, &format!("{}  ·  {}", project.year, project.kind), 11.0, muted);
            r.draw_text(x, row.y + 30.0, project.title, 22.0, if hovered { accent } else { text });
            r.draw_text(x, row.y + 60.0, project.description, 12.0, Color::from_hex(0x666666, 1.0));

            let mut tag_x = link.rect.x;
            for tag in project.tags.iter().rev() {
                tag_x -= text_width(tag, 10.0) + 24.0;
                r.fill_rounded_rect(tag_x, row.y + 34.0, text_width(tag, 10.0) + 16.0, 20.0, 10.0, Color::from_hex(0x000000, 0.05));
                r.draw_text(tag_x + 8.0, row.y + 38.0, tag, 10.0, Color::from_hex(0x666666, 1.0));
            }
            link.draw(r, accent, Some(accent.with_alpha(0.25)));
        }
    }

    fn render_contact(&self, r: &dyn Renderer, layout: &Layout, width: f64, height: f64) {
        r.fill_rect(0.0, 0.0, width, height, Color::from_hex(config::LOGICAL_TEXT, 1.0));
        let light = Color::from_hex(config::LOGICAL_BG, 1.0);
        r.draw_text_centered(width / 2.0, height * 0.3, "Let's build something", 48.0, light);
        r.draw_text_centered(width / 2.0, height * 0.3 + 56.0, "worth remembering.", 48.0, light);

        for (i, link) in layout.contact_links.iter().enumerate() {
            let alpha = if i == 0 { 1.0 } else { 0.6 };
            link.draw(r, light.with_alpha(alpha), (i == 0).then(|| Color::white(0.2)));
        }
    }
}

impl Default for LogicalView {
    fn default() -> Self {
        Self::new()
    }
}
