/// Immersive presentation: pointer-lit background, floating project cubes,
/// the skills constellation and a contact screen.

use crate::core::config;
use crate::core::content::{self, CREATIVE_PROJECTS, PROJECTS, SKILL_NODES};
use crate::core::types::{Color, MouseEvent, Rect, Vec2};
use crate::effects::constellation::Constellation;
use crate::effects::cube::CubeState;
use crate::platform::renderer::Renderer;
use crate::views::widgets::{text_width, wrap_text, Button, Link, ViewAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Projects, Section::Skills, Section::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Section::Projects => "PROJECTS",
            Section::Skills => "SKILLS",
            Section::Contact => "CONTACT",
        }
    }
}

/// Pointer position as percent of the viewport (`mx`, `my`) and in pixels (`cx`, `cy`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerLight {
    pub mx: f64,
    pub my: f64,
    pub cx: f64,
    pub cy: f64,
}

impl PointerLight {
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        let pct = |v: f64, extent: f64| if extent > 0.0 { v / extent * 100.0 } else { 50.0 };
        Self {
            mx: pct(x, width),
            my: pct(y, height),
            cx: x,
            cy: y,
        }
    }
}

impl Default for PointerLight {
    fn default() -> Self {
        Self {
            mx: 50.0,
            my: 50.0,
            cx: 0.0,
            cy: 0.0,
        }
    }
}

const PAD_X: f64 = 48.0;
const PANEL_W: f64 = 600.0;
const PANEL_H: f64 = 420.0;

struct Layout {
    nav: Vec<(Section, Rect)>,
    toggle: Button,
    panel: Rect,
    open_github: Button,
    close: Button,
    contact_links: Vec<Link>,
}

impl Layout {
    fn compute(width: f64, height: f64) -> Self {
        let toggle = Button::fit(Vec2::new(0.0, 0.0), "⬡ Logical Mode", 11.0, 20.0, 8.0);
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
        for section in Section::ALL.iter().rev() {
            let w = text_width(section.label(), 11.0);
            x -= w;
            nav.push((*section, Rect::new(x, (config::NAV_HEIGHT - 19.0) / 2.0, w, 19.0)));
            x -= 32.0;
        }
        nav.reverse();

        let panel = Rect::centered(Vec2::new(width / 2.0, height / 2.0), PANEL_W.min(width - 32.0), PANEL_H);
        let buttons_y = panel.y + panel.h - 72.0;
        let open_github = Button::fit(Vec2::new(panel.x + 60.0, buttons_y), "OPEN GITHUB", 11.0, 24.0, 12.0);
        let close_x = open_github.rect.x + open_github.rect.w + 16.0;
        let close = Button::fit(Vec2::new(close_x, buttons_y), "CLOSE ✕", 11.0, 24.0, 12.0);

        let cx = width / 2.0;
        let y = height * 0.62;
        let contact_links = vec![
            Link::centered(cx, y, content::CONTACT_EMAIL, content::mailto(), 24.0),
            Link::centered(cx - 60.0, y + 72.0, "GitHub", content::GITHUB_URL, 13.0),
            Link::centered(cx + 60.0, y + 72.0, "LinkedIn", content::LINKEDIN_URL, 13.0),
        ];

        Self {
            nav,
            toggle,
            panel,
            open_github,
            close,
            contact_links,
        }
    }
}

pub struct CreativeView {
    section: Section,
    pointer: PointerLight,
    cubes: Vec<CubeState>,
    selected: Option<usize>,
    constellation: Constellation,
    hovered_toggle: bool,
}

impl CreativeView {
    pub fn new() -> Self {
        Self {
            section: Section::Projects,
            pointer: PointerLight::default(),
            cubes: (0..CREATIVE_PROJECTS.len()).map(CubeState::new).collect(),
            selected: None,
            constellation: Constellation::new(&SKILL_NODES),
            hovered_toggle: false,
        }
    }

    pub fn mount(&mut self) {
        self.section = Section::Projects;
        self.selected = None;
        self.hovered_toggle = false;
        self.cubes = (0..CREATIVE_PROJECTS.len()).map(CubeState::new).collect();
        self.constellation.set_hovered(None);
        self.constellation.invalidate();
    }

    /// Viewport changed; the constellation container must be re-measured.
    pub fn resize(&mut self) {
        self.constellation.invalidate();
    }

    #[cfg(test)]
    pub fn section(&self) -> Section {
        self.section
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[cfg(test)]
    pub fn pointer(&self) -> PointerLight {
        self.pointer
    }

    #[cfg(test)]
    pub fn cube(&self, index: usize) -> Option<&CubeState> {
        self.cubes.get(index)
    }

    #[cfg(test)]
    pub fn constellation(&self) -> &Constellation {
        &self.constellation
    }

    pub fn update(&mut self, dt_ms: f64) {
        for cube in &mut self.cubes {
            cube.tick(dt_ms);
        }
    }

    pub fn cube_center(index: usize, width: f64, height: f64) -> Option<Vec2> {
        CREATIVE_PROJECTS
            .get(index)
            .map(|p| Vec2::new(p.x / 100.0 * width, p.y / 100.0 * height))
    }

    fn constellation_bounds(width: f64, height: f64) -> Rect {
        Rect::new(0.0, config::NAV_HEIGHT, width, (height - config::NAV_HEIGHT).max(0.0))
    }

    pub fn handle_mouse(&mut self, e: &MouseEvent, width: f64, height: f64) -> Option<ViewAction> {
        let layout = Layout::compute(width, height);
        let pos = e.pos();
        self.pointer = PointerLight::at(e.x, e.y, width, height);
        self.hovered_toggle = layout.toggle.hit(pos);

        self.update_hover(pos, width, height);

        if !e.is_left_click() {
            return None;
        }

        if self.hovered_toggle {
            log::info!("toggle clicked from creative view");
            return Some(ViewAction::Toggle);
        }
        if let Some((section, _)) = layout.nav.iter().find(|(_, r)| r.contains(pos)) {
            self.section = *section;
            self.selected = None;
            if *section == Section::Skills {
                self.constellation.invalidate();
            }
            return None;
        }

        match self.section {
            Section::Projects => self.click_projects(&layout, pos, width, height),
            Section::Contact => layout.contact_links.iter().find_map(|l| l.hit(pos)),
            Section::Skills => None,
        }
    }

    fn update_hover(&mut self, pos: Vec2, width: f64, height: f64) {
        match self.section {
            Section::Projects => {
                let over_nav = pos.y < config::NAV_HEIGHT;
                // Later cubes sit on top.
                let hit = if over_nav || self.selected.is_some() {
                    None
                } else {
                    (0..self.cubes.len()).rev().find(|&i| {
                        Self::cube_center(i, width, height)
                            .is_some_and(|c| self.cubes[i].bounds(c).contains(pos))
                    })
                };
                for (i, cube) in self.cubes.iter_mut().enumerate() {
                    cube.set_hovered(hit == Some(i));
                }
            }
            Section::Skills => {
                self.constellation
                    .handle_pointer(pos, Self::constellation_bounds(width, height));
            }
            Section::Contact => {}
        }
    }

    fn click_projects(&mut self, layout: &Layout, pos: Vec2, width: f64, height: f64) -> Option<ViewAction> {
        if let Some(i) = self.selected {
            if layout.open_github.hit(pos) {
                return PROJECTS.get(i).map(|p| ViewAction::OpenLink(p.link.to_string()));
            }
            if layout.close.hit(pos) || !layout.panel.contains(pos) {
                self.selected = None;
            }
            return None;
        }

        let hit = (0..self.cubes.len()).rev().find(|&i| {
            Self::cube_center(i, width, height).is_some_and(|c| self.cubes[i].bounds(c).contains(pos))
        });
        if let Some(i) = hit {
            log::debug!("project selected: {}", CREATIVE_PROJECTS[i].title);
            self.selected = Some(i);
            for cube in &mut self.cubes {
                cube.set_hovered(false);
            }
        }
        None
    }

    pub fn render(&mut self, r: &dyn Renderer, width: f64, height: f64) {
        let layout = Layout::compute(width, height);
        self.render_background(r, width, height);
        self.render_title(r, height);

        match self.section {
            Section::Projects => {
                self.render_cubes(r, width, height);
                if let Some(i) = self.selected {
                    self.render_detail(r, &layout, i, width, height);
                }
            }
            Section::Skills => {
                let bounds = Self::constellation_bounds(width, height);
                r.draw_text_centered(
                    width / 2.0,
                    config::NAV_HEIGHT + 40.0,
                    "HOVER NODES TO EXPLORE CONNECTIONS",
                    11.0,
                    Color::white(0.3),
                );
                self.constellation.render(r, bounds);
            }
            Section::Contact => self.render_contact(r, &layout, width, height),
        }

        self.render_nav(r, &layout);
        self.render_cursor(r);
    }

    fn render_background(&self, r: &dyn Renderer, width: f64, height: f64) {
        r.fill_rect(0.0, 0.0, width, height, Color::from_hex(config::ENTRY_BG, 1.0));

        let reach = width.max(height);
        let light = Vec2::new(self.pointer.mx / 100.0 * width, self.pointer.my / 100.0 * height);
        r.fill_radial_glow(light.x, light.y, reach, Color::from_hex(config::CREATIVE_BG_MID, 1.0));
        r.fill_radial_glow(light.x, light.y, reach * 0.4, Color::from_hex(config::CREATIVE_BG_CENTER, 1.0));

        r.fill_radial_glow(width * 0.2, height * 0.5, reach * 0.5, Color::from_hex(config::ENTRY_LINE, 0.15));
        r.fill_radial_glow(width * 0.8, height * 0.2, reach * 0.4, Color::from_hex(config::ACCENT_CYAN, 0.1));
        r.fill_radial_glow(width * 0.6, height * 0.8, reach * 0.4, Color::from_hex(0xFF0096, 0.1));

        let grid = Color::from_hex(config::ENTRY_LINE, 0.05);
        let mut x = 0.0;
        while x < width {
            r.fill_rect(x, 0.0, 1.0, height, grid);
            x += 60.0;
        }
        let mut y = 0.0;
        while y < height {
            r.fill_rect(0.0, y, width, 1.0, grid);
            y += 60.0;
        }
    }

    fn render_title(&self, r: &dyn Renderer, height: f64) {
        let size = 56.0;
        let y = height - PAD_X - size * 2.0;
        r.draw_text(PAD_X, y - 20.0, "◈ BEN AMOR MOUTIE", 11.0, Color::white(0.3));
        r.draw_text(PAD_X, y, "UI/UX", size, Color::white(1.0));
        r.draw_text(PAD_X, y + size, "Designer", size, Color::from_hex(config::ACCENT_VIOLET, 1.0));
    }

    fn render_nav(&self, r: &dyn Renderer, layout: &Layout) {
        r.draw_text(PAD_X, (config::NAV_HEIGHT - 13.0) / 2.0, "BAM_UI/UX", 13.0, Color::white(0.5));
        let violet = Color::from_hex(config::ACCENT_VIOLET, 1.0);

        for (section, rect) in &layout.nav {
            let active = *section == self.section;
            let color = if active { violet } else { Color::white(0.4) };
            r.draw_text(rect.x, rect.y + 4.0, section.label(), 11.0, color);
            if active {
                r.draw_line(
                    Vec2::new(rect.x, rect.y + rect.h),
                    Vec2::new(rect.x + rect.w, rect.y + rect.h),
                    violet,
                    1.0,
                );
            }
        }

        let (fg, border) = if self.hovered_toggle {
            let blue = Color::from_hex(config::ACCENT_BLUE, 1.0);
            (blue, blue)
        } else {
            (Color::white(0.7), Color::white(0.2))
        };
        layout.toggle.draw(r, fg, None, Some(border));
    }

    fn render_cubes(&self, r: &dyn Renderer, width: f64, height: f64) {
        for (i, (cube, project)) in self.cubes.iter().zip(CREATIVE_PROJECTS.iter()).enumerate() {
            let Some(center) = Self::cube_center(i, width, height) else {
                continue;
            };
            cube.render(r, center, project.color);

            let label_y = center.y + cube.size() / 2.0 + 16.0;
            let alpha = 0.5 + 0.5 * cube.emphasis();
            r.draw_text_centered(center.x, label_y, project.title, 14.0, Color::from_hex(project.color, alpha));
            r.draw_text_centered(center.x, label_y + 18.0, project.kind, 11.0, Color::white(0.4 * alpha));
        }
    }

    fn render_detail(&self, r: &dyn Renderer, layout: &Layout, index: usize, width: f64, height: f64) {
        let (Some(creative), Some(project)) = (CREATIVE_PROJECTS.get(index), PROJECTS.get(index)) else {
            return;
        };
        let accent = Color::from_hex(creative.color, 1.0);
        let panel = layout.panel;

        r.fill_rect(0.0, 0.0, width, height, Color::from_hex(0x000000, 0.85));
        r.fill_rect(panel.x, panel.y, panel.w, panel.h, accent.with_alpha(0x08 as f64 / 255.0));
        r.stroke_rounded_rect(panel.x, panel.y, panel.w, panel.h, 0.0, accent.with_alpha(0x40 as f64 / 255.0), 1.0);

        let x = panel.x + 60.0;
        let mut y = panel.y + 48.0;
        r.draw_text(x, y, creative.kind, 11.0, accent);
        y += 32.0;
        r.draw_text(x, y, creative.title, 40.0, Color::white(1.0));
        y += 60.0;
        for line in wrap_text(project.description, 14.0, panel.w - 120.0) {
            r.draw_text(x, y, &line, 14.0, Color::white(0.6));
            y += 24.0;
        }

        let mut tag_x = x;
        y += 16.0;
        for tag in project.tags {
            let w = text_width(tag, 11.0) + 32.0;
            r.stroke_rounded_rect(tag_x, y, w, 26.0, 0.0, accent.with_alpha(0x50 as f64 / 255.0), 1.0);
            r.draw_text(tag_x + 16.0, y + 7.0, tag, 11.0, accent);
            tag_x += w + 12.0;
        }

        layout.open_github.draw(r, Color::from_hex(0x000000, 1.0), Some(accent), None);
        layout.close.draw(r, Color::white(0.5), None, Some(Color::white(0.2)));
    }

    fn render_contact(&self, r: &dyn Renderer, layout: &Layout, width: f64, height: f64) {
        let cx = width / 2.0;
        let mut y = height * 0.28;
        r.draw_text_centered(cx, y, "◈ INITIATE CONTACT", 11.0, Color::from_hex(config::ACCENT_VIOLET, 1.0));
        y += 44.0;
        r.draw_text_centered(cx, y, "Let's create", 56.0, Color::white(1.0));
        y += 62.0;
        r.draw_text_centered(cx, y, "something impossible.", 56.0, Color::from_hex(config::ACCENT_CYAN, 1.0));

        for (i, link) in layout.contact_links.iter().enumerate() {
            let underline = (i == 0).then(|| Color::from_hex(config::ACCENT_VIOLET, 0.4));
            link.draw(r, Color::white(if i == 0 { 0.7 } else { 0.4 }), underline);
        }
    }

    fn render_cursor(&self, r: &dyn Renderer) {
        let PointerLight { cx, cy, .. } = self.pointer;
        r.stroke_circle(cx, cy, 16.0, Color::from_hex(config::ACCENT_VIOLET, 0.6), 1.0);
        r.fill_circle(cx, cy, 3.0, Color::from_hex(config::ACCENT_VIOLET, 1.0));
    }
}

impl Default for CreativeView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::renderer_recording::RecordingRenderer;

    const W: f64 = 1280.0;
    const H: f64 = 720.0;

    fn nav_click(view: &mut CreativeView, section: Section) {
        let layout = Layout::compute(W, H);
        let (_, rect) = layout.nav.iter().find(|(s, _)| *s == section).unwrap();
        assert_eq!(view.handle_mouse(&MouseEvent::click(rect.x + 1.0, rect.y + 1.0), W, H), None);
    }

    #[test]
    fn test_pointer_light_tracks_percent_and_pixels() {
        let mut view = CreativeView::new();
        view.handle_mouse(&MouseEvent::moved(640.0, 180.0), W, H);
        assert_eq!(
            view.pointer(),
            PointerLight {
                mx: 50.0,
                my: 25.0,
                cx: 640.0,
                cy: 180.0
            }
        );
        assert_eq!(PointerLight::at(1.0, 1.0, 0.0, 0.0).mx, 50.0);
    }

    #[test]
    fn test_hovered_cube_freezes_and_grows() {
        let mut view = CreativeView::new();
        // Hyper Scroll at (45%, 55%), outside the nav.
        let c = CreativeView::cube_center(2, W, H).unwrap();
        view.handle_mouse(&MouseEvent::moved(c.x, c.y), W, H);
        let before = view.cube(2).unwrap().rot_x;
        for _ in 0..30 {
            view.update(16.0);
        }
        let cube = view.cube(2).unwrap();
        assert!(cube.is_hovered());
        assert_eq!(cube.rot_x, before);
        assert_eq!(cube.size(), config::CUBE_HOVER_SIZE);
        assert!(view.cube(0).unwrap().rot_x > 0.0);
    }

    #[test]
    fn test_cube_click_opens_detail_panel() {
        let mut view = CreativeView::new();
        let c = CreativeView::cube_center(3, W, H).unwrap();
        assert_eq!(view.handle_mouse(&MouseEvent::click(c.x, c.y), W, H), None);
        assert_eq!(view.selected(), Some(3));

        let layout = Layout::compute(W, H);
        let b = layout.open_github.rect;
        let action = view.handle_mouse(&MouseEvent::click(b.x + 1.0, b.y + 1.0), W, H);
        assert_eq!(action, Some(ViewAction::OpenLink(PROJECTS[3].link.to_string())));
        assert_eq!(view.selected(), Some(3));

        let b = layout.close.rect;
        view.handle_mouse(&MouseEvent::click(b.x + 1.0, b.y + 1.0), W, H);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_click_outside_panel_closes() {
        let mut view = CreativeView::new();
        let c = CreativeView::cube_center(0, W, H).unwrap();
        view.handle_mouse(&MouseEvent::click(c.x, c.y), W, H);
        assert_eq!(view.selected(), Some(0));
        view.handle_mouse(&MouseEvent::click(5.0, H - 5.0), W, H);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_skills_section_drives_constellation() {
        let mut view = CreativeView::new();
        nav_click(&mut view, Section::Skills);
        assert_eq!(view.section(), Section::Skills);

        // React at (50%, 30%) of the area below the nav.
        let bounds = CreativeView::constellation_bounds(W, H);
        let react = Vec2::new(bounds.x + bounds.w * 0.5, bounds.y + bounds.h * 0.3);
        view.handle_mouse(&MouseEvent::moved(react.x, react.y), W, H);
        assert_eq!(view.constellation().hovered(), Some(0));

        let rec = RecordingRenderer::new();
        view.render(&rec, W, H);
        view.render(&rec, W, H);
        assert_eq!(view.constellation().redraw_count(), 1);
        assert_eq!(view.constellation().measured_bounds(), bounds);
    }

    #[test]
    fn test_toggle_and_contact_links() {
        let mut view = CreativeView::new();
        let t = Layout::compute(W, H).toggle.rect;
        let action = view.handle_mouse(&MouseEvent::click(t.x + 1.0, t.y + 1.0), W, H);
        assert_eq!(action, Some(ViewAction::Toggle));

        nav_click(&mut view, Section::Contact);
        let l = Layout::compute(W, H).contact_links[2].rect;
        let action = view.handle_mouse(&MouseEvent::click(l.x + 1.0, l.y + 1.0), W, H);
        assert_eq!(action, Some(ViewAction::OpenLink(content::LINKEDIN_URL.to_string())));
    }

    #[test]
    fn test_render_sections() {
        let mut view = CreativeView::new();
        for section in Section::ALL {
            view.section = section;
            let rec = RecordingRenderer::new();
            view.render(&rec, W, H);
            let texts = rec.texts();
            assert!(texts.contains(&"⬡ Logical Mode".to_string()));
            if section == Section::Skills {
                assert!(texts.contains(&"React".to_string()));
            }
        }
    }
}
