/// Skills constellation: a fixed node graph that lights up around the hovered node.
///
/// The scene is recorded into a display list and replayed every frame. It is
/// rebuilt, with the container re-measured, only when the hover state changes
/// or the container is invalidated.

use crate::core::config;
use crate::core::content::ConstellationNode;
use crate::core::types::{Color, Rect, Vec2};
use crate::platform::renderer::Renderer;
use crate::platform::renderer_recording::{DrawCmd, RecordingRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Hovered,
    Connected,
    Idle,
}

/// A declared connection that is drawn for the current hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: usize,
    pub to: usize,
    pub active: bool,
}

/// Connections to draw for `hovered`.
///
/// Without hover every declared connection is drawn inactive. With hover, a
/// connection is drawn when the hovered node declares it, or when it points
/// at the hovered node from a node the hovered node declares. Declarations are
/// never mirrored.
pub fn visible_segments(nodes: &[ConstellationNode], hovered: Option<usize>) -> Vec<Segment> {
    let hovered = hovered.filter(|&h| h < nodes.len());
    let mut segments = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        for &j in node.connections {
            if j >= nodes.len() {
                continue;
            }
            match hovered {
                None => segments.push(Segment {
                    from: i,
                    to: j,
                    active: false,
                }),
                Some(h) => {
                    let touches = i == h || (j == h && nodes[h].connections.contains(&i));
                    if touches {
                        segments.push(Segment {
                            from: i,
                            to: j,
                            active: true,
                        });
                    }
                }
            }
        }
    }

    segments
}

pub fn node_state(nodes: &[ConstellationNode], hovered: Option<usize>, index: usize) -> NodeState {
    match hovered.and_then(|h| nodes.get(h).map(|n| (h, n))) {
        Some((h, _)) if h == index => NodeState::Hovered,
        Some((_, hovered_node)) if hovered_node.connections.contains(&index) => {
            NodeState::Connected
        }
        _ => NodeState::Idle,
    }
}

/// Percent coordinates to pixels inside `bounds`.
fn node_position(node: &ConstellationNode, bounds: Rect) -> Vec2 {
    Vec2::new(
        bounds.x + node.x / 100.0 * bounds.w,
        bounds.y + node.y / 100.0 * bounds.h,
    )
}

pub struct Constellation {
    nodes: &'static [ConstellationNode],
    hovered: Option<usize>,
    measured: Rect,
    display_list: Vec<DrawCmd>,
    dirty: bool,
    redraws: u64,
}

impl Constellation {
    pub fn new(nodes: &'static [ConstellationNode]) -> Self {
        Self {
            nodes,
            hovered: None,
            measured: Rect::default(),
            display_list: Vec::new(),
            dirty: true,
            redraws: 0,
        }
    }

    #[cfg(test)]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Returns true when the hover state changed and a redraw was scheduled.
    pub fn set_hovered(&mut self, hovered: Option<usize>) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        self.dirty = true;
        true
    }

    /// Force a re-measure and redraw on the next render (container resized or remounted).
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Node under `point`: the `3 x size` square centered on each node.
    pub fn hit_test(&self, point: Vec2, bounds: Rect) -> Option<usize> {
        if bounds.is_empty() {
            return None;
        }
        self.nodes.iter().position(|node| {
            let side = node.size * config::NODE_HIT_SCALE;
            Rect::centered(node_position(node, bounds), side, side).contains(point)
        })
    }

    pub fn handle_pointer(&mut self, point: Vec2, bounds: Rect) -> bool {
        let hit = self.hit_test(point, bounds);
        self.set_hovered(hit)
    }

    pub fn render(&mut self, renderer: &dyn Renderer, bounds: Rect) {
        if self.dirty {
            self.redraw(bounds);
        }
        for cmd in &self.display_list {
            cmd.replay(renderer);
        }
    }

    #[cfg(test)]
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    #[cfg(test)]
    pub fn measured_bounds(&self) -> Rect {
        self.measured
    }

    fn redraw(&mut self, bounds: Rect) {
        self.dirty = false;
        self.redraws += 1;
        self.measured = bounds;
        self.display_list.clear();
        log::trace!("constellation redraw #{} over {:?}", self.redraws, self.measured);

        if bounds.is_empty() {
            log::debug!("constellation container not laid out yet, skipping draw");
            return;
        }

        let rec = RecordingRenderer::new();
        self.draw_segments(&rec, bounds);
        self.draw_nodes(&rec, bounds);
        self.display_list = rec.take();
    }

    fn draw_segments(&self, r: &dyn Renderer, bounds: Rect) {
        for seg in visible_segments(self.nodes, self.hovered) {
            let from = &self.nodes[seg.from];
            let to = &self.nodes[seg.to];
            let (color, width) = if seg.active {
                (
                    Color::from_hex(from.color, config::LINK_ACTIVE_ALPHA),
                    config::LINK_ACTIVE_WIDTH,
                )
            } else {
                (Color::white(config::LINK_IDLE_ALPHA), config::LINK_IDLE_WIDTH)
            };
            r.draw_line(
                node_position(from, bounds),
                node_position(to, bounds),
                color,
                width,
            );
        }
    }

    fn draw_nodes(&self, r: &dyn Renderer, bounds: Rect) {
        for (i, node) in self.nodes.iter().enumerate() {
            let pos = node_position(node, bounds);
            let state = node_state(self.nodes, self.hovered, i);
            let size = if state == NodeState::Hovered {
                node.size * config::NODE_HOVER_SCALE
            } else {
                node.size
            };

            let glow_alpha = if state == NodeState::Hovered { 0.25 } else { 0.08 };
            r.fill_radial_glow(
                pos.x,
                pos.y,
                size * config::NODE_GLOW_SCALE,
                Color::from_hex(node.color, glow_alpha),
            );

            let (fill, label_color, label_size) = match state {
                NodeState::Hovered => (
                    Color::from_hex(node.color, 1.0),
                    Color::from_hex(node.color, 1.0),
                    13.0,
                ),
                NodeState::Connected => (
                    Color::from_hex(node.color, 0.67),
                    Color::white(0.8),
                    11.0,
                ),
                NodeState::Idle => (Color::white(0.3), Color::white(0.4), 11.0),
            };

            r.fill_circle(pos.x, pos.y, size, fill);
            if state == NodeState::Hovered {
                r.stroke_circle(pos.x, pos.y, size, Color::from_hex(node.color, 1.0), 2.0);
            }

            r.draw_text_centered(
                pos.x,
                pos.y + size + config::NODE_LABEL_OFFSET - label_size,
                node.name,
                label_size,
                label_color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::SKILL_NODES;

    static ASYMMETRIC: [ConstellationNode; 2] = [
        ConstellationNode {
            name: "A",
            x: 25.0,
            y: 50.0,
            size: 10.0,
            connections: &[1],
            color: 0xFF0000,
        },
        ConstellationNode {
            name: "B",
            x: 75.0,
            y: 50.0,
            size: 10.0,
            connections: &[],
            color: 0x00FF00,
        },
    ];

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 200.0)
    }

    #[test]
    fn test_no_hover_draws_every_declared_connection() {
        let segs = visible_segments(&SKILL_NODES, None);
        let declared: usize = SKILL_NODES.iter().map(|n| n.connections.len()).sum();
        assert_eq!(segs.len(), declared);
        assert!(segs.iter().all(|s| !s.active));
    }

    #[test]
    fn test_asymmetric_connection_is_directional() {
        let hover_a = visible_segments(&ASYMMETRIC, Some(0));
        assert_eq!(
            hover_a,
            vec![Segment {
                from: 0,
                to: 1,
                active: true
            }]
        );

        let hover_b = visible_segments(&ASYMMETRIC, Some(1));
        assert!(hover_b.is_empty());
    }

    #[test]
    fn test_hover_only_draws_connections_touching_hovered() {
        // Python (3) declares [1]; Figma (1) declares [0, 3].
        let segs = visible_segments(&SKILL_NODES, Some(3));
        let pairs: Vec<(usize, usize)> = segs.iter().map(|s| (s.from, s.to)).collect();
        assert_eq!(pairs, vec![(1, 3), (3, 1)]);
        assert!(segs.iter().all(|s| s.active && (s.from == 3 || s.to == 3)));
    }

    #[test]
    fn test_node_states() {
        // React (0) declares [1, 2].
        assert_eq!(node_state(&SKILL_NODES, Some(0), 0), NodeState::Hovered);
        assert_eq!(node_state(&SKILL_NODES, Some(0), 2), NodeState::Connected);
        assert_eq!(node_state(&SKILL_NODES, Some(0), 5), NodeState::Idle);
        assert_eq!(node_state(&SKILL_NODES, None, 0), NodeState::Idle);
    }

    #[test]
    fn test_out_of_range_hover_is_silent() {
        let segs = visible_segments(&SKILL_NODES, Some(42));
        assert!(segs.iter().all(|s| !s.active));
        assert_eq!(node_state(&SKILL_NODES, Some(42), 0), NodeState::Idle);

        let mut c = Constellation::new(&SKILL_NODES);
        c.set_hovered(Some(42));
        let rec = RecordingRenderer::new();
        c.render(&rec, bounds());
        assert_eq!(rec.texts().len(), SKILL_NODES.len());
    }

    #[test]
    fn test_redraws_only_on_hover_change() {
        let mut c = Constellation::new(&SKILL_NODES);
        let rec = RecordingRenderer::new();

        c.render(&rec, bounds());
        c.render(&rec, bounds());
        assert_eq!(c.redraw_count(), 1);

        assert!(c.set_hovered(Some(0)));
        assert!(!c.set_hovered(Some(0)));
        c.render(&rec, bounds());
        c.render(&rec, bounds());
        assert_eq!(c.redraw_count(), 2);
    }

    #[test]
    fn test_remeasures_on_hover_change() {
        let mut c = Constellation::new(&SKILL_NODES);
        let rec = RecordingRenderer::new();

        c.render(&rec, Rect::new(0.0, 0.0, 0.0, 0.0));
        assert!(rec.is_empty());

        // Layout changes alone do not trigger a redraw.
        c.render(&rec, bounds());
        assert!(rec.is_empty());

        c.set_hovered(Some(1));
        c.render(&rec, bounds());
        assert_eq!(c.measured_bounds(), bounds());
        assert!(!rec.is_empty());
    }

    #[test]
    fn test_hovered_node_drawn_larger_with_active_links() {
        let mut c = Constellation::new(&SKILL_NODES);
        c.set_hovered(Some(0));
        let rec = RecordingRenderer::new();
        c.render(&rec, bounds());

        let react = Vec2::new(200.0, 60.0);
        let circles: Vec<f64> = rec
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::FillCircle { cx, cy, radius, .. } if *cx == react.x && *cy == react.y => {
                    Some(*radius)
                }
                _ => None,
            })
            .collect();
        assert_eq!(circles, vec![14.0 * config::NODE_HOVER_SCALE]);

        let lines = rec.lines();
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|l| l.3 == config::LINK_ACTIVE_WIDTH));
    }

    #[test]
    fn test_hit_test_uses_node_square() {
        let c = Constellation::new(&SKILL_NODES);
        // React sits at (50%, 30%) with size 14, so a 42px square.
        assert_eq!(c.hit_test(Vec2::new(200.0, 60.0), bounds()), Some(0));
        assert_eq!(c.hit_test(Vec2::new(220.0, 60.0), bounds()), Some(0));
        assert_eq!(c.hit_test(Vec2::new(230.0, 60.0), bounds()), None);
        assert_eq!(c.hit_test(Vec2::new(200.0, 60.0), Rect::default()), None);
    }
}
