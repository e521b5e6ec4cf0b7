/// Wireframe glass cube that spins in place and freezes under the pointer.

use crate::core::config;
use crate::core::types::{Color, Rect, Vec2};
use crate::effects::animation::{lerp, Fade};
use crate::platform::renderer::Renderer;

/// Camera distance for the weak perspective applied to projected faces.
const PERSPECTIVE: f64 = 1000.0;

/// Unit cube corners, centered on the origin.
const CORNERS: [[f64; 3]; 8] = [
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
];

/// Corner indices and fill alpha per face: front, back, right, left, top, bottom.
const FACES: [([usize; 4], f64); 6] = [
    ([0, 1, 2, 3], 0x22 as f64 / 255.0),
    ([5, 4, 7, 6], 0x11 as f64 / 255.0),
    ([1, 5, 6, 2], 0x18 as f64 / 255.0),
    ([4, 0, 3, 7], 0x18 as f64 / 255.0),
    ([4, 5, 1, 0], 0x15 as f64 / 255.0),
    ([3, 2, 6, 7], 0x15 as f64 / 255.0),
];

#[derive(Debug, Clone)]
pub struct CubeState {
    /// Degrees.
    pub rot_x: f64,
    /// Degrees.
    pub rot_y: f64,
    hovered: bool,
    grow: Fade,
}

impl CubeState {
    /// Initial orientation staggers cubes by their index.
    pub fn new(index: usize) -> Self {
        Self {
            rot_x: 15.0 * index as f64,
            rot_y: 20.0 * index as f64,
            hovered: false,
            grow: Fade::new(config::HOVER_FADE_MS),
        }
    }

    #[cfg(test)]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.grow.set_target(if hovered { 1.0 } else { 0.0 });
    }

    /// One display frame. Rotation holds while hovered.
    pub fn tick(&mut self, dt_ms: f64) {
        if !self.hovered {
            self.rot_x += config::CUBE_SPIN_X_DEG;
            self.rot_y += config::CUBE_SPIN_Y_DEG;
        }
        self.grow.update(dt_ms);
    }

    /// Edge length in pixels, easing between the idle and hovered sizes.
    pub fn size(&self) -> f64 {
        lerp(config::CUBE_SIZE, config::CUBE_HOVER_SIZE, self.grow.value())
    }

    /// Label and glow emphasis, 0 idle to 1 hovered.
    pub fn emphasis(&self) -> f64 {
        self.grow.value()
    }

    pub fn bounds(&self, center: Vec2) -> Rect {
        let s = self.size();
        Rect::centered(center, s, s)
    }

    /// Rotate X then Y, returning screen position and depth (toward viewer positive).
    fn project(&self, corner: [f64; 3], center: Vec2) -> (Vec2, f64) {
        let s = self.size();
        let (x, y, z) = (corner[0] * s, corner[1] * s, corner[2] * s);
        let (sx, cx) = self.rot_x.to_radians().sin_cos();
        let (sy, cy) = self.rot_y.to_radians().sin_cos();

        let (y, z) = (y * cx - z * sx, y * sx + z * cx);
        let (x, z) = (x * cy + z * sy, -x * sy + z * cy);

        let k = PERSPECTIVE / (PERSPECTIVE - z);
        (Vec2::new(center.x + x * k, center.y + y * k), z)
    }

    /// Faces as screen polygons with their fill alpha, back to front.
    pub fn faces(&self, center: Vec2) -> Vec<(Vec<Vec2>, f64)> {
        let projected: Vec<(Vec2, f64)> = CORNERS.iter().map(|&c| self.project(c, center)).collect();
        let mut faces: Vec<(f64, Vec<Vec2>, f64)> = FACES
            .iter()
            .map(|(idx, alpha)| {
                let depth = idx.iter().map(|&i| projected[i].1).sum::<f64>() / 4.0;
                (depth, idx.iter().map(|&i| projected[i].0).collect(), *alpha)
            })
            .collect();
        faces.sort_by(|a, b| a.0.total_cmp(&b.0));
        faces.into_iter().map(|(_, pts, alpha)| (pts, alpha)).collect()
    }

    pub fn render(&self, r: &dyn Renderer, center: Vec2, color: u32) {
        let s = self.size();
        let glow = lerp(0x08 as f64, 0x20 as f64, self.emphasis()) / 255.0;
        r.fill_radial_glow(center.x, center.y, s * 0.7 + 20.0, Color::from_hex(color, glow));

        let edge = Color::from_hex(color, 1.0);
        for (points, alpha) in self.faces(center) {
            r.fill_polygon(&points, Color::from_hex(color, alpha));
            r.stroke_polygon(&points, edge, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_rotation_staggered() {
        let c = CubeState::new(3);
        assert_eq!(c.rot_x, 45.0);
        assert_eq!(c.rot_y, 60.0);
    }

    #[test]
    fn test_spin_freezes_while_hovered() {
        let mut c = CubeState::new(0);
        c.tick(16.0);
        c.tick(16.0);
        assert!((c.rot_x - 0.6).abs() < 1e-9);
        assert!((c.rot_y - 0.8).abs() < 1e-9);

        c.set_hovered(true);
        for _ in 0..10 {
            c.tick(16.0);
        }
        assert!((c.rot_x - 0.6).abs() < 1e-9);

        c.set_hovered(false);
        c.tick(16.0);
        assert!((c.rot_x - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_hover_grows_to_full_size() {
        let mut c = CubeState::new(0);
        assert_eq!(c.size(), config::CUBE_SIZE);
        c.set_hovered(true);
        c.tick(config::HOVER_FADE_MS);
        assert_eq!(c.size(), config::CUBE_HOVER_SIZE);
        assert_eq!(c.bounds(Vec2::new(100.0, 100.0)), Rect::new(30.0, 30.0, 140.0, 140.0));
    }

    #[test]
    fn test_faces_sorted_back_to_front() {
        let c = CubeState::new(0);
        let faces = c.faces(Vec2::new(0.0, 0.0));
        assert_eq!(faces.len(), 6);
        // Unrotated: the back face is drawn first and the front face last.
        assert_eq!(faces[0].1, 0x11 as f64 / 255.0);
        assert_eq!(faces[5].1, 0x22 as f64 / 255.0);
        // Front face is magnified by perspective.
        let front = &faces[5].0;
        assert!(front[1].x - front[0].x > config::CUBE_SIZE);
    }
}
