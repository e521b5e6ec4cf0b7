/// Bouncing particle field with proximity links.
///
/// A batch of `PARTICLE_COUNT` particles is created on `start`, advanced once
/// per display refresh by `tick`, and thrown away on `stop`. Every pair closer
/// than `PARTICLE_LINK_DISTANCE` is joined by a line that fades out linearly
/// with distance.

use crate::core::config;
use crate::core::types::{Color, Vec2};
use crate::platform::renderer::Renderer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Hue range and HSL templates for one transition direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub hue_min: f64,
    pub particle_saturation: f64,
    pub particle_lightness: f64,
    pub link_hue: f64,
    pub link_saturation: f64,
    pub link_lightness: f64,
}

impl Palette {
    /// Cool blues when leaving the logical view, warm ambers otherwise.
    pub fn for_variant(from_logical: bool) -> Self {
        if from_logical {
            Self {
                hue_min: 180.0,
                particle_saturation: 80.0,
                particle_lightness: 70.0,
                link_hue: 200.0,
                link_saturation: 80.0,
                link_lightness: 70.0,
            }
        } else {
            Self {
                hue_min: 30.0,
                particle_saturation: 90.0,
                particle_lightness: 60.0,
                link_hue: 40.0,
                link_saturation: 90.0,
                link_lightness: 60.0,
            }
        }
    }

    pub fn hue_max(&self) -> f64 {
        self.hue_min + config::PARTICLE_HUE_SPAN
    }

    pub fn particle_color(&self, hue: f64, opacity: f64) -> Color {
        Color::from_hsla(hue, self.particle_saturation, self.particle_lightness, opacity)
    }

    pub fn link_color(&self, opacity: f64) -> Color {
        Color::from_hsla(self.link_hue, self.link_saturation, self.link_lightness, opacity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f64,
    pub opacity: f64,
    pub hue: f64,
}

/// A line between two particles of the current batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub opacity: f64,
}

/// Stroke opacity for two particles `distance` apart, `None` when too far to link.
pub fn link_opacity(distance: f64) -> Option<f64> {
    if distance * distance >= config::PARTICLE_LINK_DISTANCE_SQ {
        return None;
    }
    let t = 1.0 - distance / config::PARTICLE_LINK_DISTANCE;
    Some((config::PARTICLE_LINK_MAX_OPACITY * t).max(0.0))
}

struct Batch {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    palette: Palette,
    frames: u64,
}

pub struct ParticleField {
    rng: StdRng,
    batch: Option<Batch>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            batch: None,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            batch: None,
        }
    }

    /// Seed a fresh batch over a `width` x `height` surface.
    ///
    /// Restarting a running field replaces its batch. A zero-area surface is
    /// accepted: particles sit at the origin and every tick is a no-op.
    pub fn start(&mut self, width: f64, height: f64, from_logical: bool) {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let palette = Palette::for_variant(from_logical);
        let rng = &mut self.rng;

        let particles = (0..config::PARTICLE_COUNT)
            .map(|_| Particle {
                pos: Vec2::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height)),
                vel: Vec2::new(
                    uniform(rng, -config::PARTICLE_MAX_SPEED, config::PARTICLE_MAX_SPEED),
                    uniform(rng, -config::PARTICLE_MAX_SPEED, config::PARTICLE_MAX_SPEED),
                ),
                radius: uniform(rng, config::PARTICLE_MIN_RADIUS, config::PARTICLE_MAX_RADIUS),
                opacity: uniform(rng, 0.0, 1.0),
                hue: uniform(rng, palette.hue_min, palette.hue_max()),
            })
            .collect();

        log::debug!(
            "particle field started: {} particles on {}x{} (from_logical={})",
            config::PARTICLE_COUNT,
            width,
            height,
            from_logical
        );

        self.batch = Some(Batch {
            particles,
            width,
            height,
            palette,
            frames: 0,
        });
    }

    /// Stop ticking and discard the batch.
    pub fn stop(&mut self) {
        if let Some(batch) = self.batch.take() {
            log::debug!("particle field stopped after {} frames", batch.frames);
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.batch.is_some()
    }

    /// Move the bounds of a running batch. Particles outside the new surface
    /// are pulled onto its edge and keep their velocity.
    pub fn resize(&mut self, width: f64, height: f64) {
        let Some(batch) = self.batch.as_mut() else {
            return;
        };
        batch.width = width.max(0.0);
        batch.height = height.max(0.0);
        for p in &mut batch.particles {
            p.pos.x = p.pos.x.clamp(0.0, batch.width);
            p.pos.y = p.pos.y.clamp(0.0, batch.height);
        }
        log::debug!("particle field resized to {}x{}", batch.width, batch.height);
    }

    /// Advance one display frame: integrate and reflect off the bounds.
    pub fn tick(&mut self) {
        let Some(batch) = self.batch.as_mut() else {
            return;
        };
        batch.frames += 1;
        if batch.width <= 0.0 || batch.height <= 0.0 {
            return;
        }

        for p in &mut batch.particles {
            p.pos += p.vel;
            reflect(&mut p.pos.x, &mut p.vel.x, batch.width);
            reflect(&mut p.pos.y, &mut p.vel.y, batch.height);
        }
    }

    /// Every pair closer than the link distance, with its stroke opacity.
    pub fn links(&self) -> Vec<Link> {
        let Some(batch) = self.batch.as_ref() else {
            return Vec::new();
        };
        let ps = &batch.particles;
        let mut links = Vec::new();
        for i in 0..ps.len() {
            for j in (i + 1)..ps.len() {
                let d_sq = (ps[i].pos - ps[j].pos).length_sq();
                if d_sq < config::PARTICLE_LINK_DISTANCE_SQ {
                    let distance = d_sq.sqrt();
                    if let Some(opacity) = link_opacity(distance) {
                        links.push(Link {
                            a: i,
                            b: j,
                            distance,
                            opacity,
                        });
                    }
                }
            }
        }
        links
    }

    pub fn render(&self, renderer: &dyn Renderer) {
        let Some(batch) = self.batch.as_ref() else {
            return;
        };
        if batch.width <= 0.0 || batch.height <= 0.0 {
            return;
        }

        renderer.push_clip(0.0, 0.0, batch.width, batch.height);
        for p in &batch.particles {
            renderer.fill_circle(
                p.pos.x,
                p.pos.y,
                p.radius,
                batch.palette.particle_color(p.hue, p.opacity),
            );
        }
        for link in self.links() {
            renderer.draw_line(
                batch.particles[link.a].pos,
                batch.particles[link.b].pos,
                batch.palette.link_color(link.opacity),
                config::PARTICLE_LINK_WIDTH,
            );
        }
        renderer.pop_clip();
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        match &self.batch {
            Some(batch) => &batch.particles,
            None => &[],
        }
    }

    #[cfg(test)]
    pub fn palette(&self) -> Option<Palette> {
        self.batch.as_ref().map(|b| b.palette)
    }

    #[cfg(test)]
    pub fn frames(&self) -> u64 {
        self.batch.as_ref().map_or(0, |b| b.frames)
    }

    #[cfg(test)]
    fn replace_particles(&mut self, particles: Vec<Particle>) {
        if let Some(batch) = self.batch.as_mut() {
            batch.particles = particles;
        }
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform sample in `[lo, hi)`, or `lo` for an empty range.
fn uniform(rng: &mut StdRng, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Elastic reflection on one axis. Returns true when the bound was crossed.
fn reflect(pos: &mut f64, vel: &mut f64, max: f64) -> bool {
    if *pos < 0.0 {
        *pos = -*pos;
    } else if *pos > max {
        *pos = 2.0 * max - *pos;
    } else {
        return false;
    }
    *vel = -*vel;
    *pos = pos.clamp(0.0, max);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::renderer_recording::{DrawCmd, RecordingRenderer};

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::default(),
            radius: 2.0,
            opacity: 1.0,
            hue: 200.0,
        }
    }

    #[test]
    fn test_start_seeds_fixed_batch() {
        let mut field = ParticleField::with_seed(7);
        field.start(800.0, 600.0, true);

        assert!(field.is_running());
        assert_eq!(field.particles().len(), config::PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.pos.x));
            assert!((0.0..600.0).contains(&p.pos.y));
            assert!(p.vel.x.abs() <= 1.5 && p.vel.y.abs() <= 1.5);
            assert!((1.0..4.0).contains(&p.radius));
            assert!((0.0..1.0).contains(&p.opacity));
            assert!((180.0..240.0).contains(&p.hue));
        }
    }

    #[test]
    fn test_warm_palette_hues() {
        let mut field = ParticleField::with_seed(3);
        field.start(400.0, 400.0, false);
        assert!(field.particles().iter().all(|p| (30.0..90.0).contains(&p.hue)));
        assert_eq!(field.palette(), Some(Palette::for_variant(false)));
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let (w, h) = (120.0, 90.0);
        let mut field = ParticleField::with_seed(42);
        field.start(w, h, true);

        for _ in 0..2000 {
            field.tick();
            for p in field.particles() {
                assert!(p.pos.x >= 0.0 && p.pos.x <= w, "x out of bounds: {}", p.pos.x);
                assert!(p.pos.y >= 0.0 && p.pos.y <= h, "y out of bounds: {}", p.pos.y);
            }
        }
        assert_eq!(field.frames(), 2000);
    }

    #[test]
    fn test_velocity_flips_once_per_crossing() {
        let (w, h) = (60.0, 40.0);
        let mut field = ParticleField::with_seed(11);
        field.start(w, h, false);

        for _ in 0..500 {
            let before: Vec<Particle> = field.particles().to_vec();
            field.tick();
            for (old, new) in before.iter().zip(field.particles()) {
                let nx = old.pos.x + old.vel.x;
                let ny = old.pos.y + old.vel.y;
                let crossed_x = nx < 0.0 || nx > w;
                let crossed_y = ny < 0.0 || ny > h;
                let expect_vx = if crossed_x { -old.vel.x } else { old.vel.x };
                let expect_vy = if crossed_y { -old.vel.y } else { old.vel.y };
                assert_eq!(new.vel.x, expect_vx);
                assert_eq!(new.vel.y, expect_vy);
            }
        }
    }

    #[test]
    fn test_reflect_mirrors_overshoot() {
        let (mut pos, mut vel) = (103.0, 4.0);
        assert!(reflect(&mut pos, &mut vel, 100.0));
        assert_eq!((pos, vel), (97.0, -4.0));

        let (mut pos, mut vel) = (-1.5, -1.5);
        assert!(reflect(&mut pos, &mut vel, 100.0));
        assert_eq!((pos, vel), (1.5, 1.5));

        let (mut pos, mut vel) = (50.0, 1.0);
        assert!(!reflect(&mut pos, &mut vel, 100.0));
    }

    #[test]
    fn test_link_threshold_and_opacity() {
        assert_eq!(link_opacity(0.0), Some(0.3));
        assert!((link_opacity(40.0).unwrap() - 0.15).abs() < 1e-12);
        assert!(link_opacity(79.999).unwrap() >= 0.0);
        assert_eq!(link_opacity(80.0), None);
        assert_eq!(link_opacity(120.0), None);
    }

    #[test]
    fn test_links_follow_exact_distance() {
        let mut field = ParticleField::with_seed(1);
        field.start(500.0, 500.0, true);
        field.replace_particles(vec![
            still(0.0, 0.0),
            still(48.0, 64.0),  // d = 80 from #0: no link
            still(30.0, 40.0),  // d = 50 from #0
            still(400.0, 400.0),
        ]);

        let links = field.links();
        let pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.a, l.b)).collect();
        assert_eq!(pairs, vec![(0, 2), (1, 2)]);

        let l02 = links[0];
        assert!((l02.distance - 50.0).abs() < 1e-12);
        assert!((l02.opacity - 0.3 * (1.0 - 50.0 / 80.0)).abs() < 1e-12);
    }

    #[test]
    fn test_render_draws_circles_and_links() {
        let mut field = ParticleField::with_seed(5);
        field.start(200.0, 200.0, true);
        field.replace_particles(vec![still(10.0, 10.0), still(20.0, 10.0)]);

        let rec = RecordingRenderer::new();
        field.render(&rec);
        let circles = rec
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCmd::FillCircle { .. }))
            .count();
        assert_eq!(circles, 2);
        let lines = rec.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].3, config::PARTICLE_LINK_WIDTH);
    }

    #[test]
    fn test_stop_discards_batch() {
        let mut field = ParticleField::with_seed(9);
        field.start(300.0, 300.0, false);
        field.tick();
        field.stop();

        assert!(!field.is_running());
        assert!(field.particles().is_empty());
        assert!(field.links().is_empty());

        let rec = RecordingRenderer::new();
        field.render(&rec);
        assert!(rec.is_empty());
    }

    #[test]
    fn test_resize_rebounds_running_batch() {
        let mut field = ParticleField::with_seed(4);
        field.start(800.0, 600.0, true);
        let mut mover = still(799.0, 300.0);
        mover.vel = Vec2::new(1.5, 0.0);
        field.replace_particles(vec![mover, still(700.0, 500.0)]);

        // Growing lets the particle run past the old right edge.
        field.resize(1600.0, 600.0);
        field.tick();
        field.tick();
        let p = &field.particles()[0];
        assert!(p.pos.x > 800.0, "still bounded by old width: {}", p.pos.x);
        assert_eq!(p.vel.x, 1.5);

        // Shrinking pulls everything onto the new surface.
        field.resize(400.0, 450.0);
        for p in field.particles() {
            assert!(p.pos.x <= 400.0 && p.pos.y <= 450.0);
        }
        field.tick();
        assert!(field.particles().iter().all(|p| p.pos.x <= 400.0));
    }

    #[test]
    fn test_resize_without_batch_is_noop() {
        let mut field = ParticleField::with_seed(4);
        field.resize(100.0, 100.0);
        assert!(!field.is_running());
    }

    #[test]
    fn test_zero_sized_surface_is_noop() {
        let mut field = ParticleField::with_seed(2);
        field.start(0.0, 0.0, true);
        field.tick();
        assert!(field.is_running());
        assert!(field.particles().iter().all(|p| p.pos == Vec2::default()));

        let rec = RecordingRenderer::new();
        field.render(&rec);
        assert!(rec.is_empty());
    }
}
