/// Full-screen cover-and-reveal wipe played between presentations.
///
/// Phases advance on a fixed timetable measured from activation. The
/// sequencer keeps one authoritative `(phase, epoch)` pair; every scheduled
/// phase change carries the epoch it was scheduled under and is dropped if
/// the epoch has moved on (deactivation or re-activation).

use crate::core::config;
use crate::core::timer::TimerQueue;
use crate::core::types::{Color, Rect};
use crate::effects::animation::{Animation, Easing, Fade};
use crate::effects::particle_field::ParticleField;
use crate::platform::renderer::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransitionPhase {
    Idle = 0,
    Covering = 1,
    Wiping = 2,
    Done = 3,
}

#[derive(Debug, Clone, Copy)]
struct PhaseTimer {
    phase: TransitionPhase,
    epoch: u64,
}

pub struct TransitionSequencer {
    phase: TransitionPhase,
    epoch: u64,
    active: bool,
    from_logical: bool,
    viewport: Rect,
    timers: TimerQueue<PhaseTimer>,
    particles: ParticleField,
    slide: Animation,
    caption: Fade,
}

impl TransitionSequencer {
    pub fn new(particles: ParticleField) -> Self {
        Self {
            phase: TransitionPhase::Idle,
            epoch: 0,
            active: false,
            from_logical: true,
            viewport: Rect::default(),
            timers: TimerQueue::new(),
            particles,
            slide: Animation::new(Easing::InOutQuart),
            caption: Fade::new(config::CAPTION_FADE_MS),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg(test)]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.particles.resize(width, height);
    }

    /// Start (or restart) the sequence at `now_ms`.
    pub fn activate(&mut self, now_ms: f64, from_logical: bool) {
        self.epoch += 1;
        self.active = true;
        self.from_logical = from_logical;
        self.particles.stop();
        self.slide.reset();
        self.caption.snap(0.0);

        log::debug!(
            "transition activated (epoch {}, from_logical={})",
            self.epoch,
            from_logical
        );

        // Restarting from any phase goes back to Covering.
        self.phase = TransitionPhase::Idle;
        self.enter(TransitionPhase::Covering);

        let epoch = self.epoch;
        self.timers.schedule(
            now_ms,
            config::PHASE_WIPING_AT_MS,
            PhaseTimer {
                phase: TransitionPhase::Wiping,
                epoch,
            },
        );
        self.timers.schedule(
            now_ms,
            config::PHASE_DONE_AT_MS,
            PhaseTimer {
                phase: TransitionPhase::Done,
                epoch,
            },
        );
    }

    /// Back to Idle immediately. Timers already scheduled become stale.
    pub fn deactivate(&mut self) {
        if !self.active && self.phase == TransitionPhase::Idle {
            return;
        }
        self.epoch += 1;
        self.active = false;
        self.phase = TransitionPhase::Idle;
        self.particles.stop();
        self.slide.reset();
        self.caption.snap(0.0);
        log::debug!("transition deactivated (epoch {})", self.epoch);
    }

    /// Fire due phase timers, then advance tweens and the particle burst by
    /// one display frame. Returns the phases entered during this call.
    pub fn update(&mut self, now_ms: f64, dt_ms: f64) -> Vec<TransitionPhase> {
        let mut entered = Vec::new();

        for timer in self.timers.drain_due(now_ms) {
            if timer.epoch != self.epoch || !self.active {
                log::trace!("dropping stale phase timer {:?} (epoch {})", timer.phase, timer.epoch);
                continue;
            }
            if timer.phase <= self.phase {
                continue;
            }
            self.enter(timer.phase);
            entered.push(timer.phase);
        }

        self.slide.update(dt_ms);
        self.caption.update(dt_ms);
        self.particles.tick();

        entered
    }

    fn enter(&mut self, phase: TransitionPhase) {
        self.phase = phase;
        match phase {
            TransitionPhase::Covering => {
                self.caption.set_target(1.0);
            }
            TransitionPhase::Wiping => {
                self.caption.set_target(0.0);
                self.slide.start(config::WIPE_SLIDE_MS);
                self.particles
                    .start(self.viewport.w, self.viewport.h, self.from_logical);
            }
            TransitionPhase::Done => {
                self.caption.set_target(0.0);
                self.particles.stop();
            }
            TransitionPhase::Idle => {}
        }
        log::trace!("transition phase -> {:?}", phase);
    }

    /// Whether anything of the overlay is on screen.
    pub fn is_visible(&self) -> bool {
        self.active || self.phase != TransitionPhase::Idle
    }

    pub fn render(&self, renderer: &dyn Renderer) {
        if !self.is_visible() {
            return;
        }
        let Rect { w, h, .. } = self.viewport;
        if w <= 0.0 || h <= 0.0 {
            return;
        }

        let half = w / 2.0;
        let shift = self.slide.progress() * half;
        let panel = if self.from_logical {
            Color::from_hex(config::WIPE_DARK, 1.0)
        } else {
            Color::from_hex(config::WIPE_LIGHT, 1.0)
        };

        // Left panel slides out to the left, right panel to the right.
        renderer.fill_rect(-shift, 0.0, half, h, panel);
        renderer.fill_rect(half + shift, 0.0, w - half, h, panel);

        self.particles.render(renderer);

        let alpha = self.caption.value();
        if alpha > 0.0 {
            let (caption, color) = if self.from_logical {
                ("◈ SWITCHING REALITY ◈", config::ACCENT_VIOLET)
            } else {
                ("⬡ SWITCHING REALITY ⬡", config::WIPE_CAPTION_LIGHT)
            };
            let size = (w * 0.04).clamp(20.0, 48.0);
            renderer.draw_text_centered(
                w / 2.0,
                h / 2.0 - size / 2.0,
                caption,
                size,
                Color::from_hex(color, alpha),
            );
        }
    }
}
