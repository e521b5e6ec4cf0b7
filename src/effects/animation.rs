/// Time-based tweens for wipes, fades and bar fills.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// 1 - (1 - t)^3
    OutCubic,
    /// Symmetric quartic, close to `cubic-bezier(0.76, 0, 0.24, 1)`.
    InOutQuart,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::InOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// One-shot animation from 0 to 1 over a fixed duration.
#[derive(Debug, Clone)]
pub struct Animation {
    elapsed: f64,
    duration: f64,
    easing: Easing,
    active: bool,
    started: bool,
}

impl Animation {
    pub fn new(easing: Easing) -> Self {
        Self {
            elapsed: 0.0,
            duration: 0.0,
            easing,
            active: false,
            started: false,
        }
    }

    pub fn start(&mut self, duration_ms: f64) {
        self.elapsed = 0.0;
        self.duration = duration_ms;
        self.active = true;
        self.started = true;
    }

    /// Back to the not-started state; `progress` reads 0 again.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.duration = 0.0;
        self.active = false;
        self.started = false;
    }

    pub fn update(&mut self, dt_ms: f64) {
        if self.active {
            self.elapsed += dt_ms;
            if self.elapsed >= self.duration {
                self.elapsed = self.duration;
                self.active = false;
            }
        }
    }

    /// Eased progress in 0.0..=1.0. Zero until started.
    pub fn progress(&self) -> f64 {
        if !self.started {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing.apply(self.elapsed / self.duration)
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg(test)]
    pub fn is_complete(&self) -> bool {
        self.started && !self.active && self.elapsed >= self.duration
    }
}

/// A value that moves linearly toward a target, covering 0..1 in `duration_ms`.
///
/// Models CSS `transition: opacity <duration>` on hover and phase changes.
#[derive(Debug, Clone)]
pub struct Fade {
    value: f64,
    target: f64,
    duration: f64,
}

impl Fade {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            value: 0.0,
            target: 0.0,
            duration: duration_ms,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target.clamp(0.0, 1.0);
    }

    pub fn snap(&mut self, value: f64) {
        self.value = value.clamp(0.0, 1.0);
        self.target = self.value;
    }

    pub fn update(&mut self, dt_ms: f64) {
        if self.duration <= 0.0 {
            self.value = self.target;
            return;
        }
        let step = dt_ms / self.duration;
        if self.value < self.target {
            self.value = (self.value + step).min(self.target);
        } else {
            self.value = (self.value - step).max(self.target);
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }
}

/// Linear interpolation between two values.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
