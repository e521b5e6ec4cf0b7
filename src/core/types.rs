/// Common type definitions shared by the views, effects and platform layer.

/// Top-level presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Entry,
    Logical,
    Creative,
}

impl Mode {
    /// The mode a toggle switches to. Entry has no toggle partner and maps to Logical.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Logical => Mode::Creative,
            Mode::Creative | Mode::Entry => Mode::Logical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Entry => "entry",
            Mode::Logical => "logical",
            Mode::Creative => "creative",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "entry" => Some(Mode::Entry),
            "logical" => Some(Mode::Logical),
            "creative" => Some(Mode::Creative),
            _ => None,
        }
    }
}

/// 2D coordinate vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Axis-aligned rectangle used for layout and hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn centered(center: Vec2, w: f64, h: f64) -> Self {
        Self {
            x: center.x - w / 2.0,
            y: center.y - h / 2.0,
            w,
            h,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn from_hex(hex: u32, alpha: f64) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f64 / 255.0,
            g: ((hex >> 8) & 0xFF) as f64 / 255.0,
            b: (hex & 0xFF) as f64 / 255.0,
            a: alpha,
        }
    }

    pub fn white(alpha: f64) -> Self {
        Self::from_hex(0xFFFFFF, alpha)
    }

    /// CSS-style `hsla()`: hue in degrees, saturation and lightness in percent.
    pub fn from_hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 360.0;
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let l = (lightness / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            return Self {
                r: l,
                g: l,
                b: l,
                a: alpha,
            };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self {
            r: hue_to_rgb(p, q, h + 1.0 / 3.0),
            g: hue_to_rgb(p, q, h),
            b: hue_to_rgb(p, q, h - 1.0 / 3.0),
            a: alpha,
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { a: alpha, ..self }
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Mouse event data
#[derive(Debug, Clone, Default)]
pub struct MouseEvent {
    pub x: f64,
    pub y: f64,
    pub button: u8,
    pub pressed: bool,
    pub released: bool,
}

impl MouseEvent {
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn click(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            button: 1,
            pressed: true,
            released: false,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn is_left_click(&self) -> bool {
        self.button == 1 && self.pressed
    }
}

/// Key event data
#[derive(Debug, Clone, Default)]
pub struct KeyEvent {
    pub keycode: u32,
    pub pressed: bool,
    pub ctrl: bool,
}
