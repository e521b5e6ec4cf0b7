/// Visual and behavioral constants.

// --- Window ---
pub const WINDOW_TITLE: &str = "Persona Split";
pub const DEFAULT_WIDTH: i32 = 1280;
pub const DEFAULT_HEIGHT: i32 = 720;
pub const FRAME_SLEEP_MS: u64 = 16;

// --- Palette (hex) ---
pub const ENTRY_BG: u32 = 0x000308;
pub const CREATIVE_BG_CENTER: u32 = 0x1A0533;
pub const CREATIVE_BG_MID: u32 = 0x0A0015;
pub const LOGICAL_BG: u32 = 0xF8F7F5;
pub const LOGICAL_BG_ALT: u32 = 0xF0EDE8;
pub const LOGICAL_TEXT: u32 = 0x1A1A1A;
pub const LOGICAL_MUTED: u32 = 0x888888;
pub const ACCENT_VIOLET: u32 = 0xBF00FF;
pub const ACCENT_BLUE: u32 = 0x4A9EFF;
pub const ACCENT_MINT: u32 = 0x00FFAA;
pub const ACCENT_CYAN: u32 = 0x00C8FF;
pub const ENTRY_LINE: u32 = 0x7800FF;
pub const WIPE_DARK: u32 = 0x0A0015;
pub const WIPE_LIGHT: u32 = 0xFFFFFF;
pub const WIPE_CAPTION_LIGHT: u32 = 0x111111;

// --- Particle field ---
pub const PARTICLE_COUNT: usize = 180;
pub const PARTICLE_MAX_SPEED: f64 = 1.5;
pub const PARTICLE_MIN_RADIUS: f64 = 1.0;
pub const PARTICLE_MAX_RADIUS: f64 = 4.0;
pub const PARTICLE_HUE_SPAN: f64 = 60.0;
pub const PARTICLE_LINK_DISTANCE: f64 = 80.0;
pub const PARTICLE_LINK_DISTANCE_SQ: f64 = PARTICLE_LINK_DISTANCE * PARTICLE_LINK_DISTANCE;
pub const PARTICLE_LINK_MAX_OPACITY: f64 = 0.3;
pub const PARTICLE_LINK_WIDTH: f64 = 0.5;

// --- Constellation ---
pub const NODE_HOVER_SCALE: f64 = 1.8;
pub const NODE_GLOW_SCALE: f64 = 4.0;
pub const NODE_HIT_SCALE: f64 = 3.0;
pub const NODE_LABEL_OFFSET: f64 = 18.0;
pub const LINK_ACTIVE_WIDTH: f64 = 1.5;
pub const LINK_IDLE_WIDTH: f64 = 0.5;
pub const LINK_ACTIVE_ALPHA: f64 = 0.5;
pub const LINK_IDLE_ALPHA: f64 = 0.08;

// --- Transition (ms from activation) ---
pub const PHASE_WIPING_AT_MS: f64 = 400.0;
pub const PHASE_DONE_AT_MS: f64 = 800.0;
pub const MODE_COMMIT_DELAY_MS: f64 = 1000.0;
pub const WIPE_SLIDE_MS: f64 = 600.0;
pub const CAPTION_FADE_MS: f64 = 200.0;

// --- Views ---
pub const ENTRY_FADE_DELAY_MS: f64 = 100.0;
pub const ENTRY_FADE_MS: f64 = 800.0;
pub const ENTRY_LINE_COUNT: usize = 20;
pub const SKILL_BAR_DELAY_MS: f64 = 600.0;
pub const SKILL_BAR_FILL_MS: f64 = 1200.0;
pub const HOVER_FADE_MS: f64 = 300.0;
pub const NAV_HEIGHT: f64 = 64.0;
pub const CUBE_SIZE: f64 = 100.0;
pub const CUBE_HOVER_SIZE: f64 = 140.0;
pub const CUBE_SPIN_X_DEG: f64 = 0.3;
pub const CUBE_SPIN_Y_DEG: f64 = 0.4;
