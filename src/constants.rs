//! Shared UI constants such as colors, panel sizing, and demo timing.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PRIMARY: &str = "#3b82f6";
pub const ACCENT_PLAYHEAD: &str = "#ef4444";

// Panel dimensions
pub const TITLE_BAR_HEIGHT: f64 = 48.0;
pub const MEDIA_PANEL_WIDTH: f64 = 320.0;
pub const CHAT_PANEL_WIDTH: f64 = 350.0;
pub const PROMPT_BOX_HEIGHT: f64 = 120.0;
pub const TIMELINE_MIN_HEIGHT: f64 = 140.0;
pub const TIMELINE_MAX_HEIGHT: f64 = 480.0;
pub const TIMELINE_DEFAULT_HEIGHT: f64 = 260.0;
pub const TRACK_ROW_HEIGHT: f64 = 64.0;
pub const TRACK_LABEL_WIDTH: f64 = 120.0;
pub const RULER_HEIGHT: f64 = 32.0;

/// Demo playhead position. The preview never advances it, so it sits at a
/// fixed pixel offset like the rest of the placeholder chrome.
pub const PLAYHEAD_OFFSET_PX: f64 = 100.0;

// Simulated backend latencies
pub const CHAT_REPLY_LATENCY_MS: u64 = 1000;
pub const PROMPT_APPLY_LATENCY_MS: u64 = 2000;
