// DOM element ids the front-end binds to (see web/index.html)

pub const CAKE_ID: &str = "cake";
pub const MIC_BTN_ID: &str = "mic-btn";
pub const REMAINING_ID: &str = "remaining-count";
pub const LEVEL_FILL_ID: &str = "level-fill";
pub const OVERLAY_ID: &str = "overlay";
pub const CONFETTI_CANVAS_ID: &str = "confetti-canvas";
pub const RESET_BTN_ID: &str = "reset-btn";
pub const SENSITIVITY_BTN_ID: &str = "sensitivity-btn";

// Mic button labels
pub const MIC_LABEL_IDLE: &str = "\u{1F3A4} Enable microphone";
pub const MIC_LABEL_LIVE: &str = "\u{1F3A4} Listening\u{2026}";

pub const MIC_DENIED_MESSAGE: &str = "Microphone permission is required to blow out the candles.\nYou can still click candles to put them out one by one.";

// Analyser configuration
pub const FFT_SIZE: u32 = 2048;
