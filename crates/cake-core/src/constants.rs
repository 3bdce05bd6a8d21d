use crate::calibrate::ThresholdTier;

// Shared tuning constants used by core logic and the web frontend.

// Cake layout
pub const TOTAL_CANDLES: usize = 21;

// Blow detection
pub const BLOW_COOLDOWN_MS: f64 = 400.0; // minimum spacing between loudness-driven extinguishes
pub const CALIBRATION_WINDOW_MS: f64 = 1200.0; // ambient noise averaging window
pub const STARTUP_GRACE_MS: f64 = 300.0; // settle time before the first measured sample

// Threshold tiers: threshold = min(baseline * multiplier + offset, max).
// With a silent room the baseline is ~0 and the offset acts as the floor.
pub const EASY_TIER: ThresholdTier = ThresholdTier {
    multiplier: 2.0,
    offset: 0.06,
    max: 0.18,
};
pub const NORMAL_TIER: ThresholdTier = ThresholdTier {
    multiplier: 3.0,
    offset: 0.12,
    max: 0.30,
};

// Level meter
pub const METER_GAIN: f32 = 2.0; // boosts RMS into a readable 0..1 fill fraction

// Confetti
pub const CONFETTI_COUNT: usize = 200;
pub const CONFETTI_RESPAWN_MARGIN: f32 = 10.0; // px past the bottom before a piece respawns
pub const CONFETTI_FALL_SPEED_MIN: f32 = 60.0; // px/sec
pub const CONFETTI_FALL_SPEED_SPAN: f32 = 180.0;
pub const CONFETTI_SWAY_RATE: f32 = 1.2; // rad/sec
pub const CONFETTI_SWAY_SPEED: f32 = 48.0; // px/sec lateral drift at full sway
pub const CONFETTI_WIDTH_MIN: f32 = 6.0;
pub const CONFETTI_WIDTH_SPAN: f32 = 10.0;
pub const CONFETTI_HEIGHT_MIN: f32 = 2.0;
pub const CONFETTI_HEIGHT_SPAN: f32 = 4.0;

pub const CONFETTI_PALETTE: [&str; 5] = ["#ffd166", "#7df9ff", "#ff5d8f", "#7dffb0", "#c7a6ff"];
