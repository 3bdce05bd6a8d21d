//! Loudness measurement and blow-rate gating.

/// RMS of byte time-domain samples as produced by an analyser node: centered
/// at 128, normalized to -1..1, averaged over the window. Result is ~0..1.
pub fn rms_from_bytes(samples: &[u8]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples
        .iter()
        .map(|&s| {
            let v = (s as f32 - 128.0) / 128.0;
            v * v
        })
        .sum();
    (sum / samples.len() as f32).sqrt()
}

/// Rate limiter for loudness-driven extinguishes: a blow fires only when the
/// level is above threshold and the cooldown has elapsed since the last fire.
#[derive(Clone, Copy, Debug)]
pub struct BlowGate {
    cooldown_ms: f64,
    last_fire_ms: Option<f64>,
}

impl BlowGate {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            last_fire_ms: None,
        }
    }

    /// Check one sample; records the fire time when it passes.
    pub fn check(&mut self, level: f32, threshold: f32, now_ms: f64) -> bool {
        if level <= threshold {
            return false;
        }
        match self.last_fire_ms {
            Some(last) if now_ms - last < self.cooldown_ms => false,
            _ => {
                self.last_fire_ms = Some(now_ms);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }
}
