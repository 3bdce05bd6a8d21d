//! Ambient noise calibration and the sensitivity threshold tiers derived
//! from it.

/// User-facing sensitivity preset selecting which threshold tier is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sensitivity {
    Easy,
    #[default]
    Normal,
}

impl Sensitivity {
    pub fn toggled(self) -> Self {
        match self {
            Sensitivity::Easy => Sensitivity::Normal,
            Sensitivity::Normal => Sensitivity::Easy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sensitivity::Easy => "easy",
            Sensitivity::Normal => "normal",
        }
    }
}

/// How a trigger threshold is derived from the calibrated baseline.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdTier {
    pub multiplier: f32,
    pub offset: f32,
    pub max: f32,
}

impl ThresholdTier {
    /// `min(baseline * multiplier + offset, max)`. On silent input the
    /// baseline is ~0 and `offset` is the floor.
    pub fn derive(&self, baseline: f32) -> f32 {
        (baseline * self.multiplier + self.offset).min(self.max)
    }
}

/// Both tiers derived from one calibration run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub baseline: f32,
    pub easy: f32,
    pub normal: f32,
}

impl Thresholds {
    pub fn derive(baseline: f32, easy_tier: ThresholdTier, normal_tier: ThresholdTier) -> Self {
        Self {
            baseline,
            easy: easy_tier.derive(baseline),
            normal: normal_tier.derive(baseline),
        }
    }

    pub fn active(&self, sensitivity: Sensitivity) -> f32 {
        match sensitivity {
            Sensitivity::Easy => self.easy,
            Sensitivity::Normal => self.normal,
        }
    }
}

/// Averages loudness samples over a fixed window to measure the ambient
/// level. Samples inside the leading grace period are discarded so the
/// stream can settle after acquisition.
#[derive(Clone, Copy, Debug)]
pub struct Calibrator {
    window_ms: f64,
    grace_ms: f64,
    started_ms: Option<f64>,
    sum: f64,
    samples: u32,
}

impl Calibrator {
    pub fn new(window_ms: f64, grace_ms: f64) -> Self {
        Self {
            window_ms,
            grace_ms,
            started_ms: None,
            sum: 0.0,
            samples: 0,
        }
    }

    /// Feed one sample; yields the averaged baseline once the window has
    /// elapsed.
    pub fn feed(&mut self, level: f32, now_ms: f64) -> Option<f32> {
        let started = *self.started_ms.get_or_insert(now_ms);
        let elapsed = now_ms - started;
        if elapsed < self.grace_ms {
            return None;
        }
        self.sum += level as f64;
        self.samples += 1;
        if elapsed >= self.grace_ms + self.window_ms {
            Some((self.sum / self.samples as f64) as f32)
        } else {
            None
        }
    }
}
