//! Session state machine tying the candle row, calibration, and blow gating
//! together. All timestamps are caller-supplied milliseconds (performance.now
//! semantics) so the session is fully testable off the browser.

use crate::calibrate::{Calibrator, Sensitivity, ThresholdTier, Thresholds};
use crate::candles::{CandleRow, Extinguished};
use crate::constants::{
    BLOW_COOLDOWN_MS, CALIBRATION_WINDOW_MS, EASY_TIER, NORMAL_TIER, STARTUP_GRACE_MS,
    TOTAL_CANDLES,
};
use crate::loudness::BlowGate;

/// Lifecycle of one cake session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Calibrating,
    Listening,
    Celebrating,
}

/// Tuning knobs for a session; defaults come from [`crate::constants`].
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub total_candles: usize,
    pub cooldown_ms: f64,
    pub calibration_window_ms: f64,
    pub startup_grace_ms: f64,
    pub easy_tier: ThresholdTier,
    pub normal_tier: ThresholdTier,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            total_candles: TOTAL_CANDLES,
            cooldown_ms: BLOW_COOLDOWN_MS,
            calibration_window_ms: CALIBRATION_WINDOW_MS,
            startup_grace_ms: STARTUP_GRACE_MS,
            easy_tier: EASY_TIER,
            normal_tier: NORMAL_TIER,
        }
    }
}

/// Outcome of feeding one loudness sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LevelReport {
    /// Not calibrating or listening; the sample only drove the meter.
    Ignored,
    Calibrating,
    /// The calibration window just completed.
    Calibrated { baseline: f32 },
    Listening { fired: Option<Extinguished> },
}

pub struct Session {
    config: SessionConfig,
    candles: CandleRow,
    sensitivity: Sensitivity,
    calibrator: Calibrator,
    thresholds: Option<Thresholds>,
    gate: BlowGate,
    phase: Phase,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            candles: CandleRow::new(config.total_candles),
            sensitivity: Sensitivity::default(),
            calibrator: Calibrator::new(config.calibration_window_ms, config.startup_grace_ms),
            thresholds: None,
            gate: BlowGate::new(config.cooldown_ms),
            phase: Phase::Idle,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn total(&self) -> usize {
        self.candles.total()
    }

    pub fn remaining(&self) -> usize {
        self.candles.remaining()
    }

    pub fn is_lit(&self, index: usize) -> bool {
        self.candles.is_lit(index)
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    pub fn toggle_sensitivity(&mut self) -> Sensitivity {
        self.sensitivity = self.sensitivity.toggled();
        self.sensitivity
    }

    /// Threshold for the current sensitivity, once calibrated.
    pub fn active_threshold(&self) -> Option<f32> {
        self.thresholds.map(|t| t.active(self.sensitivity))
    }

    pub fn thresholds(&self) -> Option<Thresholds> {
        self.thresholds
    }

    /// Mic granted: start measuring ambient noise. Any previous calibration
    /// is replaced once the new window completes.
    pub fn begin_calibration(&mut self) {
        self.calibrator = Calibrator::new(
            self.config.calibration_window_ms,
            self.config.startup_grace_ms,
        );
        self.gate.reset();
        self.phase = Phase::Calibrating;
        log::info!("[session] calibrating ambient noise");
    }

    /// Feed one loudness sample from the analyser loop.
    pub fn feed_level(&mut self, level: f32, now_ms: f64) -> LevelReport {
        match self.phase {
            Phase::Calibrating => match self.calibrator.feed(level, now_ms) {
                Some(baseline) => {
                    let thresholds =
                        Thresholds::derive(baseline, self.config.easy_tier, self.config.normal_tier);
                    log::info!(
                        "[session] baseline {:.4}, thresholds easy {:.3} / normal {:.3}",
                        baseline,
                        thresholds.easy,
                        thresholds.normal
                    );
                    self.thresholds = Some(thresholds);
                    self.phase = Phase::Listening;
                    LevelReport::Calibrated { baseline }
                }
                None => LevelReport::Calibrating,
            },
            Phase::Listening => {
                let Some(threshold) = self.active_threshold() else {
                    return LevelReport::Ignored;
                };
                let fired = if self.gate.check(level, threshold, now_ms) {
                    self.extinguish_next()
                } else {
                    None
                };
                LevelReport::Listening { fired }
            }
            Phase::Idle | Phase::Celebrating => LevelReport::Ignored,
        }
    }

    /// Put out the first still-lit candle (blow or keyboard fallback).
    pub fn extinguish_next(&mut self) -> Option<Extinguished> {
        let out = self.candles.extinguish_next();
        self.after_extinguish(out)
    }

    /// Put out a specific candle (direct click/tap).
    pub fn extinguish_at(&mut self, index: usize) -> Option<Extinguished> {
        let out = self.candles.extinguish_at(index);
        self.after_extinguish(out)
    }

    fn after_extinguish(&mut self, out: Option<Extinguished>) -> Option<Extinguished> {
        if let Some(e) = out {
            if e.all_out {
                self.phase = Phase::Celebrating;
                log::info!("[session] all candles out");
            }
        }
        out
    }

    /// Relight everything and clear the gate. Listening resumes when a
    /// calibration exists, since the mic stream stays live across resets.
    pub fn reset(&mut self) {
        self.candles.relight_all();
        self.gate.reset();
        self.phase = if self.thresholds.is_some() {
            Phase::Listening
        } else {
            Phase::Idle
        };
        log::info!("[session] reset, {} candles relit", self.candles.total());
    }
}
