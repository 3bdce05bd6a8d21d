use cake_core::{
    LevelReport, Phase, Session, SessionConfig, Sensitivity, EASY_TIER, NORMAL_TIER,
};

fn config(total: usize) -> SessionConfig {
    SessionConfig {
        total_candles: total,
        cooldown_ms: 400.0,
        calibration_window_ms: 100.0,
        startup_grace_ms: 0.0,
        easy_tier: EASY_TIER,
        normal_tier: NORMAL_TIER,
    }
}

/// Drive a session through a silent calibration; listening starts afterwards.
fn calibrated(total: usize) -> Session {
    let mut session = Session::new(config(total));
    session.begin_calibration();
    assert_eq!(session.feed_level(0.0, 0.0), LevelReport::Calibrating);
    assert_eq!(session.feed_level(0.0, 50.0), LevelReport::Calibrating);
    match session.feed_level(0.0, 100.0) {
        LevelReport::Calibrated { baseline } => assert!(baseline.abs() < 1e-6),
        other => panic!("expected calibration to complete, got {other:?}"),
    }
    assert_eq!(session.phase(), Phase::Listening);
    session
}

#[test]
fn manual_clicks_celebrate_without_ever_listening() {
    let mut session = Session::new(config(3));
    assert_eq!(session.phase(), Phase::Idle);
    // Levels fed before the mic is live are ignored
    assert_eq!(session.feed_level(0.9, 0.0), LevelReport::Ignored);

    assert!(!session.extinguish_next().unwrap().all_out);
    assert!(!session.extinguish_next().unwrap().all_out);
    let last = session.extinguish_next().unwrap();
    assert!(last.all_out);
    assert_eq!(session.phase(), Phase::Celebrating);
    assert_eq!(session.remaining(), 0);
    assert!(session.extinguish_next().is_none());
}

#[test]
fn targeted_clicks_put_out_that_candle() {
    let mut session = Session::new(config(4));
    assert_eq!(session.extinguish_at(2).unwrap().index, 2);
    assert!(session.extinguish_at(2).is_none());
    assert_eq!(session.extinguish_next().unwrap().index, 0);
    assert_eq!(session.remaining(), 2);
}

#[test]
fn silent_calibration_sets_floor_thresholds() {
    let session = calibrated(3);
    // Default sensitivity is normal; silent baseline means the tier offset
    assert_eq!(session.active_threshold(), Some(NORMAL_TIER.offset));
    let thresholds = session.thresholds().expect("calibrated");
    assert_eq!(thresholds.easy, EASY_TIER.offset);
}

#[test]
fn loud_levels_extinguish_at_cooldown_pace() {
    let mut session = calibrated(3);

    match session.feed_level(0.9, 150.0) {
        LevelReport::Listening { fired: Some(out) } => assert_eq!(out.index, 0),
        other => panic!("expected a fire, got {other:?}"),
    }
    // Still inside the cooldown
    assert_eq!(
        session.feed_level(0.9, 300.0),
        LevelReport::Listening { fired: None }
    );
    // Below threshold never fires
    assert_eq!(
        session.feed_level(0.05, 600.0),
        LevelReport::Listening { fired: None }
    );
    match session.feed_level(0.9, 700.0) {
        LevelReport::Listening { fired: Some(out) } => assert_eq!(out.index, 1),
        other => panic!("expected a fire, got {other:?}"),
    }
    match session.feed_level(0.9, 1200.0) {
        LevelReport::Listening { fired: Some(out) } => {
            assert_eq!(out.index, 2);
            assert!(out.all_out);
        }
        other => panic!("expected the final fire, got {other:?}"),
    }
    assert_eq!(session.phase(), Phase::Celebrating);
    // While celebrating, loudness is ignored entirely
    assert_eq!(session.feed_level(0.9, 1700.0), LevelReport::Ignored);
}

#[test]
fn sensitivity_toggle_changes_only_the_active_threshold() {
    let mut session = calibrated(3);
    let normal = session.active_threshold().unwrap();
    assert_eq!(session.toggle_sensitivity(), Sensitivity::Easy);
    let easy = session.active_threshold().unwrap();
    assert!(easy < normal);
    // The derived pair itself is untouched by the toggle
    let thresholds = session.thresholds().unwrap();
    assert_eq!(thresholds.easy, easy);
    assert_eq!(thresholds.normal, normal);
}

#[test]
fn reset_relights_and_resumes_listening_when_calibrated() {
    let mut session = calibrated(2);
    session.feed_level(0.9, 200.0);
    session.feed_level(0.9, 700.0);
    assert_eq!(session.phase(), Phase::Celebrating);

    session.reset();
    assert_eq!(session.phase(), Phase::Listening);
    assert_eq!(session.remaining(), 2);
    // The gate is cleared, so the next loud sample fires immediately
    match session.feed_level(0.9, 710.0) {
        LevelReport::Listening { fired: Some(out) } => assert_eq!(out.index, 0),
        other => panic!("expected a fire after reset, got {other:?}"),
    }
}

#[test]
fn reset_without_calibration_returns_to_idle() {
    let mut session = Session::new(config(2));
    while session.extinguish_next().is_some() {}
    assert_eq!(session.phase(), Phase::Celebrating);
    session.reset();
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.remaining(), 2);
}
