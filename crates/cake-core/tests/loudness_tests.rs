use cake_core::{rms_from_bytes, BlowGate};

#[test]
fn rms_of_silence_is_zero() {
    let samples = vec![128u8; 2048];
    assert_eq!(rms_from_bytes(&samples), 0.0);
}

#[test]
fn rms_of_empty_window_is_zero() {
    assert_eq!(rms_from_bytes(&[]), 0.0);
}

#[test]
fn rms_of_full_scale_square_wave_is_near_one() {
    // Alternating 0/255 around the 128 center is as loud as a byte window gets
    let samples: Vec<u8> = (0..2048).map(|i| if i % 2 == 0 { 0 } else { 255 }).collect();
    let rms = rms_from_bytes(&samples);
    assert!(rms > 0.99 && rms <= 1.0, "rms = {rms}");
}

#[test]
fn rms_grows_with_amplitude() {
    let quiet: Vec<u8> = (0..1024)
        .map(|i| if i % 2 == 0 { 118 } else { 138 })
        .collect();
    let loud: Vec<u8> = (0..1024)
        .map(|i| if i % 2 == 0 { 78 } else { 178 })
        .collect();
    assert!(rms_from_bytes(&quiet) < rms_from_bytes(&loud));
}

#[test]
fn gate_fires_immediately_then_respects_cooldown() {
    let mut gate = BlowGate::new(400.0);
    assert!(gate.check(0.5, 0.2, 0.0));
    assert!(!gate.check(0.5, 0.2, 100.0));
    assert!(!gate.check(0.5, 0.2, 399.0));
    assert!(gate.check(0.5, 0.2, 400.0));
}

#[test]
fn gate_ignores_levels_at_or_below_threshold() {
    let mut gate = BlowGate::new(400.0);
    assert!(!gate.check(0.2, 0.2, 0.0));
    assert!(!gate.check(0.1, 0.2, 50.0));
    // Quiet samples do not consume the cooldown
    assert!(gate.check(0.3, 0.2, 60.0));
}

#[test]
fn gate_reset_allows_an_immediate_fire() {
    let mut gate = BlowGate::new(400.0);
    assert!(gate.check(0.5, 0.2, 0.0));
    assert!(!gate.check(0.5, 0.2, 10.0));
    gate.reset();
    assert!(gate.check(0.5, 0.2, 20.0));
}

#[test]
fn constant_loudness_fires_no_faster_than_cooldown() {
    // Simulate a frame loop sampling every 16 ms under sustained loud input
    let mut gate = BlowGate::new(400.0);
    let mut fire_times = Vec::new();
    let mut t = 0.0;
    while t <= 2000.0 {
        if gate.check(0.8, 0.12, t) {
            fire_times.push(t);
        }
        t += 16.0;
    }
    assert!(fire_times.len() >= 2, "expected repeated fires");
    for pair in fire_times.windows(2) {
        assert!(
            pair[1] - pair[0] >= 400.0,
            "fires {} and {} closer than cooldown",
            pair[0],
            pair[1]
        );
    }
}
