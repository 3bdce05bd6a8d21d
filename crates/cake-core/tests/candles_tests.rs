use cake_core::CandleRow;

#[test]
fn extinguish_next_goes_left_to_right() {
    let mut row = CandleRow::new(5);
    assert_eq!(row.remaining(), 5);
    for expected in 0..3 {
        let out = row.extinguish_next().expect("candle available");
        assert_eq!(out.index, expected);
    }
    assert_eq!(row.remaining(), 2);
    assert!(!row.is_lit(0));
    assert!(row.is_lit(3));
}

#[test]
fn remaining_tracks_every_extinguish() {
    let mut row = CandleRow::new(8);
    for n in 1..=8 {
        row.extinguish_next();
        assert_eq!(row.remaining(), 8 - n);
    }
}

#[test]
fn targeted_extinguish_hits_that_candle_only() {
    let mut row = CandleRow::new(4);
    let out = row.extinguish_at(2).expect("candle 2 lit");
    assert_eq!(out.index, 2);
    assert!(!out.all_out);
    // Repeat on the same candle is a no-op
    assert!(row.extinguish_at(2).is_none());
    // Ordered extinguishing still starts from the leftmost lit candle
    assert_eq!(row.extinguish_next().unwrap().index, 0);
    assert_eq!(row.remaining(), 2);
}

#[test]
fn out_of_range_target_is_noop() {
    let mut row = CandleRow::new(3);
    assert!(row.extinguish_at(3).is_none());
    assert!(row.extinguish_at(usize::MAX).is_none());
    assert_eq!(row.remaining(), 3);
}

#[test]
fn over_extinguishing_stops_at_zero() {
    let mut row = CandleRow::new(3);
    for _ in 0..3 {
        assert!(row.extinguish_next().is_some());
    }
    for _ in 0..5 {
        assert!(row.extinguish_next().is_none());
    }
    assert_eq!(row.remaining(), 0);
}

#[test]
fn all_out_reported_exactly_once_per_crossing() {
    let mut row = CandleRow::new(2);
    assert!(!row.extinguish_next().unwrap().all_out);
    assert!(row.extinguish_next().unwrap().all_out);
    // Past zero there is no event at all, so no second crossing
    assert!(row.extinguish_next().is_none());
}

#[test]
fn relight_restores_the_full_row() {
    let mut row = CandleRow::new(6);
    while row.extinguish_next().is_some() {}
    assert_eq!(row.remaining(), 0);
    row.relight_all();
    assert_eq!(row.remaining(), 6);
    for i in 0..6 {
        assert!(row.is_lit(i), "candle {i} should be relit");
    }
}
