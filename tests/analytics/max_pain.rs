use nse_options_rs::analytics::{max_pain, pain_at, strike_ladder};
use nse_options_rs::{NseError, analyze};

use crate::common::{both, quote, record, snapshot, three_strike_snapshot};

#[test]
fn three_strike_scenario_pains() {
    let s = three_strike_snapshot();

    assert_eq!(pain_at(&s, 90.0), 13_000.0);
    assert_eq!(pain_at(&s, 100.0), 10_000.0);
    assert_eq!(pain_at(&s, 110.0), 13_000.0);

    assert_eq!(max_pain(&s), Some(100.0));
    assert_eq!(analyze(&s, None).unwrap().max_pain, 100.0);
}

#[test]
fn tie_resolves_to_smallest_strike() {
    // pain(90) = 100 * 20 on the put side, pain(110) = 100 * 20 on the call side.
    let s = snapshot(
        100.0,
        vec![
            both(90.0, (100, 20.0, 0), (0, 20.0, 0)),
            both(110.0, (0, 20.0, 0), (100, 20.0, 0)),
        ],
    );
    assert_eq!(pain_at(&s, 90.0), pain_at(&s, 110.0));
    assert_eq!(max_pain(&s), Some(90.0));
}

#[test]
fn all_zero_oi_picks_lowest_strike() {
    let s = snapshot(
        100.0,
        vec![
            both(95.0, (0, 0.0, 0), (0, 0.0, 0)),
            both(100.0, (0, 0.0, 0), (0, 0.0, 0)),
            both(105.0, (0, 0.0, 0), (0, 0.0, 0)),
        ],
    );
    assert_eq!(max_pain(&s), Some(95.0));
}

#[test]
fn ladder_is_sorted_distinct_call_strikes() {
    let s = snapshot(
        100.0,
        vec![
            record(110.0, Some(quote(110.0, 1, 10.0, 1)), None),
            record(90.0, Some(quote(90.0, 1, 10.0, 1)), None),
            // Put-only strike is not on the call ladder.
            record(120.0, None, Some(quote(120.0, 1, 10.0, 1))),
            record(100.0, Some(quote(100.0, 1, 10.0, 1)), None),
        ],
    );
    assert_eq!(strike_ladder(&s), vec![90.0, 100.0, 110.0]);
}

#[test]
fn put_only_chain_falls_back_to_record_strikes() {
    let s = snapshot(
        100.0,
        vec![
            record(90.0, None, Some(quote(90.0, 400, 25.0, 1))),
            record(100.0, None, Some(quote(100.0, 100, 25.0, 1))),
            record(110.0, None, Some(quote(110.0, 50, 25.0, 1))),
        ],
    );
    assert_eq!(strike_ladder(&s), vec![90.0, 100.0, 110.0]);
    // Only put pain exists, so settling at the top strike costs nothing.
    assert_eq!(max_pain(&s), Some(110.0));
}

#[test]
fn max_pain_is_always_a_listed_strike() {
    let chains = vec![
        three_strike_snapshot(),
        snapshot(
            1_250.0,
            vec![
                both(1_200.0, (12_000, 30.0, 5), (45_000, 35.0, 9)),
                both(1_220.0, (18_500, 28.0, 7), (30_100, 33.0, 4)),
                both(1_240.0, (40_000, 26.0, 3), (22_000, 31.0, 8)),
                both(1_260.0, (52_000, 25.0, 1), (9_000, 30.0, 2)),
                both(1_280.0, (61_000, 24.0, 6), (3_000, 30.0, 5)),
            ],
        ),
        snapshot(
            50.0,
            vec![record(50.0, Some(quote(50.0, 7, 40.0, 1)), None)],
        ),
    ];

    for s in chains {
        let listed: Vec<f64> = s.strikes.iter().map(|r| r.strike).collect();
        let mp = analyze(&s, None).unwrap().max_pain;
        assert!(listed.contains(&mp), "max pain {mp} not in {listed:?}");
    }
}

#[test]
fn empty_snapshot_is_empty_data() {
    let s = snapshot(100.0, vec![]);
    match analyze(&s, None) {
        Err(NseError::EmptyData { symbol }) => assert_eq!(symbol, "TEST"),
        other => panic!("expected EmptyData, got {other:?}"),
    }
}
