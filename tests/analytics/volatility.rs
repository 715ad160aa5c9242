use nse_options_rs::analytics::{IvRankBand, iv_rank};
use nse_options_rs::analyze;
use nse_options_rs::chain::ContractQuote;

use crate::common::{approx, both, quote, record, snapshot, three_strike_snapshot};

#[test]
fn means_skew_and_rank() {
    let r = analyze(&three_strike_snapshot(), None).unwrap();

    assert!(approx(r.iv.mean_call_iv, 20.0));
    assert!(approx(r.iv.mean_put_iv, 30.0));
    assert!(approx(r.iv.iv_skew, 10.0));
    // Combined mean 25 sits a quarter of the way up the 20..40 band.
    assert!(approx(r.iv.iv_rank, 25.0));
}

#[test]
fn all_zero_ivs_rank_zero() {
    let s = snapshot(
        100.0,
        vec![
            both(90.0, (10, 0.0, 1), (10, 0.0, 1)),
            both(100.0, (10, 0.0, 1), (10, 0.0, 1)),
        ],
    );
    let r = analyze(&s, None).unwrap();
    assert_eq!(r.iv.iv_rank, 0.0);
    assert_eq!(r.iv.iv_skew, 0.0);
}

#[test]
fn huge_ivs_rank_hundred() {
    let s = snapshot(
        100.0,
        vec![
            both(90.0, (10, 1.0e6, 1), (10, 2.0e6, 1)),
            both(100.0, (10, f64::MAX, 1), (10, f64::MAX, 1)),
        ],
    );
    let r = analyze(&s, None).unwrap();
    assert_eq!(r.iv.iv_rank, 100.0);
}

#[test]
fn missing_side_means_are_zero() {
    let s = snapshot(
        100.0,
        vec![record(100.0, Some(quote(100.0, 10, 30.0, 1)), None)],
    );
    let r = analyze(&s, None).unwrap();
    assert!(approx(r.iv.mean_call_iv, 30.0));
    assert_eq!(r.iv.mean_put_iv, 0.0);
    assert!(approx(r.iv.iv_skew, -30.0));
    assert!(approx(r.iv.iv_rank, 50.0));
}

#[test]
fn invalid_ivs_are_dropped() {
    let bad = |iv: Option<f64>| ContractQuote {
        implied_volatility: iv,
        ..quote(100.0, 10, 0.0, 1)
    };
    let s = snapshot(
        100.0,
        vec![
            both(90.0, (10, 24.0, 1), (10, 36.0, 1)),
            record(100.0, Some(bad(None)), Some(bad(Some(f64::NAN)))),
            record(110.0, Some(bad(Some(-5.0))), Some(bad(Some(f64::INFINITY)))),
        ],
    );
    let r = analyze(&s, None).unwrap();
    assert!(approx(r.iv.mean_call_iv, 24.0));
    assert!(approx(r.iv.mean_put_iv, 36.0));
    assert!(approx(r.iv.iv_rank, 50.0));
}

#[test]
fn rank_is_clamped_for_any_input() {
    let band = IvRankBand::default();
    for iv in [-100.0, 0.0, 19.99, 20.0, 30.0, 40.0, 55.0, 1.0e12, f64::INFINITY] {
        let rank = iv_rank(iv, &band);
        assert!((0.0..=100.0).contains(&rank), "rank {rank} for iv {iv}");
    }
    assert_eq!(iv_rank(f64::NAN, &band), 0.0);
    assert_eq!(iv_rank(40.0, &band), 100.0);
    assert_eq!(iv_rank(20.0, &band), 0.0);
}

#[test]
fn custom_band() {
    let band = IvRankBand {
        floor: 10.0,
        ceiling: 60.0,
    };
    assert!(approx(iv_rank(35.0, &band), 50.0));

    let degenerate = IvRankBand {
        floor: 30.0,
        ceiling: 30.0,
    };
    assert_eq!(iv_rank(29.0, &degenerate), 0.0);
    assert_eq!(iv_rank(30.0, &degenerate), 100.0);
}
