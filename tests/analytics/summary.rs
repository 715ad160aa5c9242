use nse_options_rs::{NseError, PcrBias, SignalThresholds, summarize};

use crate::common::{approx, both, snapshot, three_strike_snapshot};

#[test]
fn neutral_summary_uses_strike_range() {
    let s = three_strike_snapshot();
    let sum = summarize(&s, &SignalThresholds::default()).unwrap();

    assert_eq!(sum.pcr, 1.0);
    assert_eq!(sum.bias, PcrBias::Neutral);
    assert_eq!(sum.support, 90.0);
    assert_eq!(sum.resistance, 110.0);
    assert_eq!(sum.target, 110.0);
    assert_eq!(sum.stop_loss, 90.0);
    assert_eq!(sum.recommendation, "Hold");
}

#[test]
fn high_pcr_is_strong_buy() {
    let s = snapshot(
        100.0,
        vec![
            both(95.0, (100, 20.0, 0), (250, 20.0, 0)),
            both(105.0, (100, 20.0, 0), (150, 20.0, 0)),
        ],
    );
    let sum = summarize(&s, &SignalThresholds::default()).unwrap();
    assert!(approx(sum.pcr, 2.0));
    assert_eq!(sum.bias, PcrBias::StrongBuy);
    assert_eq!(sum.recommendation, "Buy near Support");
}

#[test]
fn low_pcr_is_strong_sell() {
    let s = snapshot(
        100.0,
        vec![both(100.0, (1_000, 20.0, 0), (500, 20.0, 0))],
    );
    let sum = summarize(&s, &SignalThresholds::default()).unwrap();
    assert_eq!(sum.bias, PcrBias::StrongSell);
    assert_eq!(sum.recommendation, "Hold");
    assert_eq!(sum.bias.to_string(), "Strong Sell");
}

#[test]
fn empty_summary_is_empty_data() {
    let s = snapshot(100.0, vec![]);
    assert!(matches!(
        summarize(&s, &SignalThresholds::default()),
        Err(NseError::EmptyData { .. })
    ));
}
