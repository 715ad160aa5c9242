use nse_options_rs::analytics::{Analyzer, generate_signals};
use nse_options_rs::{AnalyticsConfig, Signal, SignalThresholds, analyze};

use crate::common::three_strike_snapshot;

fn prior(iv_rank: f64, pcr: f64, max_pain: f64) -> nse_options_rs::AnalyticsResult {
    let mut p = analyze(&three_strike_snapshot(), None).unwrap();
    p.iv.iv_rank = iv_rank;
    p.oi.pcr = pcr;
    p.max_pain = max_pain;
    p
}

#[test]
fn no_prior_is_neutral_only() {
    let r = analyze(&three_strike_snapshot(), None).unwrap();
    assert_eq!(r.signals, vec![Signal::Neutral]);
}

#[test]
fn quiet_prior_is_neutral() {
    let p = prior(40.0, 1.0, 90.0);
    let r = analyze(&three_strike_snapshot(), Some(&p)).unwrap();
    assert_eq!(r.signals, vec![Signal::Neutral]);
}

#[test]
fn each_rule_fires_on_its_own() {
    let t = SignalThresholds::default();

    assert_eq!(
        generate_signals(100.0, Some(&prior(75.0, 1.0, 90.0)), &t),
        vec![Signal::SellPremium]
    );
    assert_eq!(
        generate_signals(100.0, Some(&prior(10.0, 1.6, 90.0)), &t),
        vec![Signal::BullishPcr]
    );
    assert_eq!(
        generate_signals(100.0, Some(&prior(10.0, 1.0, 105.0)), &t),
        vec![Signal::BelowMaxPain]
    );
}

#[test]
fn thresholds_are_strict() {
    let t = SignalThresholds::default();
    let at_edges = prior(70.0, 1.5, 100.0);
    assert_eq!(
        generate_signals(100.0, Some(&at_edges), &t),
        vec![Signal::Neutral]
    );
}

#[test]
fn all_rules_in_order() {
    let p = prior(90.0, 2.2, 120.0);
    let r = analyze(&three_strike_snapshot(), Some(&p)).unwrap();
    assert_eq!(
        r.signals,
        vec![Signal::SellPremium, Signal::BullishPcr, Signal::BelowMaxPain]
    );
    let labels: Vec<String> = r.signals.iter().map(ToString::to_string).collect();
    assert_eq!(
        labels,
        [
            "High IV Rank - Sell Options",
            "High PCR - Bullish Signal",
            "Below Max Pain - Bearish Bias"
        ]
    );
}

#[test]
fn configurable_thresholds() {
    let config = AnalyticsConfig {
        thresholds: SignalThresholds {
            iv_rank_high: 20.0,
            pcr_high: 0.9,
            ..SignalThresholds::default()
        },
        ..AnalyticsConfig::default()
    };
    let p = prior(25.0, 1.0, 90.0);
    let r = Analyzer::new(config)
        .analyze(&three_strike_snapshot(), Some(&p))
        .unwrap();
    assert_eq!(r.signals, vec![Signal::SellPremium, Signal::BullishPcr]);
}
