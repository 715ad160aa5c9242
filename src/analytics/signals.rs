use super::model::{AnalyticsResult, Signal, SignalThresholds};

/// Compare the current spot with the caller's prior result.
///
/// Without a prior, or when no rule fires, the output is `[Signal::Neutral]`.
pub fn generate(
    spot: f64,
    prior: Option<&AnalyticsResult>,
    thresholds: &SignalThresholds,
) -> Vec<Signal> {
    let mut signals = Vec::new();

    if let Some(prior) = prior {
        if prior.iv.iv_rank > thresholds.iv_rank_high {
            signals.push(Signal::SellPremium);
        }
        if prior.oi.pcr > thresholds.pcr_high {
            signals.push(Signal::BullishPcr);
        }
        if spot < prior.max_pain {
            signals.push(Signal::BelowMaxPain);
        }
    }

    if signals.is_empty() {
        signals.push(Signal::Neutral);
    }
    signals
}
