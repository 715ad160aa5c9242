use crate::chain::{OptionChainSnapshot, OptionSide};

use super::model::{IvAnalysis, IvRankBand};
use super::side_quotes;

pub(crate) fn analyze(snapshot: &OptionChainSnapshot, band: &IvRankBand) -> IvAnalysis {
    let call_ivs = side_ivs(snapshot, OptionSide::Call);
    let put_ivs = side_ivs(snapshot, OptionSide::Put);

    let mean_call_iv = mean(&call_ivs);
    let mean_put_iv = mean(&put_ivs);

    let combined: Vec<f64> = call_ivs.iter().chain(put_ivs.iter()).copied().collect();

    IvAnalysis {
        mean_call_iv,
        mean_put_iv,
        iv_skew: mean_put_iv - mean_call_iv,
        iv_rank: iv_rank(mean(&combined), band),
    }
}

/// Linear map of `mean_iv` from `[floor, ceiling]` onto `[0, 100]`, clamped.
pub fn iv_rank(mean_iv: f64, band: &IvRankBand) -> f64 {
    let span = band.ceiling - band.floor;
    if span <= 0.0 {
        return if mean_iv >= band.ceiling { 100.0 } else { 0.0 };
    }
    let rank = (mean_iv - band.floor) / span * 100.0;
    if rank.is_nan() {
        return 0.0;
    }
    rank.clamp(0.0, 100.0)
}

fn side_ivs(snapshot: &OptionChainSnapshot, side: OptionSide) -> Vec<f64> {
    side_quotes(snapshot, side)
        .filter_map(|q| q.implied_volatility)
        .filter(|iv| iv.is_finite() && *iv >= 0.0)
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
