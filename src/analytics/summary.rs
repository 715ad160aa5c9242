use crate::chain::{OptionChainSnapshot, OptionSide};
use crate::core::NseError;

use super::model::{ChainSummary, PcrBias, SignalThresholds};
use super::open_interest::side_total;
use super::ratio;

/// One-line view of a chain: OI put/call ratio, a bias from it, and the listed strike
/// range as support/resistance.
///
/// # Errors
///
/// [`NseError::EmptyData`] when the snapshot has no finite strikes.
pub fn summarize(
    snapshot: &OptionChainSnapshot,
    thresholds: &SignalThresholds,
) -> Result<ChainSummary, NseError> {
    let empty = || NseError::EmptyData {
        symbol: snapshot.symbol.clone(),
    };

    let mut strikes = snapshot
        .strikes
        .iter()
        .map(|r| r.strike)
        .filter(|s| s.is_finite());
    let first = strikes.next().ok_or_else(empty)?;
    let (support, resistance) = strikes.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));

    let pcr = ratio(
        side_total(snapshot, OptionSide::Put),
        side_total(snapshot, OptionSide::Call),
    );

    let bias = if pcr > thresholds.pcr_high {
        PcrBias::StrongBuy
    } else if pcr < thresholds.pcr_low {
        PcrBias::StrongSell
    } else {
        PcrBias::Neutral
    };

    let recommendation = match bias {
        PcrBias::StrongBuy => "Buy near Support",
        PcrBias::StrongSell | PcrBias::Neutral => "Hold",
    };

    Ok(ChainSummary {
        symbol: snapshot.symbol.clone(),
        spot: snapshot.spot,
        pcr,
        bias,
        support,
        resistance,
        target: resistance,
        stop_loss: support,
        recommendation: recommendation.to_string(),
    })
}
