use crate::chain::{OptionChainSnapshot, OptionSide};

use super::model::{OiAnalysis, StrikeOi};
use super::{ratio, saturating_total, side_quotes};

pub(crate) fn analyze(snapshot: &OptionChainSnapshot) -> OiAnalysis {
    let total_call_oi = side_total(snapshot, OptionSide::Call);
    let total_put_oi = side_total(snapshot, OptionSide::Put);

    OiAnalysis {
        total_call_oi,
        total_put_oi,
        pcr: ratio(total_put_oi, total_call_oi),
        max_call_oi: max_strike(snapshot, OptionSide::Call),
        max_put_oi: max_strike(snapshot, OptionSide::Put),
    }
}

pub(crate) fn side_total(snapshot: &OptionChainSnapshot, side: OptionSide) -> u64 {
    saturating_total(side_quotes(snapshot, side).filter_map(|q| q.open_interest))
}

fn max_strike(snapshot: &OptionChainSnapshot, side: OptionSide) -> Option<StrikeOi> {
    let mut rows: Vec<StrikeOi> = side_quotes(snapshot, side)
        .filter(|q| q.strike.is_finite())
        .filter_map(|q| {
            q.open_interest.map(|oi| StrikeOi {
                strike: q.strike,
                open_interest: oi,
            })
        })
        .collect();
    // Stable sort keeps provider order among equal strikes.
    rows.sort_by(|a, b| a.strike.total_cmp(&b.strike));

    rows.into_iter().fold(None, |best, row| match best {
        Some(b) if b.open_interest >= row.open_interest => Some(b),
        _ => Some(row),
    })
}
