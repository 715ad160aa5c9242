//! Max-pain strike: the settlement price that minimizes what option writers owe.
//!
//! For every candidate `k` on the strike ladder:
//!
//! ```text
//! pain(k) = Σ_{s < k} CallOI(s) · (k − s)  +  Σ_{s > k} PutOI(s) · (s − k)
//! ```
//!
//! The ladder is a few hundred strikes at most, so the direct double sum is used.

use crate::chain::{OptionChainSnapshot, OptionSide};

use super::side_quotes;

/// Ascending, de-duplicated call-side strikes; falls back to every record strike when
/// the snapshot has no call quotes for its expiry.
pub fn strike_ladder(snapshot: &OptionChainSnapshot) -> Vec<f64> {
    let mut ladder: Vec<f64> = side_quotes(snapshot, OptionSide::Call)
        .map(|q| q.strike)
        .filter(|s| s.is_finite())
        .collect();
    if ladder.is_empty() {
        ladder = snapshot
            .strikes
            .iter()
            .map(|r| r.strike)
            .filter(|s| s.is_finite())
            .collect();
    }
    ladder.sort_by(f64::total_cmp);
    ladder.dedup();
    ladder
}

/// Total writer payout if the underlying settles at `k`.
#[allow(clippy::cast_precision_loss)]
pub fn pain_at(snapshot: &OptionChainSnapshot, k: f64) -> f64 {
    let call_pain: f64 = side_quotes(snapshot, OptionSide::Call)
        .filter(|q| q.strike < k)
        .filter_map(|q| q.open_interest.map(|oi| oi as f64 * (k - q.strike)))
        .sum();
    let put_pain: f64 = side_quotes(snapshot, OptionSide::Put)
        .filter(|q| q.strike > k)
        .filter_map(|q| q.open_interest.map(|oi| oi as f64 * (q.strike - k)))
        .sum();
    call_pain + put_pain
}

/// The ladder strike with the lowest pain; the smallest strike wins a tie.
/// `None` only when the ladder is empty.
pub fn max_pain(snapshot: &OptionChainSnapshot) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for k in strike_ladder(snapshot) {
        let pain = pain_at(snapshot, k);
        match best {
            Some((_, best_pain)) if pain >= best_pain => {}
            _ => best = Some((k, pain)),
        }
    }
    best.map(|(k, _)| k)
}
