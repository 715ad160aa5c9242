//! Options-chain analytics over a single [`OptionChainSnapshot`].
//!
//! Everything here is synchronous and pure: no I/O and no state kept between calls.
//! A previous result, when the caller has one, is passed back in explicitly and only
//! influences [`AnalyticsResult::signals`].
//!
//! Only quotes whose expiry equals [`OptionChainSnapshot::expiry`] are considered. A
//! quote missing a field is left out of the aggregate that needs that field.

mod max_pain;
mod model;
mod open_interest;
mod signals;
mod summary;
mod volatility;
mod volume;

pub use max_pain::{max_pain, pain_at, strike_ladder};
pub use model::{
    AnalyticsConfig, AnalyticsResult, ChainSummary, IvAnalysis, IvRankBand, OiAnalysis,
    PcrBias, Signal, SignalThresholds, StrikeOi, VolumeAnalysis,
};
pub use signals::generate as generate_signals;
pub use summary::summarize;
pub use volatility::iv_rank;

use crate::chain::{ContractQuote, OptionChainSnapshot, OptionSide};
use crate::core::NseError;

/// Analyze `snapshot` with the default thresholds and IV-rank band.
///
/// # Errors
///
/// [`NseError::EmptyData`] when the snapshot has no strikes.
pub fn analyze(
    snapshot: &OptionChainSnapshot,
    prior: Option<&AnalyticsResult>,
) -> Result<AnalyticsResult, NseError> {
    Analyzer::default().analyze(snapshot, prior)
}

/// The analytics engine with its configuration.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyticsConfig,
}

impl Analyzer {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// # Errors
    ///
    /// [`NseError::EmptyData`] when the snapshot has no strikes.
    pub fn analyze(
        &self,
        snapshot: &OptionChainSnapshot,
        prior: Option<&AnalyticsResult>,
    ) -> Result<AnalyticsResult, NseError> {
        let empty = || NseError::EmptyData {
            symbol: snapshot.symbol.clone(),
        };
        if snapshot.strikes.is_empty() {
            return Err(empty());
        }
        let max_pain = max_pain::max_pain(snapshot).ok_or_else(empty)?;

        Ok(AnalyticsResult {
            symbol: snapshot.symbol.clone(),
            spot: snapshot.spot,
            expiry: snapshot.expiry,
            oi: open_interest::analyze(snapshot),
            iv: volatility::analyze(snapshot, &self.config.iv_rank_band),
            volume: volume::analyze(snapshot),
            max_pain,
            signals: signals::generate(snapshot.spot, prior, &self.config.thresholds),
        })
    }
}

/* ---------------- shared helpers ---------------- */

/// Quotes on `side` that belong to the snapshot's expiry.
pub(crate) fn side_quotes(
    snapshot: &OptionChainSnapshot,
    side: OptionSide,
) -> impl Iterator<Item = &ContractQuote> {
    let expiry = snapshot.expiry;
    snapshot
        .strikes
        .iter()
        .filter_map(move |r| r.quote(side))
        .filter(move |q| q.expiry == expiry)
}

/// `num / den`, or 0 when `den` is 0.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

pub(crate) fn saturating_total(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0u64, u64::saturating_add)
}
