use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A strike together with the open interest on one side of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeOi {
    pub strike: f64,
    pub open_interest: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OiAnalysis {
    pub total_call_oi: u64,
    pub total_put_oi: u64,
    /// `total_put_oi / total_call_oi`, or 0 when there is no call OI.
    pub pcr: f64,
    /// Strike carrying the most call OI; the lowest strike wins a tie.
    pub max_call_oi: Option<StrikeOi>,
    /// Strike carrying the most put OI; the lowest strike wins a tie.
    pub max_put_oi: Option<StrikeOi>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvAnalysis {
    pub mean_call_iv: f64,
    pub mean_put_iv: f64,
    /// `mean_put_iv - mean_call_iv`.
    pub iv_skew: f64,
    /// Combined mean IV mapped linearly from the calibration band onto 0..=100.
    ///
    /// This is a fixed two-point calibration (20% → 0, 40% → 100 by default), not a
    /// percentile against the symbol's own IV history.
    pub iv_rank: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAnalysis {
    pub total_call_volume: u64,
    pub total_put_volume: u64,
    /// `total_put_volume / total_call_volume`, or 0 when there is no call volume.
    pub volume_pcr: f64,
}

/// Market-bias label derived from a prior result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// Prior IV rank above the high threshold.
    SellPremium,
    /// Prior put/call ratio above the high threshold.
    BullishPcr,
    /// Current spot below the prior max-pain strike.
    BelowMaxPain,
    /// Nothing triggered, or there was no prior result.
    Neutral,
}

impl Signal {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SellPremium => "High IV Rank - Sell Options",
            Self::BullishPcr => "High PCR - Bullish Signal",
            Self::BelowMaxPain => "Below Max Pain - Bearish Bias",
            Self::Neutral => "Neutral Market",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of [`crate::analytics::analyze`] for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    pub symbol: String,
    pub spot: f64,
    pub expiry: NaiveDate,
    pub oi: OiAnalysis,
    pub iv: IvAnalysis,
    pub volume: VolumeAnalysis,
    /// Strike at which option writers pay out the least at expiry.
    pub max_pain: f64,
    /// Never empty; [`Signal::Neutral`] alone when nothing triggered.
    pub signals: Vec<Signal>,
}

/// Put/call-ratio bias used by the one-line chain summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PcrBias {
    StrongBuy,
    StrongSell,
    Neutral,
}

impl fmt::Display for PcrBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StrongBuy => "Strong Buy",
            Self::StrongSell => "Strong Sell",
            Self::Neutral => "Neutral",
        })
    }
}

/// Compact view of a chain: OI put/call ratio plus the strike range as support/resistance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSummary {
    pub symbol: String,
    pub spot: f64,
    pub pcr: f64,
    pub bias: PcrBias,
    /// Lowest listed strike.
    pub support: f64,
    /// Highest listed strike.
    pub resistance: f64,
    pub target: f64,
    pub stop_loss: f64,
    pub recommendation: String,
}

/// Thresholds for the heuristic signal rules. These are tuning knobs, not invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    /// Prior IV rank above this emits [`Signal::SellPremium`].
    pub iv_rank_high: f64,
    /// PCR above this is bullish ([`Signal::BullishPcr`], [`PcrBias::StrongBuy`]).
    pub pcr_high: f64,
    /// PCR below this is [`PcrBias::StrongSell`].
    pub pcr_low: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            iv_rank_high: 70.0,
            pcr_high: 1.5,
            pcr_low: 0.7,
        }
    }
}

/// IV levels (percent) mapped to rank 0 and rank 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvRankBand {
    pub floor: f64,
    pub ceiling: f64,
}

impl Default for IvRankBand {
    fn default() -> Self {
        Self {
            floor: 20.0,
            ceiling: 40.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub thresholds: SignalThresholds,
    pub iv_rank_band: IvRankBand,
}
