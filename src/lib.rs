//! nse-options-rs: NSE option-chain client and analytics.
//!
//! Fetches the public option chain for an NSE stock or index, normalizes it to the
//! nearest expiry and derives put/call ratios, IV skew and rank, volume ratio and the
//! max-pain strike. [`report`] renders the results as chat-sized text.
//!
//! ```no_run
//! # use nse_options_rs::{Chain, NseClient, report};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NseClient::builder().build()?;
//! let analysis = Chain::new(&client, "NIFTY").analyze(None).await?;
//! println!("{}", report::format_analysis(&analysis));
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod chain;
pub mod core;
pub mod index;
pub mod report;

pub use analytics::{
    AnalyticsConfig, AnalyticsResult, Analyzer, ChainSummary, IvAnalysis, OiAnalysis, PcrBias,
    Signal, SignalThresholds, VolumeAnalysis, analyze, summarize,
};
pub use chain::{
    Chain, ContractQuote, OptionChainSnapshot, OptionSide, Security, SecurityType, StrikeRecord,
    fetch_snapshot, snapshot_from_json,
};
pub use crate::core::{Backoff, CacheMode, NseClient, NseClientBuilder, NseError, RetryConfig};
pub use index::{ScanEntry, index_constituents, scan};
