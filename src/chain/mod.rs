//! Option-chain data model, provider mapping and fetch.

mod fetch;
mod model;
mod wire;

pub use fetch::fetch_snapshot;
pub use model::{
    ContractQuote, OptionChainSnapshot, OptionSide, Security, SecurityType, StrikeRecord,
};

use crate::analytics::{self, AnalyticsConfig, AnalyticsResult, ChainSummary};
use crate::core::client::{CacheMode, RetryConfig};
use crate::core::{NseClient, NseError};

/// Parse a raw NSE option-chain payload into a snapshot for the nearest expiry.
///
/// Useful when the payload was obtained elsewhere (a recorded fixture, another HTTP stack).
///
/// # Errors
///
/// Same conditions as [`fetch_snapshot`], minus the transport failures.
pub fn snapshot_from_json(body: &str, symbol: &str) -> Result<OptionChainSnapshot, NseError> {
    wire::parse_chain(body, &symbol.trim().to_uppercase())
}

/// A handle on one underlying's option chain.
///
/// # Example
///
/// ```no_run
/// # use nse_options_rs::{Chain, NseClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = NseClient::builder().build()?;
/// let chain = Chain::new(&client, "reliance");
///
/// let first = chain.analyze(None).await?;
/// // Feed the previous result back in to get comparative signals.
/// let second = chain.analyze(Some(&first)).await?;
/// println!("{:?}", second.signals);
/// # Ok(())
/// # }
/// ```
pub struct Chain {
    client: NseClient,
    security: Security,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
    config: AnalyticsConfig,
}

impl Chain {
    /// Creates a handle, choosing the equities or indices endpoint from the symbol.
    pub fn new(client: &NseClient, symbol: impl AsRef<str>) -> Self {
        Self::for_security(client, Security::parse(symbol))
    }

    pub fn for_security(client: &NseClient, security: Security) -> Self {
        Self {
            client: client.clone(),
            security,
            cache_mode: CacheMode::Use,
            retry_override: None,
            config: AnalyticsConfig::default(),
        }
    }

    /// Sets the cache mode for all subsequent API calls made by this handle.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the client's default retry policy for this handle.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Thresholds and IV-rank calibration used by [`Chain::analyze`] and [`Chain::summary`].
    #[must_use]
    pub fn analytics_config(mut self, config: AnalyticsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn security(&self) -> &Security {
        &self.security
    }

    /// Fetches the nearest-expiry snapshot.
    ///
    /// # Errors
    ///
    /// See [`fetch_snapshot`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.security.symbol)))]
    pub async fn snapshot(&self) -> Result<OptionChainSnapshot, NseError> {
        fetch_snapshot(
            &self.client,
            &self.security,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Fetches the chain and runs the analytics engine over it.
    ///
    /// `prior` is the caller's previous result for this symbol, if any. It only affects
    /// `signals`.
    ///
    /// # Errors
    ///
    /// Fetch errors, or [`NseError::EmptyData`] when the chain has no strikes.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, prior), err, fields(symbol = %self.security.symbol)))]
    pub async fn analyze(
        &self,
        prior: Option<&AnalyticsResult>,
    ) -> Result<AnalyticsResult, NseError> {
        let snapshot = self.snapshot().await?;
        analytics::Analyzer::new(self.config.clone()).analyze(&snapshot, prior)
    }

    /// Fetches the chain and builds the short PCR / support / resistance summary.
    ///
    /// # Errors
    ///
    /// Fetch errors, or [`NseError::EmptyData`] when the chain has no strikes.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.security.symbol)))]
    pub async fn summary(&self) -> Result<ChainSummary, NseError> {
        let snapshot = self.snapshot().await?;
        analytics::summarize(&snapshot, &self.config.thresholds)
    }
}
