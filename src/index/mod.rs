//! Index constituents and batch scans over them.

use futures::stream::{self, StreamExt};
use serde::Deserialize;

use crate::analytics::ChainSummary;
use crate::chain::Chain;
use crate::core::client::{CacheMode, RetryConfig};
use crate::core::{NseClient, NseError, net};

/// Concurrency used by [`scan`] callers that have no preference. NSE throttles
/// aggressive clients, so keep this small.
pub const DEFAULT_SCAN_CONCURRENCY: usize = 4;

/* ---------------- Public API ---------------- */

/// Symbols of the stocks in `index` (e.g. `"NIFTY 50"`), in the order NSE lists them.
///
/// # Errors
///
/// Transport and status errors, or [`NseError::Data`] for an unparseable payload.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn index_constituents(client: &NseClient, index: &str) -> Result<Vec<String>, NseError> {
    fetch_constituents(client, index, CacheMode::Use, None).await
}

pub async fn fetch_constituents(
    client: &NseClient,
    index: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<String>, NseError> {
    let mut url = client.stock_indices_url()?;
    url.query_pairs_mut().append_pair("index", index);

    let body = net::fetch_api_text(
        client,
        &url,
        "equity_stock_indices",
        index,
        cache_mode,
        retry_override,
    )
    .await?;

    parse_constituents(&body, index)
}

/// Result of one symbol in a [`scan`].
#[derive(Debug)]
pub struct ScanEntry {
    pub symbol: String,
    pub outcome: Result<ChainSummary, NseError>,
}

/// Fetch and summarize every symbol, at most `concurrency` at a time.
///
/// Entries come back in input order; a failing symbol does not stop the batch.
pub async fn scan<I, S>(client: &NseClient, symbols: I, concurrency: usize) -> Vec<ScanEntry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();

    stream::iter(symbols)
        .map(|symbol| {
            let chain = Chain::new(client, &symbol);
            async move {
                let outcome = chain.summary().await;
                #[cfg(feature = "tracing")]
                if let Err(e) = &outcome {
                    tracing::warn!(%symbol, error = %e, "scan: symbol failed");
                }
                ScanEntry { symbol, outcome }
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/* ---------------- Minimal serde mapping ---------------- */

#[derive(Deserialize)]
struct IndexEnvelope {
    data: Option<Vec<IndexRow>>,
}

#[derive(Deserialize)]
struct IndexRow {
    symbol: Option<String>,
}

fn parse_constituents(body: &str, index: &str) -> Result<Vec<String>, NseError> {
    let env: IndexEnvelope = serde_json::from_str(body)
        .map_err(|e| NseError::Data(format!("index constituents json parse: {e}")))?;

    let rows = env
        .data
        .ok_or_else(|| NseError::Data(format!("index constituents for {index}: missing data")))?;

    // The first row describes the index itself.
    Ok(rows
        .into_iter()
        .filter_map(|r| r.symbol)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(index.trim()))
        .collect())
}
