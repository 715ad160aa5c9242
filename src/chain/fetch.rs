use crate::core::client::{CacheMode, RetryConfig};
use crate::core::{NseClient, NseError, net};

use super::model::{OptionChainSnapshot, Security};
use super::wire;

/// Fetch the option chain for `security` and normalize it to the nearest expiry.
///
/// # Errors
///
/// Returns [`NseError::EmptyData`] when the provider lists no strikes, [`NseError::Data`]
/// when the payload lacks `records` or any parseable expiry, and HTTP/status errors from
/// the transport.
pub async fn fetch_snapshot(
    client: &NseClient,
    security: &Security,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<OptionChainSnapshot, NseError> {
    let mut url = client.option_chain_url(security.is_index())?;
    url.query_pairs_mut()
        .append_pair("symbol", &security.symbol);

    let endpoint = if security.is_index() {
        "option_chain_indices"
    } else {
        "option_chain_equities"
    };

    let body = net::fetch_api_text(
        client,
        &url,
        endpoint,
        &security.symbol,
        cache_mode,
        retry_override,
    )
    .await?;

    wire::parse_chain(&body, &security.symbol)
}
