#[cfg(feature = "test-mode")]
use std::env;

use url::Url;

use crate::core::client::{CacheMode, RetryConfig};
use crate::core::{NseClient, NseError};

/// Read the response body as text.
/// In `test-mode`, if `NSE_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("NSE_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            eprintln!("NSE_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(text)
}

/// GET a JSON endpoint with cache lookup, session warm-up and a single re-warm on 401/403.
pub(crate) async fn fetch_api_text(
    client: &NseClient,
    url: &Url,
    endpoint: &str,
    fixture_key: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<String, NseError> {
    if cache_mode == CacheMode::Use
        && let Some(body) = client.cache_get(url).await
    {
        return Ok(body);
    }

    client.ensure_session().await?;

    let req = client
        .http()
        .get(url.clone())
        .header("accept", "application/json");
    let resp = client.send_with_retry(req, retry_override).await?;

    let resp = if resp.status().is_success() {
        resp
    } else {
        let code = resp.status().as_u16();
        if code != 401 && code != 403 {
            return Err(NseError::Status {
                status: code,
                url: url.to_string(),
            });
        }

        // Cookies expired or were never accepted; warm up again and retry once.
        client.invalidate_session().await;
        client.ensure_session().await?;

        let req2 = client
            .http()
            .get(url.clone())
            .header("accept", "application/json");
        let resp2 = client.send_with_retry(req2, retry_override).await?;
        if !resp2.status().is_success() {
            return Err(NseError::Status {
                status: resp2.status().as_u16(),
                url: url.to_string(),
            });
        }
        resp2
    };

    let body = get_text(resp, endpoint, fixture_key, "json").await?;
    if cache_mode != CacheMode::Bypass {
        client.cache_put(url, &body, None).await;
    }
    Ok(body)
}
