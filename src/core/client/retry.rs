use std::time::Duration;

use rand::Rng;

use crate::core::NseError;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

impl Backoff {
    /// Delay before retry number `attempt` (0-based).
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exp = factor.powi(i32::try_from(attempt).unwrap_or(i32::MAX));
                let mut secs = (base.as_secs_f64() * exp).min(max.as_secs_f64());
                if *jitter {
                    secs *= rand::rng().random_range(0.5..1.5);
                }
                Duration::from_secs_f64(secs.clamp(0.0, max.as_secs_f64()))
            }
        }
    }
}

/// Configuration for the automatic retry mechanism.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 4,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(3),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

impl RetryConfig {
    /// A policy that sends each request exactly once.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn should_retry_error(&self, e: &reqwest::Error) -> bool {
        (self.retry_on_timeout && e.is_timeout()) || (self.retry_on_connect && e.is_connect())
    }
}

/// Defines the behavior of the in-memory cache for an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise, fetch from the network
    /// and write the response to the cache. (Default)
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write the new response to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

impl super::NseClient {
    /// Send a request, retrying transient failures according to `override_cfg`
    /// or the client's default policy.
    ///
    /// A response with a non-retryable status is returned as-is; callers map it.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        override_cfg: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, NseError> {
        let cfg = override_cfg.unwrap_or(&self.retry);
        let mut attempt: u32 = 0;

        loop {
            // Bodies here are always empty GETs, so cloning cannot fail in practice.
            let this_req = req
                .try_clone()
                .ok_or_else(|| NseError::Data("request body is not cloneable".into()))?;

            let can_retry = cfg.enabled && attempt < cfg.max_retries;

            match this_req.send().await {
                Ok(resp) => {
                    let code = resp.status().as_u16();
                    if can_retry && cfg.retry_on_status.contains(&code) {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(status = code, attempt, "retrying on status");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(e) => {
                    if can_retry && cfg.should_retry_error(&e) {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(error = %e, attempt, "retrying on transport error");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(NseError::Http(e));
                }
            }
        }
    }
}
