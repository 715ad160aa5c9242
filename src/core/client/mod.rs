//! Public client surface + builder.
//! Internals are split into `session` (cookie warm-up), `retry` and `constants` (UA + defaults).

mod constants;
mod retry;
mod session;

use crate::core::NseError;
use constants::{
    ACCEPT_LANGUAGE, DEFAULT_BASE_URL, DEFAULT_SESSION_ATTEMPTS, DEFAULT_SESSION_RETRY_DELAY,
    PATH_EQUITY_STOCK_INDICES, PATH_OPTION_CHAIN_EQUITIES, PATH_OPTION_CHAIN_INDICES, USER_AGENT,
};
use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use url::Url;

pub use retry::{Backoff, CacheMode, RetryConfig};

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

#[derive(Debug, Default)]
struct SessionState {
    established: bool,
}

/// Async client for the NSE public JSON API.
///
/// Clones share the HTTP pool, cookie jar, session state and cache.
#[derive(Debug, Clone)]
pub struct NseClient {
    http: Client,
    base_url: Url,
    retry: RetryConfig,

    session_attempts: u32,
    session_retry_delay: Duration,
    state: Arc<RwLock<SessionState>>,
    session_lock: Arc<Mutex<()>>,

    cache: Option<Arc<CacheStore>>,
}

impl NseClient {
    /// Create a new builder.
    pub fn builder() -> NseClientBuilder {
        NseClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn option_chain_url(&self, is_index: bool) -> Result<Url, NseError> {
        let path = if is_index {
            PATH_OPTION_CHAIN_INDICES
        } else {
            PATH_OPTION_CHAIN_EQUITIES
        };
        Ok(self.base_url.join(path)?)
    }

    pub(crate) fn stock_indices_url(&self) -> Result<Url, NseError> {
        Ok(self.base_url.join(PATH_EQUITY_STOCK_INDICES)?)
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Drop every cached response.
    pub async fn clear_cache(&self) {
        if let Some(store) = &self.cache {
            store.map.write().await.clear();
        }
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl_override: Option<Duration>) {
        let Some(store) = &self.cache else {
            return;
        };
        let ttl = ttl_override.unwrap_or(store.default_ttl);
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: Instant::now() + ttl,
        };
        store.map.write().await.insert(url.as_str().to_string(), entry);
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NseClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    retry: Option<RetryConfig>,
    session_attempts: Option<u32>,
    session_retry_delay: Option<Duration>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl NseClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the site root (e.g., `https://www.nseindia.com/`). API paths are joined onto it,
    /// so keep the trailing slash.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Default retry policy for API calls.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// How many times to try the home-page warm-up before giving up. Default: 5.
    #[must_use]
    pub fn session_attempts(mut self, n: u32) -> Self {
        self.session_attempts = Some(n);
        self
    }

    /// Pause between warm-up attempts. Default: 2s.
    #[must_use]
    pub fn session_retry_delay(mut self, dur: Duration) -> Self {
        self.session_retry_delay = Some(dur);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled.
    #[must_use]
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// # Errors
    ///
    /// Fails if the default base URL does not parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<NseClient, NseError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        let referer = HeaderValue::from_str(base_url.as_str())
            .map_err(|e| NseError::Data(format!("invalid referer header: {e}")))?;
        headers.insert(header::REFERER, referer);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers)
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NseClient {
            http,
            base_url,
            retry: self.retry.unwrap_or_default(),
            session_attempts: self
                .session_attempts
                .unwrap_or(DEFAULT_SESSION_ATTEMPTS)
                .max(1),
            session_retry_delay: self
                .session_retry_delay
                .unwrap_or(DEFAULT_SESSION_RETRY_DELAY),
            state: Arc::new(RwLock::new(SessionState::default())),
            session_lock: Arc::new(Mutex::new(())),
            cache: self.cache_ttl.map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    default_ttl: ttl,
                })
            }),
        })
    }
}
