//! Cookie warm-up for NSE endpoints.
//!
//! The JSON API answers 401/403 unless the cookie jar already holds the cookies
//! the home page hands out, so every client visits it once before its first call.

use crate::core::error::NseError;

impl super::NseClient {
    pub(crate) async fn ensure_session(&self) -> Result<(), NseError> {
        // Fast path: check if the session exists with a read lock.
        if self.state.read().await.established {
            return Ok(());
        }

        // Slow path: only one task performs the warm-up.
        let _guard = self.session_lock.lock().await;

        // Another task may have finished the warm-up while this one was waiting.
        if self.state.read().await.established {
            return Ok(());
        }

        self.warm_up().await?;
        self.state.write().await.established = true;
        Ok(())
    }

    /// Forget the session so the next call repeats the warm-up.
    pub(crate) async fn invalidate_session(&self) {
        self.state.write().await.established = false;
    }

    async fn warm_up(&self) -> Result<(), NseError> {
        let mut last_failure = String::from("no attempt made");

        for attempt in 0..self.session_attempts {
            if attempt > 0 {
                tokio::time::sleep(self.session_retry_delay).await;
            }

            match self.http.get(self.base_url.clone()).send().await {
                Ok(resp) if resp.status().is_success() => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(attempt, "NSE session established");
                    return Ok(());
                }
                Ok(resp) => {
                    last_failure = format!("status {}", resp.status().as_u16());
                }
                Err(e) => {
                    last_failure = e.to_string();
                }
            }

            #[cfg(feature = "tracing")]
            tracing::warn!(attempt, failure = %last_failure, "NSE session warm-up failed");
        }

        Err(NseError::Session(format!(
            "could not establish NSE session after {} attempts ({last_failure})",
            self.session_attempts
        )))
    }
}
