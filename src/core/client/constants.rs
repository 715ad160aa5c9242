//! Centralized constants for default endpoints, headers and session warm-up.

use std::time::Duration;

/// Default desktop UA; the NSE edge rejects obvious non-browser agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/98.0.4758.102 Safari/537.36"
);

pub(crate) const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// NSE site root. Visiting it sets the cookies the JSON API requires.
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.nseindia.com/";

/// Option chain for single stocks (`?symbol=` is appended).
pub(crate) const PATH_OPTION_CHAIN_EQUITIES: &str = "api/option-chain-equities";

/// Option chain for indices such as NIFTY or BANKNIFTY.
pub(crate) const PATH_OPTION_CHAIN_INDICES: &str = "api/option-chain-indices";

/// Index constituents (`?index=` is appended).
pub(crate) const PATH_EQUITY_STOCK_INDICES: &str = "api/equity-stockIndices";

pub(crate) const DEFAULT_SESSION_ATTEMPTS: u32 = 5;
pub(crate) const DEFAULT_SESSION_RETRY_DELAY: Duration = Duration::from_secs(2);
