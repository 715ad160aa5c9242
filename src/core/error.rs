use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NseError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The cookie warm-up against the NSE home page did not succeed.
    #[error("Session error: {0}")]
    Session(String),

    /// The option chain for the symbol contained no strikes.
    #[error("no option-chain data for {symbol}")]
    EmptyData {
        /// The symbol that was analyzed.
        symbol: String,
    },
}
