use crate::models::Quote;
use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Quote Source Trait
// ---------------------------------------------------------------------------

/// Errors that can occur while fetching a quote from an exchange.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("request to {exchange} failed: {reason}")]
    Network {
        exchange: &'static str,
        reason: String,
    },
    #[error("{exchange} returned HTTP {status}")]
    Status { exchange: &'static str, status: u16 },
    #[error("failed to read response body from {exchange}: {reason}")]
    Body {
        exchange: &'static str,
        reason: String,
    },
    #[error("malformed response from {exchange}: {reason}")]
    Json {
        exchange: &'static str,
        reason: String,
    },
    #[error("{exchange} field \"{field}\" is not a valid price: {value:?}")]
    InvalidPrice {
        exchange: &'static str,
        field: &'static str,
        value: String,
    },
}

/// A read-only price feed for one exchange.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Stable identifier for the exchange (e.g. "coinbase").
    fn exchange(&self) -> &'static str;

    /// Fetch the current quote. No retries; errors propagate to the caller.
    async fn fetch_quote(&self) -> Result<Quote, QuoteError>;
}
