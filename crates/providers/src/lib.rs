//! Exchange quote adapters.
//!
//! Each adapter wraps one provider's public price endpoint behind the
//! [`QuoteSource`](crossrate_core::QuoteSource) trait: a single GET, a
//! status check, a typed JSON parse, and decimal parsing of the price
//! fields. Errors map onto the [`QuoteError`] taxonomy and propagate to
//! the poller untouched.

pub mod coinbase;
pub mod coinhako;

use crossrate_core::QuoteError;
use rust_decimal::Decimal;
use std::time::Duration;

/// Build the shared HTTP client used by all quote sources.
///
/// The timeout applies to each request end to end, so a hung provider
/// bounds one poll cycle instead of stalling the loop forever.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// GET `url` and deserialize the JSON body into `T`.
pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    exchange: &'static str,
) -> Result<T, QuoteError> {
    let response = client.get(url).send().await.map_err(|e| QuoteError::Network {
        exchange,
        reason: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(QuoteError::Status {
            exchange,
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(|e| QuoteError::Body {
        exchange,
        reason: e.to_string(),
    })?;

    serde_json::from_slice(&body).map_err(|e| QuoteError::Json {
        exchange,
        reason: e.to_string(),
    })
}

/// Parse a quoted price string into a decimal.
pub(crate) fn parse_price(
    exchange: &'static str,
    field: &'static str,
    raw: &str,
) -> Result<Decimal, QuoteError> {
    raw.parse().map_err(|_| QuoteError::InvalidPrice {
        exchange,
        field,
        value: raw.to_string(),
    })
}
