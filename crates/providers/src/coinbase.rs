use crate::{get_json, parse_price};
use async_trait::async_trait;
use chrono::Utc;
use crossrate_core::{Quote, QuoteError, QuoteSource};
use serde::Deserialize;

/// Exchange identifier reported in quotes and API responses.
pub const EXCHANGE: &str = "coinbase";

const TICKER_URL: &str = "https://api.exchange.coinbase.com/products/BTC-USD/ticker";

/// Coinbase spot ticker for BTC-USD.
///
/// The ticker publishes a single last-trade price, which stands in for
/// both sides of the trade.
pub struct Coinbase {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct Ticker {
    price: String,
}

impl Coinbase {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            url: TICKER_URL.to_string(),
        }
    }

    /// Point the adapter at a non-default endpoint.
    pub fn with_url(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuoteSource for Coinbase {
    fn exchange(&self) -> &'static str {
        EXCHANGE
    }

    async fn fetch_quote(&self) -> Result<Quote, QuoteError> {
        let ticker: Ticker = get_json(&self.client, &self.url, EXCHANGE).await?;
        let price = parse_price(EXCHANGE, "price", &ticker.price)?;
        Ok(Quote::single_price(EXCHANGE, price, Utc::now()))
    }
}
