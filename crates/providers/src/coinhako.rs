use crate::{get_json, parse_price};
use async_trait::async_trait;
use chrono::Utc;
use crossrate_core::{Quote, QuoteError, QuoteSource};
use serde::Deserialize;

/// Exchange identifier reported in quotes and API responses.
pub const EXCHANGE: &str = "coinhako";

const PRICE_URL: &str = "https://coinhako.com/api/v1/price/currency/BTCSGD";

/// Coinhako BTC-SGD price endpoint.
///
/// Publishes separate buy and sell prices nested under a `data` object.
pub struct Coinhako {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct PriceResponse {
    data: PriceData,
}

#[derive(Debug, Deserialize)]
struct PriceData {
    buy_price: String,
    sell_price: String,
}

impl Coinhako {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            url: PRICE_URL.to_string(),
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
impl QuoteSource for Coinhako {
    fn exchange(&self) -> &'static str {
        EXCHANGE
    }

    async fn fetch_quote(&self) -> Result<Quote, QuoteError> {
        let response: PriceResponse = get_json(&self.client, &self.url, EXCHANGE).await?;
        let buy_price = parse_price(EXCHANGE, "buy_price", &response.data.buy_price)?;
        let sell_price = parse_price(EXCHANGE, "sell_price", &response.data.sell_price)?;
        Ok(Quote {
            exchange: EXCHANGE,
            buy_price,
            sell_price,
            fetched_at: Utc::now(),
        })
    }
}
