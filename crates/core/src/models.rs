use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

/// A price quote obtained from one exchange during a poll cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Stable exchange identifier (e.g. "coinbase").
    pub exchange: &'static str,
    /// Price at which the exchange sells BTC to the customer.
    pub buy_price: Decimal,
    /// Price at which the exchange buys BTC from the customer.
    pub sell_price: Decimal,
    pub fetched_at: DateTime<Utc>,
}

impl Quote {
    /// Quote from a provider that publishes one price for both sides.
    pub fn single_price(exchange: &'static str, price: Decimal, fetched_at: DateTime<Utc>) -> Self {
        Self {
            exchange,
            buy_price: price,
            sell_price: price,
            fetched_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Cross rates
// ---------------------------------------------------------------------------

/// One direction of the derived cross rate, tagged with the exchange
/// contributing each side of the trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrossRate {
    pub rate: Decimal,
    /// Exchange on which BTC is bought with the source currency.
    pub buy_exchange: &'static str,
    /// Exchange on which BTC is sold for the target currency.
    pub sell_exchange: &'static str,
}

/// Both directions of the cross rate, derived from the same pair of quotes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatePair {
    pub usd_sgd: CrossRate,
    pub sgd_usd: CrossRate,
}

impl RatePair {
    /// Zero-valued pair carrying the exchange tags, served until the first
    /// poll cycle completes.
    pub fn seed(usd_exchange: &'static str, sgd_exchange: &'static str) -> Self {
        Self {
            usd_sgd: CrossRate {
                rate: Decimal::ZERO,
                buy_exchange: usd_exchange,
                sell_exchange: sgd_exchange,
            },
            sgd_usd: CrossRate {
                rate: Decimal::ZERO,
                buy_exchange: sgd_exchange,
                sell_exchange: usd_exchange,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The cached value served over HTTP: the latest pair plus freshness
/// bookkeeping.
///
/// `updated_at` stays `None` until the first successful poll; the pair is
/// always internally consistent (both directions from the same cycle).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateSnapshot {
    pub pair: RatePair,
    pub updated_at: Option<DateTime<Utc>>,
    /// Completed poll cycles since startup.
    pub cycles: u64,
}

impl RateSnapshot {
    pub fn new(seed: RatePair) -> Self {
        Self {
            pair: seed,
            updated_at: None,
            cycles: 0,
        }
    }
}
