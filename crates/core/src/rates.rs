use crate::models::{CrossRate, Quote, RatePair};
use rust_decimal::Decimal;

/// Derives fee-adjusted cross rates from a USD-quoted and an SGD-quoted
/// BTC price.
///
/// A single combined fee percentage covers both venues. The fee raises the
/// effective rate the customer pays, so the raw price ratio is multiplied
/// by `1 + fee/100` in both directions:
///
/// ```text
/// usd_sgd = (sgd.sell_price / usd.buy_price) * (1 + fee/100)
/// sgd_usd = (usd.sell_price / sgd.buy_price) * (1 + fee/100)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RateCalculator {
    fee_multiplier: Decimal,
}

impl RateCalculator {
    pub fn new(fee_percent: Decimal) -> Self {
        Self {
            fee_multiplier: Decimal::ONE + fee_percent / Decimal::ONE_HUNDRED,
        }
    }

    /// Compute both directions from the same pair of quotes.
    ///
    /// USD→SGD buys BTC with USD and sells it for SGD; SGD→USD is the
    /// mirror image.
    pub fn pair(&self, usd: &Quote, sgd: &Quote) -> RatePair {
        RatePair {
            usd_sgd: CrossRate {
                rate: sgd.sell_price / usd.buy_price * self.fee_multiplier,
                buy_exchange: usd.exchange,
                sell_exchange: sgd.exchange,
            },
            sgd_usd: CrossRate {
                rate: usd.sell_price / sgd.buy_price * self.fee_multiplier,
                buy_exchange: sgd.exchange,
                sell_exchange: usd.exchange,
            },
        }
    }
}
