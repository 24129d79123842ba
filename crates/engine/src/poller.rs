use crate::cache::RateCache;
use chrono::Utc;
use crossrate_core::{QuoteError, QuoteSource, RateCalculator, RatePair};
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the poll loop.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Delay between poll cycles.
    pub interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
        }
    }
}

/// One fetch-both-and-recompute cycle.
///
/// Quotes are fetched sequentially; the first failure aborts the cycle
/// without producing a pair.
pub async fn poll_once(
    usd_source: &dyn QuoteSource,
    sgd_source: &dyn QuoteSource,
    calculator: &RateCalculator,
) -> Result<RatePair, QuoteError> {
    let usd = usd_source.fetch_quote().await?;
    let sgd = sgd_source.fetch_quote().await?;
    Ok(calculator.pair(&usd, &sgd))
}

/// Run the poll loop forever, publishing each successful cycle to the cache.
///
/// A failed cycle is logged and skipped; the cache keeps serving the last
/// good pair, and `/health` reports the growing staleness.
pub async fn run_poller(
    cache: RateCache,
    usd_source: Box<dyn QuoteSource>,
    sgd_source: Box<dyn QuoteSource>,
    calculator: RateCalculator,
    config: PollerConfig,
) {
    let mut ticker = tokio::time::interval(config.interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        match poll_once(usd_source.as_ref(), sgd_source.as_ref(), &calculator).await {
            Ok(pair) => {
                cache.publish(pair, Utc::now()).await;
                debug!(
                    usd_sgd = %pair.usd_sgd.rate,
                    sgd_usd = %pair.sgd_usd.rate,
                    "Published rates"
                );
            }
            Err(e) => {
                warn!(error = %e, "Poll cycle failed, keeping last good rates");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crossrate_core::Quote;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    struct FixedSource {
        exchange: &'static str,
        buy: Decimal,
        sell: Decimal,
    }

    #[async_trait]
    impl QuoteSource for FixedSource {
        fn exchange(&self) -> &'static str {
            self.exchange
        }

        async fn fetch_quote(&self) -> Result<Quote, QuoteError> {
            Ok(Quote {
                exchange: self.exchange,
                buy_price: self.buy,
                sell_price: self.sell,
                fetched_at: Utc::now(),
            })
        }
    }

    struct FailingSource {
        exchange: &'static str,
    }

    #[async_trait]
    impl QuoteSource for FailingSource {
        fn exchange(&self) -> &'static str {
            self.exchange
        }

        async fn fetch_quote(&self) -> Result<Quote, QuoteError> {
            Err(QuoteError::Network {
                exchange: self.exchange,
                reason: "connection refused".to_string(),
            })
        }
    }

    fn sources() -> (FixedSource, FixedSource) {
        (
            FixedSource {
                exchange: "coinbase",
                buy: dec!(50000.00),
                sell: dec!(50000.00),
            },
            FixedSource {
                exchange: "coinhako",
                buy: dec!(68000.00),
                sell: dec!(67000.00),
            },
        )
    }

    #[tokio::test]
    async fn test_poll_once_computes_the_pair() {
        let (usd, sgd) = sources();
        let calc = RateCalculator::new(dec!(2.00));

        let pair = poll_once(&usd, &sgd, &calc).await.unwrap();

        assert_eq!(pair.usd_sgd.rate, dec!(1.3668));
        assert_eq!(pair.sgd_usd.rate.round_dp(4), dec!(0.7500));
    }

    #[tokio::test]
    async fn test_poll_once_propagates_fetch_errors() {
        let (usd, _) = sources();
        let sgd = FailingSource {
            exchange: "coinhako",
        };
        let calc = RateCalculator::new(dec!(2.00));

        let err = poll_once(&usd, &sgd, &calc).await.unwrap_err();
        assert!(matches!(err, QuoteError::Network { exchange: "coinhako", .. }));
    }

    #[tokio::test]
    async fn test_failed_cycle_leaves_last_good_snapshot_untouched() {
        let cache = RateCache::new(RatePair::seed("coinbase", "coinhako"));
        let (usd, sgd) = sources();
        let calc = RateCalculator::new(dec!(2.00));

        let pair = poll_once(&usd, &sgd, &calc).await.unwrap();
        cache.publish(pair, Utc::now()).await;
        let good = cache.snapshot().await;

        // A cycle that errors never reaches publish.
        let failing = FailingSource {
            exchange: "coinbase",
        };
        assert!(poll_once(&failing, &sgd, &calc).await.is_err());

        assert_eq!(cache.snapshot().await, good);
    }
}
