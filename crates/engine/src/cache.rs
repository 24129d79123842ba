use chrono::{DateTime, Utc};
use crossrate_core::{RatePair, RateSnapshot};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared cache of the most recent rate snapshot.
///
/// The poller is the only writer; HTTP handlers only read. The snapshot is
/// replaced wholesale under the write lock, so a reader never observes one
/// direction from an older cycle than the other.
#[derive(Clone)]
pub struct RateCache {
    inner: Arc<RwLock<RateSnapshot>>,
}

impl RateCache {
    /// Cache seeded with zero rates, served until the first poll completes.
    pub fn new(seed: RatePair) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RateSnapshot::new(seed))),
        }
    }

    /// Replace the cached pair with the result of a completed poll cycle.
    pub async fn publish(&self, pair: RatePair, at: DateTime<Utc>) {
        let mut snapshot = self.inner.write().await;
        snapshot.pair = pair;
        snapshot.updated_at = Some(at);
        snapshot.cycles += 1;
    }

    /// Copy of the current snapshot.
    pub async fn snapshot(&self) -> RateSnapshot {
        *self.inner.read().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossrate_core::CrossRate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn pair(usd_sgd: Decimal, sgd_usd: Decimal) -> RatePair {
        RatePair {
            usd_sgd: CrossRate {
                rate: usd_sgd,
                buy_exchange: "coinbase",
                sell_exchange: "coinhako",
            },
            sgd_usd: CrossRate {
                rate: sgd_usd,
                buy_exchange: "coinhako",
                sell_exchange: "coinbase",
            },
        }
    }

    #[tokio::test]
    async fn test_starts_zeroed_until_first_publish() {
        let cache = RateCache::new(RatePair::seed("coinbase", "coinhako"));
        let snapshot = cache.snapshot().await;

        assert_eq!(snapshot.pair.usd_sgd.rate, Decimal::ZERO);
        assert_eq!(snapshot.pair.sgd_usd.rate, Decimal::ZERO);
        assert_eq!(snapshot.updated_at, None);
        assert_eq!(snapshot.cycles, 0);
        // Exchange tags are present even before the first poll.
        assert_eq!(snapshot.pair.usd_sgd.buy_exchange, "coinbase");
    }

    #[tokio::test]
    async fn test_publish_replaces_pair_and_advances_bookkeeping() {
        let cache = RateCache::new(RatePair::seed("coinbase", "coinhako"));
        let at = Utc::now();

        cache.publish(pair(dec!(1.3668), dec!(0.75)), at).await;

        let snapshot = cache.snapshot().await;
        assert_eq!(snapshot.pair.usd_sgd.rate, dec!(1.3668));
        assert_eq!(snapshot.pair.sgd_usd.rate, dec!(0.75));
        assert_eq!(snapshot.updated_at, Some(at));
        assert_eq!(snapshot.cycles, 1);
    }

    #[tokio::test]
    async fn test_concurrent_reads_never_see_a_torn_pair() {
        let cache = RateCache::new(RatePair::seed("coinbase", "coinhako"));

        // Writer publishes pairs where sgd_usd is always twice usd_sgd;
        // readers check that relation on every snapshot they take.
        let writer = {
            let cache = cache.clone();
            tokio::spawn(async move {
                for i in 1..=200u32 {
                    let n = Decimal::from(i);
                    cache.publish(pair(n, n * dec!(2)), Utc::now()).await;
                }
            })
        };

        let reader = {
            let cache = cache.clone();
            tokio::spawn(async move {
                for _ in 0..200 {
                    let snapshot = cache.snapshot().await;
                    if snapshot.cycles > 0 {
                        assert_eq!(
                            snapshot.pair.sgd_usd.rate,
                            snapshot.pair.usd_sgd.rate * dec!(2)
                        );
                    }
                    tokio::task::yield_now().await;
                }
            })
        };

        writer.await.unwrap();
        reader.await.unwrap();
    }
}
