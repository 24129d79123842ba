use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use crossrate_core::{CrossRate, RateSnapshot};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rate", get(get_rate))
        .route("/health", get(health_check))
}

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

/// One direction of the pair, with the rate formatted to four decimal
/// places the way downstream consumers expect.
#[derive(Debug, Serialize)]
struct DirectionalRate {
    rate: String,
    buy_exchange: &'static str,
    sell_exchange: &'static str,
}

impl From<&CrossRate> for DirectionalRate {
    fn from(cross: &CrossRate) -> Self {
        Self {
            rate: format!("{:.4}", cross.rate),
            buy_exchange: cross.buy_exchange,
            sell_exchange: cross.sell_exchange,
        }
    }
}

#[derive(Debug, Serialize)]
struct RateResponse {
    #[serde(rename = "USDSGD")]
    usd_sgd: DirectionalRate,
    #[serde(rename = "SGDUSD")]
    sgd_usd: DirectionalRate,
}

/// Serves whatever the cache holds; before the first poll that is the
/// zero-valued seed pair.
async fn get_rate(State(state): State<Arc<AppState>>) -> Json<RateResponse> {
    let snapshot = state.cache.snapshot().await;
    Json(RateResponse {
        usd_sgd: (&snapshot.pair.usd_sgd).into(),
        sgd_usd: (&snapshot.pair.sgd_usd).into(),
    })
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    cycles: u64,
    last_updated: Option<DateTime<Utc>>,
    stale: bool,
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snapshot = state.cache.snapshot().await;
    Json(health_from(&snapshot, state.stale_after, Utc::now()))
}

/// Stale when no poll has completed yet or the snapshot has outlived the
/// configured threshold.
fn health_from(
    snapshot: &RateSnapshot,
    stale_after: chrono::Duration,
    now: DateTime<Utc>,
) -> HealthResponse {
    let stale = match snapshot.updated_at {
        Some(at) => now - at > stale_after,
        None => true,
    };
    HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cycles: snapshot.cycles,
        last_updated: snapshot.updated_at,
        stale,
    }
}
