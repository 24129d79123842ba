use crossrate_engine::RateCache;

/// Shared application state accessible by all route handlers.
pub struct AppState {
    pub cache: RateCache,
    /// Snapshot age beyond which /health reports the service stale.
    pub stale_after: chrono::Duration,
}

impl AppState {
    pub fn new(cache: RateCache, stale_after: chrono::Duration) -> Self {
        Self { cache, stale_after }
    }
}
