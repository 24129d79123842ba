pub mod cache;
pub mod poller;

pub use cache::RateCache;
pub use poller::{poll_once, run_poller, PollerConfig};
