//! Trending list cache.

mod trend_cache;

pub use trend_cache::{TrendCache, TrendKind, TREND_GENERATION_KEY, TREND_KEY_PREFIX};
