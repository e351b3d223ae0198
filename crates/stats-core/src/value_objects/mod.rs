//! Value objects - immutable types carried between the scraper, services and storage

mod delta;
mod snapshot;
mod trend;

pub use delta::{window_start, StatsDelta};
pub use snapshot::{ProfileFailure, ProfileRecord, ProfileSnapshot, SnapshotBatch, VideoSnapshot};
pub use trend::{NewTrendHashtag, NewTrendSong, NewTrendVideo, TrendSnapshot};
