//! Domain entities - core business objects

mod stats;
mod trend;
mod user;

pub use stats::{UserStats, VideoStats};
pub use trend::{TrendHashtag, TrendSong, TrendVideo};
pub use user::{profile_url, NewUser, User, MAX_FIELD_LEN};
