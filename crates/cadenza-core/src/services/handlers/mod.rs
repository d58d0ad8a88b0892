pub mod artist_stats;
pub mod song_info;
pub mod top_songs;
pub mod trending;

pub use artist_stats::{ArtistStats, FeatureStats};
pub use song_info::SongQuery;
pub use trending::{Trending, TrendingScope};
