//! Freshly scraped trending rows, prior to insertion

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrendVideo {
    pub cover_url: String,
    pub views: i64,
    pub description: String,
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrendHashtag {
    pub name: String,
    pub views: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrendSong {
    pub cover_url: String,
    pub song_url: String,
    pub title: String,
    pub author: String,
}

/// Full replacement content for the three trend tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendSnapshot {
    pub videos: Vec<NewTrendVideo>,
    pub hashtags: Vec<NewTrendHashtag>,
    pub songs: Vec<NewTrendSong>,
}

impl TrendSnapshot {
    pub fn len(&self) -> usize {
        self.videos.len() + self.hashtags.len() + self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
