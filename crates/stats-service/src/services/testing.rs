//! In-memory fakes of the repository and source traits for service tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use stats_core::traits::{RepoResult, StatsRepository, TrendRepository, UserRepository};
use stats_core::value_objects::{ProfileRecord, ProfileSnapshot, SnapshotBatch, TrendSnapshot};
use stats_core::{
    DomainError, NewTrendVideo, NewUser, TrendHashtag, TrendSong, TrendVideo, User, UserStats,
    VideoSnapshot, VideoStats,
};
use stats_scraper::{ProfileSource, ScraperError, TrendSource};

use super::context::{ServiceContext, ServiceContextBuilder};

/// Backs all three repository traits with plain vectors
#[derive(Default)]
pub struct MemoryRepo {
    pub users: Mutex<Vec<User>>,
    pub stats: Mutex<Vec<UserStats>>,
    pub videos: Mutex<Vec<VideoStats>>,
    pub batches: Mutex<Vec<SnapshotBatch>>,
    pub trends: Mutex<Option<TrendSnapshot>>,
}

impl MemoryRepo {
    pub fn with_users(nicknames: &[&str]) -> Arc<Self> {
        let repo = Self::default();
        {
            let mut users = repo.users.lock().unwrap();
            for (i, nickname) in nicknames.iter().enumerate() {
                users.push(user(i as i64 + 1, nickname));
            }
        }
        Arc::new(repo)
    }

    pub fn push_stats(&self, nickname: &str, followers: i64, likes: i64, at: DateTime<Utc>) {
        let mut stats = self.stats.lock().unwrap();
        let id = stats.len() as i64 + 1;
        stats.push(UserStats {
            id,
            nickname: nickname.to_string(),
            followers,
            following: 10,
            likes,
            diggs: 3,
            created_at: at,
        });
    }

    pub fn user(&self, nickname: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.nickname == nickname)
            .cloned()
    }
}

pub fn user(id: i64, nickname: &str) -> User {
    User {
        id,
        nickname: nickname.to_string(),
        app_id: "app".to_string(),
        app_bundle: "com.example.app".to_string(),
        avatar: None,
        error: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

#[async_trait]
impl UserRepository for MemoryRepo {
    async fn find_by_nickname(&self, nickname: &str) -> RepoResult<Option<User>> {
        Ok(self.user(nickname))
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(users)
    }

    async fn create(&self, new_user: &NewUser) -> RepoResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.nickname == new_user.nickname) {
            return Err(DomainError::UserAlreadyExists(new_user.nickname.clone()));
        }
        let mut created = user(users.len() as i64 + 1, &new_user.nickname);
        created.app_id.clone_from(&new_user.app_id);
        created.app_bundle.clone_from(&new_user.app_bundle);
        users.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl StatsRepository for MemoryRepo {
    async fn find_latest(&self, nickname: &str) -> RepoResult<Option<UserStats>> {
        Ok(self
            .stats
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.nickname == nickname)
            .max_by_key(|s| s.created_at)
            .cloned())
    }

    async fn find_earliest_since(
        &self,
        nickname: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<Option<UserStats>> {
        Ok(self
            .stats
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.nickname == nickname && s.created_at >= since)
            .min_by_key(|s| s.created_at)
            .cloned())
    }

    async fn find_videos_at(
        &self,
        nickname: &str,
        captured_at: DateTime<Utc>,
    ) -> RepoResult<Vec<VideoStats>> {
        Ok(self
            .videos
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.nickname == nickname && v.created_at == captured_at)
            .cloned()
            .collect())
    }

    async fn store_batch(&self, batch: &SnapshotBatch) -> RepoResult<()> {
        for snapshot in &batch.snapshots {
            self.push_stats(
                &snapshot.nickname,
                snapshot.followers,
                snapshot.likes,
                batch.captured_at,
            );
            let mut videos = self.videos.lock().unwrap();
            for video in &snapshot.videos {
                let id = videos.len() as i64 + 1;
                videos.push(VideoStats {
                    id,
                    nickname: snapshot.nickname.clone(),
                    video_id: video.video_id.clone(),
                    views: video.views,
                    comments: video.comments,
                    diggs: video.diggs,
                    shares: video.shares,
                    cover_url: video.cover_url.clone(),
                    video_url: video.video_url.clone(),
                    created_at: batch.captured_at,
                });
            }
        }

        let mut users = self.users.lock().unwrap();
        for user in users.iter_mut() {
            if let Some(s) = batch.snapshots.iter().find(|s| s.nickname == user.nickname) {
                if s.avatar.is_some() {
                    user.avatar.clone_from(&s.avatar);
                }
                user.error = None;
            }
            if let Some(f) = batch.failures.iter().find(|f| f.nickname == user.nickname) {
                user.error = Some(f.error.clone());
            }
        }

        self.batches.lock().unwrap().push(batch.clone());
        Ok(())
    }
}

#[async_trait]
impl TrendRepository for MemoryRepo {
    async fn list_videos(&self) -> RepoResult<Vec<TrendVideo>> {
        let trends = self.trends.lock().unwrap();
        Ok(trends
            .iter()
            .flat_map(|t| t.videos.iter())
            .enumerate()
            .map(|(i, v)| TrendVideo {
                id: i as i64 + 1,
                cover_url: v.cover_url.clone(),
                views: v.views,
                description: v.description.clone(),
                video_url: v.video_url.clone(),
                created_at: Utc::now(),
            })
            .collect())
    }

    async fn list_hashtags(&self) -> RepoResult<Vec<TrendHashtag>> {
        let trends = self.trends.lock().unwrap();
        Ok(trends
            .iter()
            .flat_map(|t| t.hashtags.iter())
            .enumerate()
            .map(|(i, h)| TrendHashtag {
                id: i as i64 + 1,
                name: h.name.clone(),
                views: h.views,
                created_at: Utc::now(),
            })
            .collect())
    }

    async fn list_songs(&self) -> RepoResult<Vec<TrendSong>> {
        let trends = self.trends.lock().unwrap();
        Ok(trends
            .iter()
            .flat_map(|t| t.songs.iter())
            .enumerate()
            .map(|(i, s)| TrendSong {
                id: i as i64 + 1,
                cover_url: s.cover_url.clone(),
                song_url: s.song_url.clone(),
                title: s.title.clone(),
                author: s.author.clone(),
                created_at: Utc::now(),
            })
            .collect())
    }

    async fn replace_all(&self, snapshot: &TrendSnapshot) -> RepoResult<()> {
        *self.trends.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }
}

/// Profile source returning a fixed record list
#[derive(Default)]
pub struct ScriptedProfiles {
    pub records: Vec<ProfileRecord>,
    pub fail: bool,
    pub calls: AtomicUsize,
    pub requested: Mutex<Vec<Vec<String>>>,
}

impl ScriptedProfiles {
    pub fn returning(records: Vec<ProfileRecord>) -> Arc<Self> {
        Arc::new(Self {
            records,
            ..Self::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for ScriptedProfiles {
    async fn fetch_profiles(&self, nicknames: &[String]) -> stats_scraper::Result<Vec<ProfileRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(nicknames.to_vec());
        if self.fail {
            return Err(ScraperError::Api {
                status: 503,
                message: "vendor unavailable".to_string(),
            });
        }
        Ok(self.records.clone())
    }
}

/// Trend source returning a fixed snapshot
#[derive(Default)]
pub struct ScriptedTrends {
    pub snapshot: TrendSnapshot,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl ScriptedTrends {
    pub fn with_videos(count: usize) -> Arc<Self> {
        let videos = (0..count)
            .map(|i| NewTrendVideo {
                cover_url: format!("https://cdn.example/{i}.jpg"),
                views: 1_000 * i as i64,
                description: format!("video {i}"),
                video_url: format!("https://cdn.example/{i}.mp4"),
            })
            .collect();
        Arc::new(Self {
            snapshot: TrendSnapshot {
                videos,
                ..TrendSnapshot::default()
            },
            ..Self::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrendSource for ScriptedTrends {
    async fn fetch_trends(&self) -> stats_scraper::Result<TrendSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ScraperError::Network("connection reset".to_string()));
        }
        Ok(self.snapshot.clone())
    }
}

pub fn collected(nickname: &str, followers: i64, videos: usize) -> ProfileRecord {
    ProfileRecord::Collected(ProfileSnapshot {
        nickname: nickname.to_string(),
        avatar: Some(format!("https://cdn.example/{nickname}.jpg")),
        followers,
        following: 10,
        likes: followers * 10,
        diggs: 1,
        videos: (0..videos)
            .map(|i| VideoSnapshot {
                video_id: format!("{nickname}-{i}"),
                views: 100,
                comments: 2,
                diggs: 5,
                shares: 1,
                cover_url: String::new(),
                video_url: String::new(),
            })
            .collect(),
    })
}

/// Context over the given fakes; the Postgres pool is lazy and never used
pub fn context(
    repo: Arc<MemoryRepo>,
    profiles: Arc<ScriptedProfiles>,
    trends: Arc<ScriptedTrends>,
) -> ServiceContext {
    builder(repo, profiles, trends).build().unwrap()
}

/// Builder preloaded with the fakes and a pool that never connects
pub fn builder(
    repo: Arc<MemoryRepo>,
    profiles: Arc<ScriptedProfiles>,
    trends: Arc<ScriptedTrends>,
) -> ServiceContextBuilder {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unused")
        .unwrap();

    ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(repo.clone())
        .stats_repo(repo.clone())
        .trend_repo(repo)
        .profile_source(profiles)
        .trend_source(trends)
}
