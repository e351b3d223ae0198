//! Vendor payload shapes and their conversion into snapshot types.
//!
//! All shapes are deserialized after `normalize_keys`.

use serde::{Deserialize, Serialize};
use stats_core::value_objects::{
    NewTrendHashtag, NewTrendSong, NewTrendVideo, ProfileFailure, ProfileRecord, ProfileSnapshot,
    VideoSnapshot,
};

/// Extract `nick` from `https://www.tiktok.com/@nick[/...][?...]`
pub fn nickname_from_profile_url(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("/@")?;
    let nickname = rest.split(['/', '?', '#']).next()?.trim();
    (!nickname.is_empty()).then(|| nickname.to_string())
}

// --- BrightData dataset API ---

/// One element of the trigger request body
#[derive(Debug, Clone, Serialize)]
pub struct TriggerInput {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriggerResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordInput {
    #[serde(default)]
    pub url: Option<String>,
}

/// A profile record from a BrightData snapshot.
///
/// With `include_errors=true` failed inputs come back in the same list,
/// carrying `error`/`error_code` and the original `input`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrightDataRecord {
    pub account_id: Option<String>,
    pub followers: Option<i64>,
    pub following: Option<i64>,
    pub likes: Option<i64>,
    pub digg_count: Option<i64>,
    pub profile_pic_url: Option<String>,
    #[serde(default)]
    pub top_videos: Vec<BrightDataVideo>,
    pub error: Option<String>,
    pub error_code: Option<String>,
    pub input: Option<RecordInput>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrightDataVideo {
    pub video_id: String,
    pub playcount: Option<i64>,
    pub commentcount: Option<i64>,
    pub diggcount: Option<i64>,
    pub share_count: Option<i64>,
    pub cover_image: Option<String>,
    pub video_url: Option<String>,
}

impl BrightDataRecord {
    /// Nickname this record belongs to, from the account or the submitted URL
    pub fn nickname(&self) -> Option<String> {
        self.account_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ToString::to_string)
            .or_else(|| {
                self.input
                    .as_ref()
                    .and_then(|input| input.url.as_deref())
                    .or(self.url.as_deref())
                    .and_then(nickname_from_profile_url)
            })
    }

    fn failure_message(&self) -> Option<String> {
        match (&self.error_code, &self.error) {
            (Some(code), Some(error)) => Some(format!("{code}: {error}")),
            (None, Some(error)) => Some(error.clone()),
            (Some(code), None) => Some(code.clone()),
            (None, None) => None,
        }
    }

    /// Convert into a record, or `None` if the nickname cannot be determined
    pub fn into_record(self) -> Option<ProfileRecord> {
        let nickname = self.nickname()?;
        if let Some(message) = self.failure_message() {
            return Some(ProfileRecord::Failed(ProfileFailure::new(nickname, message)));
        }

        let videos = self
            .top_videos
            .into_iter()
            .map(|video| VideoSnapshot {
                video_id: video.video_id,
                views: video.playcount.unwrap_or_default(),
                comments: video.commentcount.unwrap_or_default(),
                diggs: video.diggcount.unwrap_or_default(),
                shares: video.share_count.unwrap_or_default(),
                cover_url: video.cover_image.unwrap_or_default(),
                video_url: video.video_url.unwrap_or_default(),
            })
            .collect();

        Some(ProfileRecord::Collected(ProfileSnapshot {
            nickname,
            avatar: self.profile_pic_url.filter(|url| !url.is_empty()),
            followers: self.followers.unwrap_or_default(),
            following: self.following.unwrap_or_default(),
            likes: self.likes.unwrap_or_default(),
            diggs: self.digg_count.unwrap_or_default(),
            videos,
        }))
    }
}

// --- TikTok scraping API ---

/// `GET /user/info` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub user_info: UserInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub user: UserInfoUser,
    pub stats: UserInfoStats,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoUser {
    pub avatar_medium: Option<String>,
    pub unique_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoStats {
    pub follower_count: i64,
    pub following_count: i64,
    pub heart_count: i64,
    pub video_count: i64,
    pub digg_count: i64,
}

/// One item of `GET /user/posts`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostItem {
    pub id: String,
    pub play_count: i64,
    pub comment_count: i64,
    pub digg_count: i64,
    pub share_count: i64,
    #[serde(default)]
    pub media_urls: Vec<String>,
    pub video_meta: PostVideoMeta,
    pub author_meta: PostAuthorMeta,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostVideoMeta {
    pub original_cover_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostAuthorMeta {
    pub name: String,
}

impl From<PostItem> for VideoSnapshot {
    fn from(item: PostItem) -> Self {
        VideoSnapshot {
            video_id: item.id,
            views: item.play_count,
            comments: item.comment_count,
            diggs: item.digg_count,
            shares: item.share_count,
            cover_url: item.video_meta.original_cover_url,
            video_url: item.media_urls.into_iter().next().unwrap_or_default(),
        }
    }
}

impl UserInfoResponse {
    /// Combine profile info with the posts authored by this profile
    pub fn into_snapshot(self, nickname: &str, posts: Vec<PostItem>) -> ProfileSnapshot {
        let UserInfo { user, stats } = self.user_info;
        let videos = posts
            .into_iter()
            .filter(|post| post.author_meta.name.eq_ignore_ascii_case(nickname))
            .map(VideoSnapshot::from)
            .collect();

        ProfileSnapshot {
            nickname: nickname.to_string(),
            avatar: user.avatar_medium.filter(|url| !url.is_empty()),
            followers: stats.follower_count,
            following: stats.following_count,
            likes: stats.heart_count,
            diggs: stats.digg_count,
            videos,
        }
    }
}

/// List endpoints answer either with a bare array or wrapped in `data`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

// --- Trending lists ---

#[derive(Debug, Clone, Deserialize)]
pub struct TrendVideoItem {
    #[serde(default)]
    pub desc: String,
    pub share_url: String,
    pub statistics: TrendVideoStatistics,
    pub video: TrendVideoMedia,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendVideoStatistics {
    pub play_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendVideoMedia {
    pub cover: TrendVideoCover,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendVideoCover {
    #[serde(default)]
    pub url_list: Vec<String>,
}

impl From<TrendVideoItem> for NewTrendVideo {
    fn from(item: TrendVideoItem) -> Self {
        NewTrendVideo {
            cover_url: item.video.cover.url_list.into_iter().next().unwrap_or_default(),
            views: item.statistics.play_count,
            description: item.desc,
            video_url: item.share_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendHashtagItem {
    pub hashtag_name: String,
    pub video_views: i64,
}

impl From<TrendHashtagItem> for NewTrendHashtag {
    fn from(item: TrendHashtagItem) -> Self {
        NewTrendHashtag {
            name: item.hashtag_name,
            views: item.video_views,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendSongItem {
    pub cover: String,
    pub link: String,
    pub title: String,
    pub author: String,
}

impl From<TrendSongItem> for NewTrendSong {
    fn from(item: TrendSongItem) -> Self {
        NewTrendSong {
            cover_url: item.cover,
            song_url: item.link,
            title: item.title,
            author: item.author,
        }
    }
}
