//! In-process stand-in for the synchronous TikTok scraping API
//!
//! Every nickname resolves to a profile with fixed counters and one video,
//! except nicknames starting with `missing`, which get a 404.

use std::collections::HashMap;
use std::net::SocketAddr;

use anyhow::Result;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const MOCK_FOLLOWERS: i64 = 1_200;
pub const MOCK_TREND_VIDEOS: usize = 2;

fn unique_id(query: &HashMap<String, String>) -> String {
    query.get("uniqueId").cloned().unwrap_or_default()
}

async fn user_info(Query(query): Query<HashMap<String, String>>) -> Response {
    let nickname = unique_id(&query);
    if nickname.starts_with("missing") {
        return (StatusCode::NOT_FOUND, "user not found").into_response();
    }
    Json(json!({
        "userInfo": {
            "user": { "avatarMedium": format!("https://cdn.example.com/{nickname}.jpg"), "uniqueId": nickname },
            "stats": {
                "followerCount": MOCK_FOLLOWERS,
                "followingCount": 12,
                "heartCount": 30_000,
                "videoCount": 1,
                "diggCount": 7
            }
        }
    }))
    .into_response()
}

async fn user_posts(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let nickname = unique_id(&query);
    Json(json!({ "data": [{
        "id": format!("{nickname}-v1"),
        "playCount": 500,
        "commentCount": 4,
        "diggCount": 40,
        "shareCount": 2,
        "mediaUrls": [format!("https://cdn.example.com/{nickname}/v1.mp4")],
        "videoMeta": { "originalCoverUrl": format!("https://cdn.example.com/{nickname}/v1.jpg") },
        "authorMeta": { "name": nickname }
    }]}))
}

async fn trending_videos() -> Json<Value> {
    let videos: Vec<Value> = (0..MOCK_TREND_VIDEOS)
        .map(|i| {
            json!({
                "desc": format!("trend {i}"),
                "share_url": format!("https://www.tiktok.com/@x/video/{i}"),
                "statistics": { "play_count": 10_000 + i },
                "video": { "cover": { "url_list": [format!("https://cdn.example.com/t{i}.jpg")] } }
            })
        })
        .collect();
    Json(Value::Array(videos))
}

fn router() -> Router {
    Router::new()
        .route("/user/info", get(user_info))
        .route("/user/posts", get(user_posts))
        .route("/trending/videos", get(trending_videos))
        .route(
            "/trending/hashtags",
            get(|| async { Json(json!([{ "hashtag_name": "fyp", "video_views": 99 }])) }),
        )
        .route(
            "/trending/songs",
            get(|| async {
                Json(json!([{ "cover": "c", "link": "l", "title": "t", "author": "a" }]))
            }),
        )
}

/// Serve the mock on an ephemeral port and return its address
pub async fn spawn_mock_vendor() -> Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router()).await.ok();
    });
    Ok(addr)
}
