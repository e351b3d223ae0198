//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! The scraping vendor is an in-process mock.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, vendor::MOCK_FOLLOWERS,
    vendor::MOCK_TREND_VIDEOS, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Token Tests
// ============================================================================

#[tokio::test]
async fn test_api_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/user", &CreateUserRequest::unique())
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_API_TOKEN");

    let response = server
        .get_with_token("/api/stats/trend/video", "not-a-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post_auth("/api/user", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.nickname, request.nickname);
    assert_eq!(user.app_id, request.app_id);
    assert_eq!(user.app_bundle, request.app_bundle);
    assert!(user.id > 0);

    let response = server
        .get_auth(&format!("/api/user/{}", request.nickname))
        .await
        .unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, user.id);
}

#[tokio::test]
async fn test_register_duplicate_is_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post_auth("/api/user", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_auth("/api/user", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_strips_at_sign() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = CreateUserRequest::unique();
    let bare = request.nickname.clone();
    request.nickname = format!("@{bare}");

    let response = server.post_auth("/api/user", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(user.nickname, bare);
}

#[tokio::test]
async fn test_get_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth(&format!("/api/user/nobody{}", unique_suffix()))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_USER");
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_registration_loads_current_stats() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();
    let response = server.post_auth("/api/user", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/stats/{}/current", request.nickname);
    let response = server.wait_for_ok(&path, 50).await.unwrap();
    let current: CurrentStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(current.nickname, request.nickname);
    assert_eq!(current.followers, MOCK_FOLLOWERS);
    assert_eq!(current.videos.len(), 1);
    assert!(current
        .videos
        .iter()
        .all(|v| v.created_at == current.created_at));
}

#[tokio::test]
async fn test_vendor_error_stored_on_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::with_prefix("missing");
    let response = server.post_auth("/api/user", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/user/{}", request.nickname);
    let mut user: Option<UserResponse> = None;
    for _ in 0..50 {
        let response = server.get_auth(&path).await.unwrap();
        let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
        if fetched.error.is_some() {
            user = Some(fetched);
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }
    assert!(user.is_some(), "vendor error was not recorded");

    let response = server
        .get_auth(&format!("/api/stats/{}/current", request.nickname))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_increase_without_snapshots_is_zero() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let nickname = format!("ghost{}", unique_suffix());
    let response = server
        .get_auth(&format!("/api/stats/{nickname}/increase?days=7"))
        .await
        .unwrap();
    let delta: StatsDeltaResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(delta.nickname, nickname);
    assert_eq!(
        (delta.followers, delta.following, delta.likes, delta.diggs),
        (0, 0, 0, 0)
    );
    assert!(delta.created_at.contains("T00:00:00"));
}

#[tokio::test]
async fn test_increase_rejects_negative_days() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth("/api/stats/alice/increase?days=-3")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

// ============================================================================
// Trend Tests
// ============================================================================

#[tokio::test]
async fn test_trend_refresh_replaces_rows() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let refresher = server.state.service_context().refresher();

    refresher.refresh_all().await.unwrap();
    let report = refresher.refresh_all().await.unwrap().expect("refresh skipped");
    assert_eq!(report.trends, MOCK_TREND_VIDEOS + 2);

    let response = server.get_auth("/api/stats/trend/video").await.unwrap();
    let videos: Vec<TrendVideoResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(videos.len(), MOCK_TREND_VIDEOS);
    assert!(videos.iter().all(|v| v.description.starts_with("trend ")));
}
