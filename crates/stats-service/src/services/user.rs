//! User service
//!
//! Registration and lookup of tracked profiles.

use stats_core::{DomainError, NewUser};
use tracing::{info, instrument, warn};

use crate::dto::{CreateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a user and schedule a background stats load for them
    #[instrument(skip(self, request), fields(nickname = %request.nickname))]
    pub async fn create(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let new_user = NewUser::new(&request.nickname, &request.app_id, &request.app_bundle)?;
        let user = self.ctx.user_repo().create(&new_user).await?;
        info!(user_id = user.id, nickname = %user.nickname, "User registered");

        let refresher = self.ctx.refresher().clone();
        let nickname = user.nickname.clone();
        tokio::spawn(async move {
            if let Err(e) = refresher.refresh_user(&nickname).await {
                warn!(%nickname, error = %e, "Initial stats load failed");
            }
        });

        Ok(UserResponse::from(user))
    }

    /// Get a registered user by nickname
    #[instrument(skip(self))]
    pub async fn get(&self, nickname: &str) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_nickname(nickname)
            .await?
            .ok_or_else(|| {
                ServiceError::Domain(DomainError::UserNotFound(nickname.to_string()))
            })?;

        Ok(UserResponse::from(user))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::services::testing::{collected, context, MemoryRepo, ScriptedProfiles, ScriptedTrends};

    fn request(nickname: &str) -> CreateUserRequest {
        CreateUserRequest {
            app_id: "app-1".to_string(),
            app_bundle: "com.example.app".to_string(),
            nickname: nickname.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_and_loads_stats() {
        let repo = MemoryRepo::with_users(&[]);
        let profiles = ScriptedProfiles::returning(vec![collected("alice", 42, 2)]);
        let ctx = context(repo.clone(), profiles.clone(), ScriptedTrends::with_videos(0));

        let user = UserService::new(&ctx).create(request(" @alice ")).await.unwrap();
        assert_eq!(user.nickname, "alice");
        assert_eq!(user.app_id, "app-1");

        for _ in 0..50 {
            if !repo.stats.lock().unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(profiles.requested.lock().unwrap()[0], vec!["alice".to_string()]);
        assert_eq!(repo.stats.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict() {
        let repo = MemoryRepo::with_users(&["alice"]);
        let ctx = context(
            repo.clone(),
            ScriptedProfiles::returning(vec![]),
            ScriptedTrends::with_videos(0),
        );

        let err = UserService::new(&ctx).create(request("alice")).await.unwrap_err();
        assert_eq!(err.status_code(), 409);
        assert_eq!(repo.users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_nickname() {
        let ctx = context(
            MemoryRepo::with_users(&[]),
            ScriptedProfiles::returning(vec![]),
            ScriptedTrends::with_videos(0),
        );

        let err = UserService::new(&ctx).create(request("a/b")).await.unwrap_err();
        assert_eq!(err.status_code(), 422);
    }

    #[tokio::test]
    async fn test_get_unknown_user() {
        let ctx = context(
            MemoryRepo::with_users(&["alice"]),
            ScriptedProfiles::returning(vec![]),
            ScriptedTrends::with_videos(0),
        );
        let service = UserService::new(&ctx);

        assert_eq!(service.get("alice").await.unwrap().nickname, "alice");
        let err = service.get("bob").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_USER");
    }
}
