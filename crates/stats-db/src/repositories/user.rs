//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stats_core::entities::{NewUser, User};
use stats_core::error::DomainError;
use stats_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_nickname(&self, nickname: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, nickname, app_id, app_bundle, avatar, error, created_at, updated_at
            FROM users
            WHERE nickname = $1
            ",
        )
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, nickname, app_id, app_bundle, avatar, error, created_at, updated_at
            FROM users
            ORDER BY id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self), fields(nickname = %user.nickname))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let row = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (nickname, app_id, app_bundle, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, nickname, app_id, app_bundle, avatar, error, created_at, updated_at
            ",
        )
        .bind(&user.nickname)
        .bind(&user.app_id)
        .bind(&user.app_bundle)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::UserAlreadyExists(user.nickname.clone()))
        })?;

        Ok(User::from(row))
    }
}
