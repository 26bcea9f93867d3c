//! User data access: a narrow interface the storage adapter implements,
//! keeping domain logic free of store-specific query syntax.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{CreateUser, User, UserStatus};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user and returns the generated id. The stored
    /// status is always `enabled`.
    async fn insert(&self, user: CreateUser) -> Result<Uuid>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Finds the user owning an email with exactly this address.
    /// Addresses are not globally unique; ties are broken by lowest
    /// user id so the result is deterministic.
    async fn find_by_address(&self, address: &str) -> Result<Option<User>>;

    async fn exists(&self, id: Uuid) -> Result<bool>;

    /// Existence check that also requires `status = enabled`.
    async fn exists_enabled(&self, id: Uuid) -> Result<bool>;

    async fn set_status(&self, id: Uuid, status: UserStatus) -> Result<()>;
}

/// Postgres adapter for [`UserStore`].
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: CreateUser) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (first_name, last_name, status)
            VALUES ($1, $2, 'enabled')
            RETURNING id
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_address(&self, address: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.*
            FROM users u
            JOIN emails e ON e.user_id = u.id
            WHERE e.address = $1
            ORDER BY u.id ASC
            LIMIT 1
            "#,
        )
        .bind(address)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn exists_enabled(&self, id: Uuid) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND status = 'enabled')",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn set_status(&self, id: Uuid, status: UserStatus) -> Result<()> {
        sqlx::query("UPDATE users SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
