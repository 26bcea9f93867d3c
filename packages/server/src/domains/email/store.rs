//! Email data access: a narrow interface the storage adapter implements,
//! keeping domain logic free of store-specific query syntax.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{CreateEmail, Email};

/// Resolved address constraints applied by [`EmailStore::find`].
///
/// `addresses` is the already-merged candidate list (the `equal` /
/// `in` combination policy lives in the email actions, not here).
#[derive(Debug, Clone, Default)]
pub struct EmailFilter {
    pub user_id: Option<Uuid>,
    pub addresses: Option<Vec<String>>,
}

#[async_trait]
pub trait EmailStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Email>>;

    /// Results are always ordered ascending by address; callers depend
    /// on this for stable output.
    async fn find(&self, filter: &EmailFilter) -> Result<Vec<Email>>;

    /// True when `user_id` already owns an email with `address`. An
    /// email id passed as `exclude` is ignored by the check (used when
    /// renaming an email onto its own address).
    async fn address_taken(
        &self,
        user_id: Uuid,
        address: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool>;

    /// Inserts a new email and returns the generated id.
    async fn insert(&self, email: CreateEmail) -> Result<Uuid>;

    async fn update_address(&self, id: Uuid, address: &str) -> Result<()>;
}

/// Postgres adapter for [`EmailStore`].
pub struct PgEmailStore {
    pool: PgPool,
}

impl PgEmailStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmailStore for PgEmailStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Email>> {
        let email = sqlx::query_as::<_, Email>("SELECT * FROM emails WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(email)
    }

    async fn find(&self, filter: &EmailFilter) -> Result<Vec<Email>> {
        let emails = match (filter.user_id, filter.addresses.as_deref()) {
            (Some(user_id), Some(addresses)) => {
                sqlx::query_as::<_, Email>(
                    r#"
                    SELECT *
                    FROM emails
                    WHERE user_id = $1 AND address = ANY($2)
                    ORDER BY address ASC
                    "#,
                )
                .bind(user_id)
                .bind(addresses)
                .fetch_all(&self.pool)
                .await?
            }
            (Some(user_id), None) => {
                sqlx::query_as::<_, Email>(
                    "SELECT * FROM emails WHERE user_id = $1 ORDER BY address ASC",
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
            (None, Some(addresses)) => {
                sqlx::query_as::<_, Email>(
                    "SELECT * FROM emails WHERE address = ANY($1) ORDER BY address ASC",
                )
                .bind(addresses)
                .fetch_all(&self.pool)
                .await?
            }
            (None, None) => {
                sqlx::query_as::<_, Email>("SELECT * FROM emails ORDER BY address ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(emails)
    }

    async fn address_taken(
        &self,
        user_id: Uuid,
        address: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool> {
        let taken = match exclude {
            Some(excluded) => {
                sqlx::query_scalar::<_, bool>(
                    r#"
                    SELECT EXISTS(
                        SELECT 1 FROM emails
                        WHERE user_id = $1 AND address = $2 AND id <> $3
                    )
                    "#,
                )
                .bind(user_id)
                .bind(address)
                .bind(excluded)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM emails WHERE user_id = $1 AND address = $2)",
                )
                .bind(user_id)
                .bind(address)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(taken)
    }

    async fn insert(&self, email: CreateEmail) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO emails (address, user_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(&email.address)
        .bind(email.user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update_address(&self, id: Uuid, address: &str) -> Result<()> {
        sqlx::query("UPDATE emails SET address = $2 WHERE id = $1")
            .bind(id)
            .bind(address)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
