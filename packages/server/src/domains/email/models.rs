use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Email address owned by exactly one user. Never deleted; the address
/// may be replaced in place but id and ownership are fixed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Email {
    pub id: Uuid,
    pub address: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new email under a user.
#[derive(Debug, Clone)]
pub struct CreateEmail {
    pub address: String,
    pub user_id: Uuid,
}
