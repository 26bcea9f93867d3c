//! Create user action.

use tracing::info;
use uuid::Uuid;

use crate::common::error::DomainError;
use crate::domains::user::models::CreateUser;
use crate::kernel::ServerDeps;

/// Inserts a new user and returns the generated id.
///
/// Status is forced to enabled; any status-like value the caller
/// supplied is dropped before this point. Duplicate profile data is
/// allowed, only the generated id is unique.
pub async fn create_user(user: CreateUser, deps: &ServerDeps) -> Result<Uuid, DomainError> {
    info!("Creating user");

    let user_id = deps.users.insert(user).await?;
    Ok(user_id)
}
