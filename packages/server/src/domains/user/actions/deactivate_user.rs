//! Deactivate user action (soft delete).

use tracing::info;
use uuid::Uuid;

use crate::common::error::DomainError;
use crate::domains::user::models::UserStatus;
use crate::kernel::ServerDeps;

/// Flips the user's status to disabled and returns the id unchanged.
///
/// Existence is the only precondition: deactivating an already
/// disabled user succeeds silently and leaves it disabled.
pub async fn deactivate_user(user_id: Uuid, deps: &ServerDeps) -> Result<Uuid, DomainError> {
    info!("Deactivating user: {}", user_id);

    if !deps.users.exists(user_id).await? {
        return Err(DomainError::not_found("User not found"));
    }

    deps.users.set_status(user_id, UserStatus::Disabled).await?;
    Ok(user_id)
}
