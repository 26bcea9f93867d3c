//! User query actions
//!
//! Absence is a valid empty result for lookups, never an error.

use uuid::Uuid;

use crate::common::error::DomainError;
use crate::domains::user::models::User;
use crate::kernel::ServerDeps;

pub async fn get_user(user_id: Uuid, deps: &ServerDeps) -> Result<Option<User>, DomainError> {
    Ok(deps.users.find_by_id(user_id).await?)
}

/// Looks up the user owning an email with exactly this address.
///
/// Addresses are unique per user, not globally, so several users could
/// match; the store breaks ties by lowest user id.
pub async fn get_user_by_address(
    address: &str,
    deps: &ServerDeps,
) -> Result<Option<User>, DomainError> {
    Ok(deps.users.find_by_address(address).await?)
}
