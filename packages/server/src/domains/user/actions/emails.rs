//! Email mutations orchestrated by the user domain.
//!
//! Both mutations require the owning user to exist and be enabled, and
//! enforce per-user address uniqueness. Each check short-circuits the
//! next on failure. The check-then-act sequences are not wrapped in a
//! transaction; per-statement atomicity of the store is the only
//! serialization between concurrent callers.

use tracing::info;
use uuid::Uuid;

use crate::common::error::DomainError;
use crate::domains::email::models::CreateEmail;
use crate::kernel::ServerDeps;

/// Adds an email to an enabled user and returns the generated id.
///
/// A disabled user is treated identically to a missing one.
pub async fn add_email(
    address: &str,
    user_id: Uuid,
    deps: &ServerDeps,
) -> Result<Uuid, DomainError> {
    info!("Adding email for user: {}", user_id);

    if !deps.users.exists_enabled(user_id).await? {
        return Err(DomainError::not_found("User not found or deactivated"));
    }

    if deps.emails.address_taken(user_id, address, None).await? {
        return Err(DomainError::precondition_failed(
            "Email already exists for this user",
        ));
    }

    let email_id = deps
        .emails
        .insert(CreateEmail {
            address: address.to_string(),
            user_id,
        })
        .await?;
    Ok(email_id)
}

/// Replaces an email's address in place and returns the email id.
///
/// The identifier and ownership of the email never change. A duplicate
/// check excludes the email being renamed, so only a *different* email
/// of the same user holding the new address fails the mutation.
pub async fn update_email(
    new_address: &str,
    email_id: Uuid,
    user_id: Uuid,
    deps: &ServerDeps,
) -> Result<Uuid, DomainError> {
    info!("Updating email {} for user: {}", email_id, user_id);

    if !deps.users.exists_enabled(user_id).await? {
        return Err(DomainError::not_found("User not found or deactivated"));
    }

    let email = deps
        .emails
        .find_by_id(email_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Email does not exist"))?;

    // An email owned by another user is reported as absent rather than
    // leaking its existence.
    if email.user_id != user_id {
        return Err(DomainError::not_found("Email does not exist"));
    }

    if deps
        .emails
        .address_taken(user_id, new_address, Some(email_id))
        .await?
    {
        return Err(DomainError::precondition_failed(
            "Email already exists for this user",
        ));
    }

    deps.emails.update_address(email_id, new_address).await?;
    Ok(email_id)
}
