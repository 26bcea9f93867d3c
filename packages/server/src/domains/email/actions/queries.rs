//! Email query actions
//!
//! Read-only; no side effects. Absence is a valid empty result.

use uuid::Uuid;

use crate::common::error::DomainError;
use crate::domains::email::data::StringFilters;
use crate::domains::email::models::Email;
use crate::domains::email::store::EmailFilter;
use crate::kernel::ServerDeps;

pub async fn get_email(email_id: Uuid, deps: &ServerDeps) -> Result<Option<Email>, DomainError> {
    Ok(deps.emails.find_by_id(email_id).await?)
}

/// Lists emails matching the address filter, optionally scoped to one
/// owning user. Results are ordered ascending by address; callers
/// (including cross-entity resolution) rely on that ordering.
pub async fn list_emails(
    filters: Option<StringFilters>,
    owner: Option<Uuid>,
    deps: &ServerDeps,
) -> Result<Vec<Email>, DomainError> {
    let filter = EmailFilter {
        user_id: owner,
        addresses: filters.and_then(address_candidates),
    };
    Ok(deps.emails.find(&filter).await?)
}

/// Collapses the `equal` / `in` sub-filters into one candidate list:
/// `equal` merges into a non-empty `in` list, and on its own becomes a
/// single-element list. `None` means no address constraint at all.
fn address_candidates(filter: StringFilters) -> Option<Vec<String>> {
    match (filter.equal, filter.is_in) {
        (Some(equal), Some(mut list)) if !list.is_empty() => {
            list.push(equal);
            Some(list)
        }
        (Some(equal), _) => Some(vec![equal]),
        (None, Some(list)) if !list.is_empty() => Some(list),
        (None, _) => None,
    }
}
