//! User domain actions - business logic functions
//!
//! Actions are async functions called directly from GraphQL resolvers.
//! They validate invariants against the injected stores and return the
//! entity or identifier, or a `DomainError`.

mod create_user;
mod deactivate_user;
mod emails;
mod queries;

pub use create_user::create_user;
pub use deactivate_user::deactivate_user;
pub use emails::{add_email, update_email};
pub use queries::{get_user, get_user_by_address};
