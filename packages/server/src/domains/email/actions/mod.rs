//! Email domain actions - read-only queries and filter semantics.

mod queries;

pub use queries::{get_email, list_emails};
