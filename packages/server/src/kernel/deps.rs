//! Server dependencies (explicit injection, traits for testability)
//!
//! The stores are trait objects so tests can swap the Postgres
//! adapters for in-memory implementations. Dependencies are passed
//! explicitly to actions; there is no global registry.

use std::sync::Arc;

use sqlx::PgPool;

use crate::domains::email::store::{EmailStore, PgEmailStore};
use crate::domains::user::store::{PgUserStore, UserStore};

/// Store dependencies accessible to all domain actions.
#[derive(Clone)]
pub struct ServerDeps {
    pub users: Arc<dyn UserStore>,
    pub emails: Arc<dyn EmailStore>,
}

impl ServerDeps {
    pub fn new(users: Arc<dyn UserStore>, emails: Arc<dyn EmailStore>) -> Self {
        Self { users, emails }
    }

    /// Wires both stores to the shared Postgres pool.
    pub fn postgres(pool: &PgPool) -> Self {
        Self::new(
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgEmailStore::new(pool.clone())),
        )
    }
}
