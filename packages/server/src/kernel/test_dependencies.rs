// TestDependencies - in-memory store implementations for testing
//
// Implements the same contracts as the Postgres adapters (ascending
// address ordering, lowest-user-id tie-break) so tests exercise the
// real domain logic without a database.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domains::email::models::{CreateEmail, Email};
use crate::domains::email::store::{EmailFilter, EmailStore};
use crate::domains::user::models::{CreateUser, User, UserStatus};
use crate::domains::user::store::UserStore;
use crate::kernel::ServerDeps;

type Rows<T> = Arc<Mutex<Vec<T>>>;

// =============================================================================
// In-memory user store
// =============================================================================

pub struct InMemoryUserStore {
    users: Rows<User>,
    // Shared with the email store so find_by_address can join.
    emails: Rows<Email>,
}

impl InMemoryUserStore {
    pub fn new(users: Rows<User>, emails: Rows<Email>) -> Self {
        Self { users, emails }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: CreateUser) -> Result<Uuid> {
        let id = Uuid::new_v4();
        self.users.lock().unwrap().push(User {
            id,
            first_name: user.first_name,
            last_name: user.last_name,
            status: UserStatus::Enabled.to_string(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_address(&self, address: &str) -> Result<Option<User>> {
        let owner_ids: Vec<Uuid> = {
            let emails = self.emails.lock().unwrap();
            emails
                .iter()
                .filter(|e| e.address == address)
                .map(|e| e.user_id)
                .collect()
        };

        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .filter(|u| owner_ids.contains(&u.id))
            .min_by_key(|u| u.id)
            .cloned())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.id == id))
    }

    async fn exists_enabled(&self, id: Uuid) -> Result<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.id == id && u.is_enabled()))
    }

    async fn set_status(&self, id: Uuid, status: UserStatus) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        for user in users.iter_mut().filter(|u| u.id == id) {
            user.status = status.to_string();
        }
        Ok(())
    }
}

// =============================================================================
// In-memory email store
// =============================================================================

pub struct InMemoryEmailStore {
    emails: Rows<Email>,
}

impl InMemoryEmailStore {
    pub fn new(emails: Rows<Email>) -> Self {
        Self { emails }
    }
}

#[async_trait]
impl EmailStore for InMemoryEmailStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Email>> {
        let emails = self.emails.lock().unwrap();
        Ok(emails.iter().find(|e| e.id == id).cloned())
    }

    async fn find(&self, filter: &EmailFilter) -> Result<Vec<Email>> {
        let emails = self.emails.lock().unwrap();
        let mut matches: Vec<Email> = emails
            .iter()
            .filter(|e| filter.user_id.map_or(true, |user_id| e.user_id == user_id))
            .filter(|e| {
                filter
                    .addresses
                    .as_ref()
                    .map_or(true, |addresses| addresses.contains(&e.address))
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.address.cmp(&b.address));
        Ok(matches)
    }

    async fn address_taken(
        &self,
        user_id: Uuid,
        address: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool> {
        let emails = self.emails.lock().unwrap();
        Ok(emails
            .iter()
            .filter(|e| exclude != Some(e.id))
            .any(|e| e.user_id == user_id && e.address == address))
    }

    async fn insert(&self, email: CreateEmail) -> Result<Uuid> {
        let id = Uuid::new_v4();
        self.emails.lock().unwrap().push(Email {
            id,
            address: email.address,
            user_id: email.user_id,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn update_address(&self, id: Uuid, address: &str) -> Result<()> {
        let mut emails = self.emails.lock().unwrap();
        for email in emails.iter_mut().filter(|e| e.id == id) {
            email.address = address.to_string();
        }
        Ok(())
    }
}

/// Creates ServerDeps backed entirely by in-memory stores.
pub fn test_server_deps() -> ServerDeps {
    let users: Rows<User> = Arc::new(Mutex::new(Vec::new()));
    let emails: Rows<Email> = Arc::new(Mutex::new(Vec::new()));
    ServerDeps::new(
        Arc::new(InMemoryUserStore::new(users, emails.clone())),
        Arc::new(InMemoryEmailStore::new(emails)),
    )
}
