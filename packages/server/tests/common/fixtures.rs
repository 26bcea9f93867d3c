//! Fixtures seeding the stores directly, bypassing the API.

use server_core::domains::email::models::CreateEmail;
use server_core::domains::user::models::{CreateUser, UserStatus};
use server_core::kernel::ServerDeps;
use uuid::Uuid;

pub async fn create_test_user(deps: &ServerDeps, first_name: &str, last_name: &str) -> Uuid {
    deps.users
        .insert(CreateUser {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
        .await
        .unwrap()
}

pub async fn create_disabled_user(deps: &ServerDeps) -> Uuid {
    let user_id = create_test_user(deps, "Dormant", "User").await;
    deps.users
        .set_status(user_id, UserStatus::Disabled)
        .await
        .unwrap();
    user_id
}

pub async fn create_test_email(deps: &ServerDeps, user_id: Uuid, address: &str) -> Uuid {
    deps.emails
        .insert(CreateEmail {
            address: address.to_string(),
            user_id,
        })
        .await
        .unwrap()
}
