//! Integration tests for user GraphQL queries and mutations.

mod common;

use crate::common::{create_test_user, GraphQLClient};
use uuid::Uuid;

// =============================================================================
// addUser
// =============================================================================

/// A caller-supplied status is ignored: new users always start enabled.
#[tokio::test]
async fn add_user_forces_enabled_status() {
    let client = GraphQLClient::new();

    let result = client
        .query(
            r#"mutation {
                addUser(user: { firstName: "Ada", lastName: "Lovelace", status: DISABLED })
            }"#,
        )
        .await;
    let data = result.unwrap();
    let user_id = data["addUser"].as_str().unwrap().to_string();

    let result = client
        .query(&format!(
            r#"query {{ user(userId: "{user_id}") {{ id status firstName lastName }} }}"#
        ))
        .await;
    let data = result.unwrap();

    assert_eq!(data["user"]["status"], "ENABLED");
    assert_eq!(data["user"]["firstName"], "Ada");
    assert_eq!(data["user"]["lastName"], "Lovelace");
    assert_eq!(data["user"]["id"], user_id);
}

/// Duplicate profile data is allowed; only the generated id is unique.
#[tokio::test]
async fn add_user_allows_duplicate_profiles() {
    let client = GraphQLClient::new();
    let mutation =
        r#"mutation { addUser(user: { firstName: "Same", lastName: "Person" }) }"#;

    let first = client.query(mutation).await.unwrap();
    let second = client.query(mutation).await.unwrap();

    assert_ne!(first["addUser"], second["addUser"]);
}

// =============================================================================
// user query
// =============================================================================

/// Absence is a valid empty result, not an error.
#[tokio::test]
async fn user_query_unknown_id_returns_null() {
    let client = GraphQLClient::new();
    let unknown = Uuid::new_v4();

    let result = client
        .query(&format!(r#"query {{ user(userId: "{unknown}") {{ id }} }}"#))
        .await;
    let data = result.unwrap();

    assert!(data["user"].is_null());
}

// =============================================================================
// deactivateUser
// =============================================================================

#[tokio::test]
async fn deactivate_unknown_user_fails_with_not_found() {
    let client = GraphQLClient::new();
    let unknown = Uuid::new_v4();

    let result = client
        .query(&format!(r#"mutation {{ deactivateUser(userId: "{unknown}") }}"#))
        .await;

    assert_eq!(result.error_code(), Some("NOT_FOUND"));
}

/// Existence is the only precondition: a second deactivation succeeds
/// silently and the user stays disabled.
#[tokio::test]
async fn deactivate_twice_succeeds_and_leaves_disabled() {
    let client = GraphQLClient::new();
    let user_id = create_test_user(client.deps(), "Grace", "Hopper").await;
    let mutation = format!(r#"mutation {{ deactivateUser(userId: "{user_id}") }}"#);

    let first = client.query(&mutation).await;
    assert!(first.is_ok(), "first deactivation failed: {:?}", first.errors);
    assert_eq!(first.unwrap()["deactivateUser"], user_id.to_string());

    let second = client.query(&mutation).await;
    assert!(second.is_ok(), "second deactivation failed: {:?}", second.errors);
    assert_eq!(second.unwrap()["deactivateUser"], user_id.to_string());

    let data = client
        .query(&format!(r#"query {{ user(userId: "{user_id}") {{ status }} }}"#))
        .await
        .unwrap();
    assert_eq!(data["user"]["status"], "DISABLED");
}
