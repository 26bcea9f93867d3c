//! GraphQL client for integration testing.
//!
//! Executes operations directly against the juniper schema (no HTTP),
//! backed by the in-memory stores from `kernel::test_dependencies`.

use juniper::Variables;
use serde_json::Value;
use server_core::kernel::test_dependencies::test_server_deps;
use server_core::kernel::ServerDeps;
use server_core::server::graphql::{create_schema, GraphQLContext, Schema};

pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<Value>,
}

impl GraphQLResult {
    /// Returns true if the execution had no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwraps the data, panicking if there were errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }

    /// The `extensions.code` of the first error, if any.
    pub fn error_code(&self) -> Option<&str> {
        self.errors
            .first()
            .and_then(|e| e["extensions"]["code"].as_str())
    }
}

impl GraphQLClient {
    /// Client over fresh in-memory stores; no database needed.
    pub fn new() -> Self {
        Self::with_deps(test_server_deps())
    }

    pub fn with_deps(deps: ServerDeps) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::new(deps),
        }
    }

    /// Store handles, for seeding state directly in tests.
    pub fn deps(&self) -> &ServerDeps {
        &self.context.deps
    }

    pub async fn query(&self, query: &str) -> GraphQLResult {
        match juniper::execute(query, None, &self.schema, &Variables::new(), &self.context).await {
            Ok((data, errors)) => GraphQLResult {
                data: Some(serde_json::to_value(&data).expect("serializable response")),
                errors: errors
                    .iter()
                    .map(|e| serde_json::to_value(e).expect("serializable error"))
                    .collect(),
            },
            Err(e) => GraphQLResult {
                data: None,
                errors: vec![Value::String(format!("{:?}", e))],
            },
        }
    }
}
