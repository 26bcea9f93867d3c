//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::routes::{
    graphql_batch_handler, graphql_handler, graphql_playground, health_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router.
///
/// Stores are wired to the Postgres pool here and injected through the
/// GraphQL context; there is no auth layer, so one context serves all
/// requests.
pub fn build_app(pool: PgPool) -> Router {
    let schema = Arc::new(create_schema());
    let context = GraphQLContext::new(ServerDeps::postgres(&pool));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/graphql", post(graphql_handler).get(graphql_playground))
        .route("/graphql/batch", post(graphql_batch_handler))
        .route("/health", get(health_handler))
        .with_state(schema)
        .layer(Extension(context))
        .layer(Extension(AppState { db_pool: pool }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
