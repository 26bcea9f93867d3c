pub mod graphql;
pub mod health;

pub use graphql::{graphql_batch_handler, graphql_handler, graphql_playground};
pub use health::health_handler;
