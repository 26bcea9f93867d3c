// Common test utilities

pub mod fixtures;
pub mod graphql;

pub use fixtures::*;
pub use graphql::*;
