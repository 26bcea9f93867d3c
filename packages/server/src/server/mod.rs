pub mod app;
pub mod config;
pub mod graphql;
pub mod routes;
