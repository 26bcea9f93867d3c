pub mod common;
pub mod domains;
pub mod kernel;
pub mod server;
