pub mod email;
pub mod user;
