//! Runtime configuration, loaded from the environment.

use anyhow::{Context, Result};

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    /// Loads `.env` (when present) and reads configuration from the
    /// environment. `DATABASE_URL` is required; `PORT` defaults to 8080.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().context("PORT must be a number")?,
            Err(_) => 8080,
        };

        Ok(Self { database_url, port })
    }
}
