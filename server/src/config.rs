//! Environment configuration.
//!
//! DESIGN
//! ======
//! Everything except `DATABASE_URL` has a logged default so a bare
//! `cargo run` against a local Postgres works without a `.env` file.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::fmt::Display;
use std::str::FromStr;

/// Default session lifetime, matching the 24-hour token expiry the
/// storefront client assumes before it forces a re-login.
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub session_ttl_hours: i64,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `DATABASE_URL` is unset or a value fails to parse; this
    /// only runs at startup.
    #[must_use]
    pub fn load() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL required"),
            port: try_load("PORT", "3000"),
            session_ttl_hours: try_load("SESSION_TTL_HOURS", "24"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            port: 3000,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    std::env::var(key)
        .unwrap_or_else(|_| {
            tracing::info!("{key} not set, using default: {default}");
            default.to_owned()
        })
        .parse()
        .map_err(|e| {
            tracing::warn!("invalid {key} value: {e}");
        })
        .expect("environment misconfigured")
}
