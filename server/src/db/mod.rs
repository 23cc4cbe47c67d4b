//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and apply the
//! `users`/`sessions` schema before any auth traffic is accepted.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const DB_MAX_CONNECTIONS: u32 = 5;

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(DB_MAX_CONNECTIONS)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}
