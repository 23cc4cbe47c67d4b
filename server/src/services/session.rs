//! Session management.
//!
//! ARCHITECTURE
//! ============
//! A session is an opaque random token stored in Postgres with a bounded
//! lifetime. The client presents it as a bearer credential; validation is a
//! single join against `users` that also filters out expired rows, so an
//! expired session is indistinguishable from a missing one.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use rand::Rng;
use sqlx::{PgPool, Row};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Generate a cryptographically random 32-byte hex session token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// User row returned from session validation. Serializes to the
/// `{id, name, email}` shape the storefront client caches.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name (the signup username).
    pub name: String,
    /// Lower-cased unique email.
    pub email: String,
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid, ttl: Duration) -> Result<String, sqlx::Error> {
    let token = generate_token();
    let expires_at = OffsetDateTime::now_utc() + ttl;
    sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(&token)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.username, u.email
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionUser { id: r.get("id"), name: r.get("username"), email: r.get("email") }))
}

/// Delete a session by token. Deleting an unknown token is a no-op.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove expired sessions. Expiry already excludes them from validation;
/// this only reclaims storage.
pub async fn purge_expired_sessions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Hourly cleanup loop, spawned at startup. Purge failures are logged and
/// retried on the next tick.
pub async fn purge_loop(pool: PgPool) {
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(3600));
    loop {
        interval.tick().await;
        match purge_expired_sessions(&pool).await {
            Ok(0) => {}
            Ok(purged) => tracing::info!(purged, "expired sessions removed"),
            Err(e) => tracing::warn!(error = %e, "session purge failed"),
        }
    }
}
