//! User accounts — validation, password hashing, and queries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signup validation here is the authoritative check; the storefront client
//! runs the same rules as a fast-fail convenience before submitting.

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::error::FieldErrors;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 30;
pub const PASSWORD_MIN: usize = 8;
const PHONE_MAX: usize = 15;
const EMAIL_MAX: usize = 60;

/// Postgres SQLSTATE for a unique-constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// A full user row, password hash included. Never serialized to the wire.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub phone_contact: Option<String>,
    pub password_hash: String,
}

/// Trim whitespace and lower-case an email for storage and lookup.
/// Emails are unique case-insensitively; lower-casing before every query
/// keeps the invariant in one place.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Minimal email shape check: one `@`, non-empty local part, and a domain
/// containing a dot with a 2+ letter suffix.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !domain.starts_with('.') && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate a signup request, collecting every field failure so the form
/// can render them all at once.
#[must_use]
pub fn validate_signup(username: &str, email: &str, phone: Option<&str>, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let username = username.trim();
    if username.len() < USERNAME_MIN || username.len() > USERNAME_MAX {
        errors.insert(
            "username".to_owned(),
            format!("must be {USERNAME_MIN} to {USERNAME_MAX} characters"),
        );
    }

    if !is_valid_email(email) {
        errors.insert("email".to_owned(), "not a valid email address".to_owned());
    } else if email.trim().len() > EMAIL_MAX {
        errors.insert("email".to_owned(), format!("must be at most {EMAIL_MAX} characters"));
    }

    if let Some(phone) = phone {
        if phone.len() > PHONE_MAX {
            errors.insert("phone_contact".to_owned(), format!("must be at most {PHONE_MAX} characters"));
        }
    }

    if password.len() < PASSWORD_MIN {
        errors.insert("password".to_owned(), format!("must be at least {PASSWORD_MIN} characters"));
    }

    errors
}

/// Hash a password with bcrypt at the default cost.
///
/// # Errors
///
/// Returns an error if bcrypt fails (input longer than 72 bytes).
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
}

/// Check a candidate password against a stored hash. Hash-format errors
/// count as a mismatch rather than surfacing to the login form.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Map a database error's code and constraint to the conflicting signup
/// field. A duplicate insert racing past the handler's pre-check must
/// report the same field error the pre-check would have.
fn duplicate_field(code: Option<&str>, constraint: Option<&str>) -> Option<&'static str> {
    if code != Some(UNIQUE_VIOLATION) {
        return None;
    }
    match constraint {
        Some(name) if name.contains("email") => Some("email"),
        Some(name) if name.contains("username") => Some("username"),
        _ => None,
    }
}

fn unique_violation_field(error: &sqlx::Error) -> Option<&'static str> {
    let sqlx::Error::Database(db) = error else {
        return None;
    };
    duplicate_field(db.code().as_deref(), db.constraint())
}

/// Insert a new user. Email must already be normalized; the username is
/// trimmed here. A unique-constraint violation surfaces as the
/// `already taken` field error rather than a database error.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    phone_contact: Option<&str>,
    password: &str,
) -> Result<UserRecord, crate::error::ApiError> {
    let password_hash = hash_password(password)?;
    let row = sqlx::query(
        r"INSERT INTO users (username, email, phone_contact, password_hash)
          VALUES ($1, $2, $3, $4)
          RETURNING id",
    )
    .bind(username.trim())
    .bind(email)
    .bind(phone_contact)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| match unique_violation_field(&e) {
        Some(field) => crate::error::ApiError::field(field, "already taken"),
        None => e.into(),
    })?;

    Ok(UserRecord {
        id: row.get("id"),
        username: username.trim().to_owned(),
        email: email.to_owned(),
        phone_contact: phone_contact.map(str::to_owned),
        password_hash,
    })
}

/// Look up a user by normalized email.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT id, username, email, phone_contact, password_hash
          FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| UserRecord {
        id: r.get("id"),
        username: r.get("username"),
        email: r.get("email"),
        phone_contact: r.get("phone_contact"),
        password_hash: r.get("password_hash"),
    }))
}

/// True if the email is already registered.
pub async fn email_taken(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 AS one FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// True if the username is already registered.
pub async fn username_taken(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 AS one FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}
