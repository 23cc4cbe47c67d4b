//! Client-side form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fast-fail convenience before submitting to the backend, which runs the
//! same rules authoritatively. Never a security boundary.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 30;
pub const PASSWORD_MIN: usize = 8;

/// Trim and lower-case an email before transmission. Emails are unique
/// case-insensitively on the backend.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Minimal email shape check: one `@`, a non-empty local part, and a dotted
/// domain with an alphabetic 2+ letter suffix.
#[must_use]
pub fn looks_like_email(email: &str) -> bool {
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

/// Validate a login form. `Ok` carries the normalized email.
pub fn validate_login(email: &str, password: &str) -> Result<String, &'static str> {
    let email = normalize_email(email);
    if !looks_like_email(&email) {
        return Err("Enter a valid email address.");
    }
    if password.len() < PASSWORD_MIN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(email)
}

/// Validate a signup form. `Ok` carries (trimmed username, normalized email).
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.len() < USERNAME_MIN || username.len() > USERNAME_MAX {
        return Err("Username must be 3 to 30 characters.");
    }
    let email = normalize_email(email);
    if !looks_like_email(&email) {
        return Err("Enter a valid email address.");
    }
    if password.len() < PASSWORD_MIN {
        return Err("Password must be at least 8 characters.");
    }
    Ok((username.to_owned(), email))
}
