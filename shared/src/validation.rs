//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! checkout form and the cart server.

use crate::error::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Person names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone, card number, zip, cvc, expiry
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses and cities
pub const MAX_ADDRESS_LEN: usize = 500;

/// Session user ids in request paths
pub const MAX_USER_ID_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

fn field_error(field: &str, message: String) -> AppError {
    AppError::validation(message).with_detail("field", field)
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(field_error(field, format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(field_error(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Validate that a string has at least `min_len` characters and at most
/// `max_len` bytes.
///
/// Characters are counted as entered, surrounding whitespace included.
pub fn validate_text_range(
    value: &str,
    field: &str,
    min_len: usize,
    max_len: usize,
) -> Result<(), AppError> {
    if value.chars().count() < min_len {
        return Err(field_error(
            field,
            format!("{field} must be at least {min_len} characters"),
        ));
    }
    if value.len() > max_len {
        return Err(field_error(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Validate an optional string that becomes required under some condition.
pub fn validate_required_option(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_required_text(v, field, max_len),
        None => Err(field_error(field, format!("{field} is required"))),
    }
}

/// Minimal structural email check: `local@domain.tld`, no whitespace.
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    let value = value.trim();
    let valid = !value.contains(char::is_whitespace)
        && value.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
        });
    if !valid {
        return Err(field_error(field, "Invalid email address".to_string()));
    }
    Ok(())
}

/// Validate a session user id taken from a request path.
pub fn validate_user_id(value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() || value.len() > MAX_USER_ID_LEN {
        return Err(AppError::new(ErrorCode::InvalidUserId).with_detail("user_id", value));
    }
    Ok(())
}
