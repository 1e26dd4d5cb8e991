//! Field validators used when converting request DTOs into parameters.
//!
//! All validators are pure and return `AppError::BadRequest` with a client-facing
//! message on failure.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::AppError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Characters accepted as the special character of a password.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const PASSWORD_MIN_LEN: usize = 8;

/// Returns the trimmed value of a required text field.
///
/// # Returns
/// - `Ok(String)` - Trimmed, non-empty value
/// - `Err(AppError::BadRequest)` - Field missing or blank, with `message` as the error
pub fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// Like [`required`] but keeps the value untouched. Used for passwords.
pub fn present(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// Trims an optional field for partial updates.
///
/// An absent field stays `None`. A supplied field that is blank after trimming is
/// rejected, since every text column is required.
pub fn optional_trimmed(value: Option<String>, message: &str) -> Result<Option<String>, AppError> {
    match value {
        None => Ok(None),
        Some(v) => required(Some(v), message).map(Some),
    }
}

/// Trims and lower-cases an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Checks an (already normalized) email address against the accepted format.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Formato de email inválido".to_string()))
    }
}

/// Checks the password policy: at least eight characters with a lower-case letter,
/// an upper-case letter, a digit and one of [`PASSWORD_SPECIAL_CHARS`].
pub fn validate_password(password: &str) -> Result<(), AppError> {
    let long_enough = password.chars().count() >= PASSWORD_MIN_LEN;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if long_enough && has_lower && has_upper && has_digit && has_special {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "A senha deve ter pelo menos 8 caracteres e incluir uma letra maiúscula, \
             uma letra minúscula, um número e um caractere especial"
                .to_string(),
        ))
    }
}
