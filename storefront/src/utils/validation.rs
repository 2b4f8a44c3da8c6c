//! Input validation helpers
//!
//! Centralized text length constants and validation functions for
//! catalog data, inventory forms and newsletter sign-ups.

use shared::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Product and category names
pub const MAX_NAME_LEN: usize = 200;

/// Product descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: product ids, category keys
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string is present, non-empty and within the
/// length limit; returns the trimmed value.
pub fn require_field<'a>(value: &'a Option<String>, field: &str, max_len: usize) -> AppResult<&'a str> {
    let v = value.as_deref().map(str::trim).unwrap_or_default();
    validate_required_text(v, field, max_len)?;
    Ok(v)
}

/// Validate the shape of an email address: one `@`, non-empty local part,
/// a dotted domain, no whitespace.
pub fn validate_email(email: &str) -> AppResult<()> {
    let invalid = || {
        AppError::with_message(ErrorCode::InvalidEmail, format!("invalid email: {email}"))
            .with_detail("field", "email")
    };

    if email.is_empty() || email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid());
    };
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels_ok = domain.split('.').all(|label| !label.is_empty());
    if !domain.contains('.') || !labels_ok {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("Rose Bouquet", "name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_require_field() {
        assert_eq!(
            require_field(&Some("  pot ".into()), "category", MAX_SHORT_TEXT_LEN).unwrap(),
            "pot"
        );
        assert!(require_field(&None, "category", MAX_SHORT_TEXT_LEN).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("sample1@example.com").is_ok());
        assert!(validate_email("a.b+c@shop.co.uk").is_ok());

        for bad in ["", "plain", "@example.com", "a@b", "a@@b.com", "a b@c.com", "a@b..com"] {
            let err = validate_email(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidEmail, "{bad}");
        }
    }
}
