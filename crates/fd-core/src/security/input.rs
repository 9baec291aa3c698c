//! Strict allowlist-based input validation to prevent SQL injection and
//! header injection through interactively-entered or remotely-fetched values.
//!
//! Allowlists only, never denylists: a value is accepted when it matches the
//! expected shape exactly, not when it avoids a list of known-bad characters.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Maximum accepted length of a visitor name, spaces included.
pub const MAX_NAME_LEN: usize = 50;

/// Errors returned when input fails validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid record text: {0}")]
    InvalidRecordText(String),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Input too long: max {max} chars, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Alphabetic-only check, applied to a copy with the spaces removed.
static LETTERS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

/// Text accepted into a database record: alphanumeric and whitespace,
/// anchored at both ends.
static RECORD_TEXT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s]+$").unwrap());

/// RFC 5321 compatible email address (simplified but safe).
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*\.[a-zA-Z]{2,}$",
    )
    .unwrap()
});

/// Validate an interactively-entered visitor name.
///
/// Accepts only letters and spaces, up to [`MAX_NAME_LEN`] characters
/// (spaces count toward the limit). The alphabetic check runs on a copy
/// with the spaces stripped out; the caller keeps the original spacing.
pub fn validate_visitor_name(name: &str) -> Result<&str, ValidationError> {
    let actual = name.chars().count();
    if actual > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            max: MAX_NAME_LEN,
            actual,
        });
    }
    let stripped: String = name.chars().filter(|c| *c != ' ').collect();
    if !LETTERS_RE.is_match(&stripped) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// Validate text destined for a database record.
///
/// Only alphanumeric characters and whitespace are allowed; the pattern is
/// anchored so nothing can ride along before or after the matched region.
pub fn validate_record_text(text: &str) -> Result<&str, ValidationError> {
    if !RECORD_TEXT_RE.is_match(text) {
        return Err(ValidationError::InvalidRecordText(text.to_string()));
    }
    Ok(text)
}

/// Validate an email address.
///
/// Uses a simplified RFC 5321 pattern that accepts all reasonable addresses
/// while rejecting injection payloads.
pub fn validate_email(email: &str) -> Result<&str, ValidationError> {
    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            max: 254,
            actual: email.len(),
        });
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(email)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Visitor name validation --------------------------------------------

    #[test]
    fn test_valid_names() {
        assert_eq!(validate_visitor_name("Alice").unwrap(), "Alice");
        assert_eq!(validate_visitor_name("Jane Doe").unwrap(), "Jane Doe");
        assert_eq!(
            validate_visitor_name("Mary Ann van Helsing").unwrap(),
            "Mary Ann van Helsing"
        );
    }

    #[test]
    fn test_name_preserves_internal_spacing() {
        // Only the validation copy is stripped; the accepted value is returned verbatim.
        assert_eq!(validate_visitor_name("Jane  Doe").unwrap(), "Jane  Doe");
    }

    #[test]
    fn test_invalid_names() {
        assert!(validate_visitor_name("").is_err());
        assert!(validate_visitor_name("Jane123").is_err());
        assert!(validate_visitor_name("Jane-Doe").is_err());
        assert!(validate_visitor_name("Robert'); DROP TABLE mytable;--").is_err());
        assert!(validate_visitor_name("Jane\nDoe").is_err());
        assert!(validate_visitor_name("   ").is_err());
    }

    #[test]
    fn test_name_length_limit() {
        let max_name = "a".repeat(50);
        assert!(validate_visitor_name(&max_name).is_ok());
        // 51 characters are rejected even when every one of them is a letter.
        let long_name = "a".repeat(51);
        assert!(validate_visitor_name(&long_name).is_err());
    }

    #[test]
    fn test_name_length_counts_spaces() {
        // 26 letters, 25 separating spaces: 51 characters total.
        let spaced: String = ("a".repeat(26))
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(spaced.chars().count(), 51);
        assert!(validate_visitor_name(&spaced).is_err());
    }

    // -- Record text validation ---------------------------------------------

    #[test]
    fn test_valid_record_text() {
        assert!(validate_record_text("Hello World 123").is_ok());
        assert!(validate_record_text("abc").is_ok());
        assert!(validate_record_text("42").is_ok());
    }

    #[test]
    fn test_invalid_record_text() {
        assert!(validate_record_text("").is_err());
        assert!(validate_record_text("Hello!").is_err());
        assert!(validate_record_text("a; DROP TABLE mytable").is_err());
        assert!(validate_record_text("value' OR '1'='1").is_err());
        assert!(validate_record_text("emoji \u{1f600}").is_err());
    }

    // -- Email validation ---------------------------------------------------

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("admin@example.com").is_ok());
        assert!(validate_email("first.last@mail.example.com").is_ok());
        assert!(validate_email("user+tag@example.org").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("notanemail").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@example.com\nBcc: everyone@example.com").is_err());
    }

    #[test]
    fn test_email_length_limit() {
        let long_email = format!("{}@example.com", "a".repeat(250));
        assert!(validate_email(&long_email).is_err());
    }
}
