//! Address input validation.
//!
//! Rules are checked in order and the first failure wins:
//!
//! 1. Present and non-empty
//! 2. At least [`MIN_ADDRESS_LEN`] characters after trimming
//! 3. At most [`MAX_ADDRESS_LEN`] characters after trimming
//! 4. None of `<`, `>`, `{`, `}`
//!
//! Lengths are counted in UTF-16 code units, so a character outside the
//! Basic Multilingual Plane counts as two.

use regex::Regex;
use std::sync::LazyLock;

pub const MIN_ADDRESS_LEN: usize = 3;
pub const MAX_ADDRESS_LEN: usize = 200;

static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[<>{}]").unwrap());

/// Reasons an address is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Address must be a non-empty string")]
    Missing,

    #[error("Address is too short")]
    TooShort,

    #[error("Address is too long")]
    TooLong,

    #[error("Address contains invalid characters")]
    InvalidCharacters,
}

/// Validates a caller-supplied address and returns its trimmed form.
///
/// `None` stands for a value that was absent or not a string.
///
/// # Errors
///
/// Returns the first [`AddressError`] rule the input violates.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_address(Some("  Paris, France ")), Ok("Paris, France"));
/// assert_eq!(validate_address(Some("ab")), Err(AddressError::TooShort));
/// assert_eq!(validate_address(None), Err(AddressError::Missing));
/// ```
pub fn validate_address(address: Option<&str>) -> Result<&str, AddressError> {
    let address = match address {
        Some(text) if !text.is_empty() => text,
        _ => return Err(AddressError::Missing),
    };

    let trimmed = address.trim();
    let len = trimmed.encode_utf16().count();

    if len < MIN_ADDRESS_LEN {
        return Err(AddressError::TooShort);
    }

    if len > MAX_ADDRESS_LEN {
        return Err(AddressError::TooLong);
    }

    if DISALLOWED_CHARS.is_match(trimmed) {
        return Err(AddressError::InvalidCharacters);
    }

    Ok(trimmed)
}
