//! Postal code (CEP) normalization.
//!
//! Users type postal codes in many shapes (`01310-100`, `01.310-100`,
//! ` 01310100 `). Everything downstream works with the canonical 8-digit form.

use regex::Regex;
use std::sync::LazyLock;

/// Canonical postal code shape: exactly eight ASCII digits.
static POSTAL_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").unwrap());

/// Errors that can occur during postal code normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostalCodeError {
    #[error("Postal code must have exactly 8 digits.")]
    InvalidFormat,
}

/// Normalizes a raw postal code into its canonical 8-digit form.
///
/// # Normalization Rules
///
/// 1. Whitespace is removed
/// 2. Dots and hyphens are removed
/// 3. The remainder must be exactly 8 ASCII digits
///
/// # Errors
///
/// Returns [`PostalCodeError::InvalidFormat`] for anything that is not
/// 8 digits after normalization, including an empty input.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_postal_code("01310-100").unwrap(), "01310100");
/// assert_eq!(normalize_postal_code(" 01.310-100 ").unwrap(), "01310100");
/// assert!(normalize_postal_code("1310-100").is_err());
/// ```
pub fn normalize_postal_code(input: &str) -> Result<String, PostalCodeError> {
    let code: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != '-')
        .collect();

    if !POSTAL_CODE_REGEX.is_match(&code) {
        return Err(PostalCodeError::InvalidFormat);
    }

    Ok(code)
}
