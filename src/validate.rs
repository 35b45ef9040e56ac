//! Pure form-field validators.
//!
//! Stateless checks shared by the registration and add-alumni handlers.
//! None of these functions panic on arbitrary input.

use std::sync::LazyLock;

use regex::Regex;

/// Earliest accepted passing year.
pub const MIN_PASSING_YEAR: i64 = 1980;

/// Minimum password length (after trimming surrounding whitespace).
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Required number of digits in a phone number.
const PHONE_DIGITS: usize = 10;

/// Basic `local-part@domain.tld` pattern: word characters, dots, or hyphens
/// on both sides of the `@`, with a final word-character segment after the
/// last dot.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("valid email regex"));

/// Returns true if `email` matches the basic email-address pattern.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns true if the trimmed password has at least [`MIN_PASSWORD_LENGTH`]
/// characters.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.trim().chars().count() >= MIN_PASSWORD_LENGTH
}

/// Returns true if `phone` is exactly ten ASCII decimal digits.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `year` falls within `[MIN_PASSING_YEAR, current_year]`.
#[must_use]
pub const fn is_valid_year(year: i64, current_year: i64) -> bool {
    MIN_PASSING_YEAR <= year && year <= current_year
}
