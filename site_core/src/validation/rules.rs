//! Field-level predicates used by the lead validator

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$"
    ).unwrap();

    // Optional `+`, then digit groups (the first two may sit in parentheses)
    // joined by a single space, dash or dot.
    static ref PHONE_SHAPE_REGEX: Regex = Regex::new(
        r"^\+?\(?[0-9]{1,4}\)?[-\s.]?\(?[0-9]{1,4}\)?[-\s.]?[0-9]{1,4}[-\s.]?[0-9]{1,9}$"
    ).unwrap();

    static ref PHONE_CHARS_REGEX: Regex = Regex::new(
        r"^[0-9 +\-.()]+$"
    ).unwrap();
}

/// True when the value is absent or only whitespace.
///
/// Accepts both `&str` and `Option<&str>` so callers holding optional input
/// don't need to unwrap first.
pub fn is_blank<'a>(value: impl Into<Option<&'a str>>) -> bool {
    match value.into() {
        Some(v) => v.trim().is_empty(),
        None => true,
    }
}

/// `local@domain.tld` shape check on the trimmed value. Blank is never valid.
pub fn is_valid_email_format<'a>(value: impl Into<Option<&'a str>>) -> bool {
    match value.into() {
        Some(v) if !is_blank(v) => EMAIL_REGEX.is_match(v.trim()),
        _ => false,
    }
}

/// Phone is optional: a blank value passes. Anything else must clear every
/// gate in [`check_phone`].
pub fn is_valid_phone_format<'a>(value: impl Into<Option<&'a str>>) -> bool {
    match value.into() {
        Some(v) if !is_blank(v) => check_phone(v).is_ok(),
        _ => true,
    }
}

pub fn phone_digit_count(value: &str) -> usize {
    value.trim().chars().filter(|c| c.is_ascii_digit()).count()
}

pub fn phone_digit_count_in_range(value: &str) -> bool {
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&phone_digit_count(value))
}

pub fn has_only_phone_characters(value: &str) -> bool {
    PHONE_CHARS_REGEX.is_match(value.trim())
}

pub fn matches_phone_shape(value: &str) -> bool {
    PHONE_SHAPE_REGEX.is_match(value.trim())
}

/// Runs the phone gates in order and reports the first one that rejects.
///
/// Error codes: `phone_digit_count`, `phone_characters`, `phone_shape`.
pub fn check_phone(value: &str) -> Result<(), ValidationError> {
    let digits = phone_digit_count(value);
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        let mut err = ValidationError::new("phone_digit_count");
        err.message = Some(Cow::Borrowed("Phone number must contain 7 to 15 digits"));
        err.add_param(Cow::Borrowed("digits"), &digits);
        return Err(err);
    }

    if !has_only_phone_characters(value) {
        let mut err = ValidationError::new("phone_characters");
        err.message = Some(Cow::Borrowed("Phone number contains characters that are not allowed"));
        return Err(err);
    }

    if !matches_phone_shape(value) {
        let mut err = ValidationError::new("phone_shape");
        err.message = Some(Cow::Borrowed("Phone number is not in a recognised format"));
        return Err(err);
    }

    Ok(())
}
