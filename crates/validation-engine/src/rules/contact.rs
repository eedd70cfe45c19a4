//! Email and Malaysian phone number rules.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ErrorList;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex");
    // Optional "+", optional "60" country code or a leading "0", then a
    // Malaysian mobile/landline body.
    static ref PHONE: Regex = Regex::new(r"^(\+?60|0)[1-9][0-9]{6,9}$").expect("phone regex");
}

/// Validate and normalize an email address (lowercased, trimmed).
pub fn email(errors: &mut ErrorList, field: &str, value: &str) -> String {
    let normalized = value.trim().to_lowercase();
    if normalized.is_empty() {
        errors.push(field, "is required");
    } else if !EMAIL.is_match(&normalized) {
        errors.push(field, "is not a valid email address");
    }
    normalized
}

/// Strip separators from a phone number: spaces, dashes, dots, parentheses.
pub fn normalize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect()
}

/// Validate a required Malaysian phone number; returns the normalized form.
pub fn phone(errors: &mut ErrorList, field: &str, value: &str) -> String {
    let normalized = normalize_phone(value.trim());
    if normalized.is_empty() {
        errors.push(field, "is required");
    } else if !PHONE.is_match(&normalized) {
        errors.push(field, "is not a valid Malaysian phone number");
    }
    normalized
}

/// Like [`phone`] but blank is acceptable and normalizes to `""`.
pub fn optional_phone(errors: &mut ErrorList, field: &str, value: Option<&str>) -> String {
    let normalized = normalize_phone(value.unwrap_or("").trim());
    if !normalized.is_empty() && !PHONE.is_match(&normalized) {
        errors.push(field, "is not a valid Malaysian phone number");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_phone(raw: &str) -> Result<String, String> {
        let mut errors = ErrorList::new();
        let v = phone(&mut errors, "phone", raw);
        errors.into_result(v).map_err(|e| e.to_string())
    }

    #[test]
    fn accepts_common_malaysian_formats() {
        assert_eq!(check_phone("012-345 6789").unwrap(), "0123456789");
        assert_eq!(check_phone("+60123456789").unwrap(), "+60123456789");
        assert_eq!(check_phone("60123456789").unwrap(), "60123456789");
        assert_eq!(check_phone("03-2161 0000").unwrap(), "0321610000");
    }

    #[test]
    fn rejects_garbage() {
        assert!(check_phone("hello").is_err());
        assert!(check_phone("123").is_err());
        assert!(check_phone("+1 202 555 0100").is_err());
    }

    #[test]
    fn email_is_lowercased() {
        let mut errors = ErrorList::new();
        let v = email(&mut errors, "email", " Aina@Skyline.MY ");
        assert!(errors.is_empty());
        assert_eq!(v, "aina@skyline.my");
    }

    #[test]
    fn email_shape_is_enforced() {
        let mut errors = ErrorList::new();
        email(&mut errors, "email", "not-an-email");
        let msg = errors.into_result(()).unwrap_err().to_string();
        assert!(msg.contains("email"));
    }
}
