//! Presence and length rules for free-text fields.

use crate::error::ErrorList;

/// Trim and require a non-empty value within `min..=max` characters.
///
/// Returns the trimmed value either way so later rules can keep running on
/// a best-effort basis.
pub fn required(errors: &mut ErrorList, field: &str, value: &str, min: usize, max: usize) -> String {
    let trimmed = value.trim().to_string();
    let len = trimmed.chars().count();
    if len == 0 {
        errors.push(field, "is required");
    } else if len < min {
        errors.push(field, format!("must be at least {} characters", min));
    } else if len > max {
        errors.push(field, format!("must be at most {} characters", max));
    }
    trimmed
}

/// Trim an optional value and bound its length; empty becomes `""`.
pub fn optional(errors: &mut ErrorList, field: &str, value: Option<&str>, max: usize) -> String {
    let trimmed = value.unwrap_or("").trim().to_string();
    if trimmed.chars().count() > max {
        errors.push(field, format!("must be at most {} characters", max));
    }
    trimmed
}

/// Bound a string list: at most `max_items` entries, blanks dropped.
pub fn bounded_list(
    errors: &mut ErrorList,
    field: &str,
    values: &[String],
    max_items: usize,
    max_len: usize,
) -> Vec<String> {
    let cleaned: Vec<String> = values
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    if cleaned.len() > max_items {
        errors.push(field, format!("must have at most {} entries", max_items));
    }
    if cleaned.iter().any(|v| v.chars().count() > max_len) {
        errors.push(
            field,
            format!("entries must be at most {} characters", max_len),
        );
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_flags_empty_and_returns_trimmed() {
        let mut errors = ErrorList::new();
        let v = required(&mut errors, "name", "  ", 1, 10);
        assert_eq!(v, "");
        assert!(!errors.is_empty());
    }

    #[test]
    fn required_enforces_bounds() {
        let mut errors = ErrorList::new();
        required(&mut errors, "title", "ab", 3, 10);
        assert!(errors.into_result(()).unwrap_err().to_string().contains("title"));
    }

    #[test]
    fn bounded_list_drops_blanks() {
        let mut errors = ErrorList::new();
        let v = bounded_list(
            &mut errors,
            "areas",
            &["KLCC".into(), " ".into(), "Bangsar".into()],
            5,
            50,
        );
        assert_eq!(v, vec!["KLCC".to_string(), "Bangsar".to_string()]);
        assert!(errors.is_empty());
    }
}
