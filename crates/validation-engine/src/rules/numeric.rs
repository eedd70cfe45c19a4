//! Numeric range rules.

use crate::error::ErrorList;

/// Price must be a positive, finite amount.
pub fn positive_price(errors: &mut ErrorList, field: &str, value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        errors.push(field, "must be a positive amount");
    }
    value
}

/// Inclusive integer range check.
pub fn in_range(errors: &mut ErrorList, field: &str, value: u32, min: u32, max: u32) -> u32 {
    if value < min || value > max {
        errors.push(field, format!("must be between {} and {}", min, max));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_nan_prices_rejected() {
        let mut errors = ErrorList::new();
        positive_price(&mut errors, "price", 0.0);
        positive_price(&mut errors, "price", f64::NAN);
        positive_price(&mut errors, "price", -5.0);
        assert_eq!(errors.into_result(()).unwrap_err().errors.len(), 3);
    }

    #[test]
    fn range_is_inclusive() {
        let mut errors = ErrorList::new();
        in_range(&mut errors, "bedrooms", 0, 0, 20);
        in_range(&mut errors, "bedrooms", 20, 0, 20);
        assert!(errors.is_empty());
        in_range(&mut errors, "bedrooms", 21, 0, 20);
        assert!(!errors.is_empty());
    }
}
