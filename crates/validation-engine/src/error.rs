//! Aggregated validation errors.

use thiserror::Error;

/// A single violated field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

/// Every violation found in one input, collected before returning.
///
/// Renders as `name: is required; email: is not a valid email address` so a
/// caller can surface it verbatim in a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
#[error("{}", self.render())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    fn render(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.reason))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Collector used by the form validators.
#[derive(Debug, Default)]
pub struct ErrorList {
    errors: Vec<FieldError>,
}

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, reason: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Finish validation: `Ok(value)` when nothing was collected.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_fields() {
        let mut list = ErrorList::new();
        list.push("name", "is required");
        list.push("email", "is not a valid email address");
        let err = list.into_result(()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("name: is required"));
        assert!(msg.contains("email: is not a valid email address"));
    }

    #[test]
    fn empty_list_is_ok() {
        let list = ErrorList::new();
        assert!(list.into_result(42).is_ok());
    }
}
