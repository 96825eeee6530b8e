//! Client-side form validation.
//!
//! Validation runs before a draft is submitted; an invalid draft never
//! produces a request. The calculators in [`crate::pricing`] do not validate
//! their inputs — their callers do, through the `validate` methods on the
//! draft types in [`crate::models`].

use std::fmt;

/// Largest payment number the backend column can hold (signed 32-bit).
pub const MAX_PAYMENT_NUMBER: i64 = 2_147_483_647;

/// A single per-field validation message, suitable for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable message.
    pub message: String,
}

/// Collected per-field validation failures.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Record a failure for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Whether any failure was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All recorded failures, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// `Ok(())` when no failure was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for error in &self.errors {
            write!(f, "; {}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_converts_to_ok() {
        assert!(ValidationErrors::default().into_result().is_ok());
    }

    #[test]
    fn failures_are_kept_in_order() {
        let mut errors = ValidationErrors::default();
        errors.push("amount", "must be greater than 0");
        errors.push("dueDate", "is required");

        let result = errors.into_result();
        let errors = match result {
            Err(errors) => errors,
            Ok(()) => panic!("expected validation failure"),
        };

        assert_eq!(errors.errors().len(), 2);
        assert_eq!(
            errors.to_string(),
            "validation failed; amount: must be greater than 0; dueDate: is required"
        );
    }
}
