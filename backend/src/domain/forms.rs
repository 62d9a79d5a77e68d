//! Field-scoped validation outcomes for form submissions.
//!
//! A rejected form is not a transport error: the page is re-rendered with a
//! success status and the offending fields annotated, and nothing is written
//! to the store. Services therefore return [`FormOutcome`] rather than `Err`
//! for validation failures, keeping [`crate::domain::Error`] for genuine
//! faults (missing resources, broken adapters).

use std::collections::BTreeMap;

use serde::Serialize;

/// Key used for errors that belong to the whole form rather than one field.
pub const NON_FIELD: &str = "__all__";

/// Message raised when a required field is blank.
pub const REQUIRED_FIELD: &str = "This field is required.";

/// Ordered map of field name to the validation messages raised against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against `field`, preserving earlier messages.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Build a single-field error set in one call.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// True when no field has raised a message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded against `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

/// Result of validating and applying a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome<T> {
    /// Validation passed and the operation was applied.
    Accepted(T),
    /// Validation failed; the store is untouched.
    Rejected(FormErrors),
}

impl<T> FormOutcome<T> {
    /// Unwrap the accepted value, panicking on rejection. Test helper.
    #[cfg(test)]
    pub fn expect_accepted(self, context: &str) -> T {
        match self {
            Self::Accepted(value) => value,
            Self::Rejected(errors) => panic!("{context}: rejected with {errors:?}"),
        }
    }

    /// Unwrap the rejection, panicking on acceptance. Test helper.
    #[cfg(test)]
    pub fn expect_rejected(self, context: &str) -> FormErrors
    where
        T: std::fmt::Debug,
    {
        match self {
            Self::Accepted(value) => panic!("{context}: unexpectedly accepted {value:?}"),
            Self::Rejected(errors) => errors,
        }
    }
}
