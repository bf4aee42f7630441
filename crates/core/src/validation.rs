//! Input validation helpers shared by the API handlers.
//!
//! Validation errors are collected per field into [`FieldErrors`] so a
//! single 422 response can report every problem at once instead of
//! stopping at the first one.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// Lower bound (inclusive) for project years.
pub const MIN_YEAR: i32 = 1900;
/// Upper bound (inclusive) for project years.
pub const MAX_YEAR: i32 = 2100;

/// Ordered field → messages map carried by [`CoreError::Validation`].
///
/// `BTreeMap` keeps the serialized `errors` object in a stable order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validation message for a field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finish collection: `Ok(())` when no errors were recorded, otherwise
    /// `Err(CoreError::Validation)` carrying the whole map.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

/// Check that a required string field is non-empty after trimming.
pub fn require_non_empty(field: &str, value: &str, errors: &mut FieldErrors) {
    if value.trim().is_empty() {
        errors.push(field, "must not be empty");
    }
}

/// Check that a year lies within [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn validate_year(field: &str, year: i32, errors: &mut FieldErrors) {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        errors.push(
            field,
            format!("must be a year between {MIN_YEAR} and {MAX_YEAR}"),
        );
    }
}

/// Minimal email shape check: something before and after a single `@`.
pub fn validate_email(field: &str, value: &str, errors: &mut FieldErrors) {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        errors.push(field, "must be a valid email address");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn push_accumulates_per_field() {
        let mut errors = FieldErrors::new();
        errors.push("correo", "bad");
        errors.push("correo", "worse");
        errors.push("nombre_completo", "empty");
        let err = errors.into_result().unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("correo: bad, worse"));
        assert!(rendered.contains("nombre_completo: empty"));
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let mut errors = FieldErrors::new();
        validate_year("fecha_inicio", 1900, &mut errors);
        validate_year("fecha_inicio", 2100, &mut errors);
        assert!(errors.is_empty());
        validate_year("fecha_inicio", 1899, &mut errors);
        validate_year("fecha_inicio", 2101, &mut errors);
        assert!(!errors.is_empty());
    }

    #[test]
    fn email_shape() {
        let mut errors = FieldErrors::new();
        validate_email("correo", "a@x.com", &mut errors);
        assert!(errors.is_empty());
        validate_email("correo", "not-an-email", &mut errors);
        assert!(!errors.is_empty());
    }
}
