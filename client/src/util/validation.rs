//! Field-level validation messages for forms.
//!
//! Forms validate their request DTO (see `net::types`) before submitting and
//! show the first message per field next to the input.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

/// First validation message per field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut out = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let message = first
                    .message
                    .as_ref()
                    .map_or_else(|| format!("Invalid {field}"), ToString::to_string);
                out.insert(field.to_string(), message);
            }
        }
        Self(out)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validate `request`, returning it unchanged or its field messages.
pub fn check<T: Validate>(request: T) -> Result<T, FieldErrors> {
    match request.validate() {
        Ok(()) => Ok(request),
        Err(errors) => Err(FieldErrors::from_validation(&errors)),
    }
}
