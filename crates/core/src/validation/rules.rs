//! Validation input and result types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::FieldErrors;

/// A candidate record: wire field name -> textual value.
pub type Candidate = HashMap<String, String>;

/// Fallback message for a pattern violation without a configured message.
pub const DEFAULT_FORMAT_MESSAGE: &str = "Invalid format";

/// Outcome of evaluating a candidate against a schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

impl ValidationResult {
    pub fn from_errors(errors: FieldErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// `Ok(())` when valid, otherwise [`CoreError::InvalidFields`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self.errors))
        }
    }
}

/// Message recorded for a missing required field.
pub fn required_message(label: &str) -> String {
    format!("{label} is required")
}
