//! Schema evaluator — pure logic, no I/O.

use regex::Regex;

use super::rules::{required_message, Candidate, ValidationResult, DEFAULT_FORMAT_MESSAGE};
use crate::schema::{FieldDescriptor, FieldSchema};
use crate::types::FieldErrors;

/// Evaluate every field of `schema` against `candidate`.
///
/// All fields are checked independently; the result lists every failing
/// field in schema order.
pub fn validate(candidate: &Candidate, schema: &FieldSchema) -> ValidationResult {
    let mut errors = FieldErrors::new();

    for (field, pattern) in schema.compiled() {
        let value = candidate.get(&field.name).map(String::as_str);
        if let Some(message) = evaluate_field(field, pattern, value) {
            errors.insert(field.name.clone(), message);
        }
    }

    ValidationResult::from_errors(errors)
}

/// Evaluate only the fields present in `candidate`.
///
/// Used for partial updates: an omitted field keeps its stored value, so it
/// is not a violation, but a field sent blank still fails `required`.
pub fn validate_partial(candidate: &Candidate, schema: &FieldSchema) -> ValidationResult {
    let mut errors = FieldErrors::new();

    for (field, pattern) in schema.compiled() {
        let Some(value) = candidate.get(&field.name) else {
            continue;
        };
        if let Some(message) = evaluate_field(field, pattern, Some(value)) {
            errors.insert(field.name.clone(), message);
        }
    }

    ValidationResult::from_errors(errors)
}

fn evaluate_field(
    field: &FieldDescriptor,
    pattern: Option<&Regex>,
    value: Option<&str>,
) -> Option<String> {
    let value = value.unwrap_or("");

    if value.trim().is_empty() {
        // Blank optional fields skip the format check.
        return field.required.then(|| required_message(&field.label));
    }

    match pattern {
        Some(re) if !re.is_match(value) => Some(format_message(field)),
        _ => None,
    }
}

fn format_message(field: &FieldDescriptor) -> String {
    field
        .validation
        .as_ref()
        .and_then(|v| v.message.clone())
        .unwrap_or_else(|| DEFAULT_FORMAT_MESSAGE.to_string())
}
