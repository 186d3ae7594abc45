//! Schema-driven validation engine.
//!
//! Provides the result types and a pure-logic evaluator that interprets a
//! [`FieldSchema`](crate::schema::FieldSchema) against a candidate record.

pub mod evaluator;
pub mod rules;

pub use evaluator::{validate, validate_partial};
pub use rules::{Candidate, ValidationResult};
