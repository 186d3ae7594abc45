//! Domain building blocks for the user directory: shared types, the error
//! taxonomy, the declarative field schema and the validation engine.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod schema;
pub mod types;
pub mod validation;
