use crate::types::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// One or more schema constraints failed; every failing field is listed.
    #[error("Validation failed for {} field(s)", .0.len())]
    InvalidFields(FieldErrors),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing user record.
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "User",
            id: id.into(),
        }
    }
}
