//! Shared query parameter types for API handlers.

use serde::Deserialize;

use crate::error::AppError;

/// Message returned when a mutating request carries no `?id=` selector.
pub const ID_REQUIRED_MESSAGE: &str = "User ID required";

/// Record selector (`?id=`). An empty value counts as absent.
///
/// Decoded from the raw pairs so a repeated `id` selects its first value.
#[derive(Debug, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct IdParams {
    pub id: Option<String>,
}

impl From<Vec<(String, String)>> for IdParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let id = pairs
            .into_iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value);
        Self { id }
    }
}

impl IdParams {
    /// The selector, if present and non-empty.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// The selector, or a 400 naming the missing id.
    pub fn require_id(&self) -> Result<&str, AppError> {
        self.id()
            .ok_or_else(|| AppError::BadRequest(ID_REQUIRED_MESSAGE.into()))
    }
}
