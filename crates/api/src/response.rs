//! Response body types for API handlers.

use serde::Serialize;

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}

impl DeleteResponse {
    pub fn user_deleted() -> Self {
        Self {
            success: true,
            message: "User deleted successfully",
        }
    }
}
