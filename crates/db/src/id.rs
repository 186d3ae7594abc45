//! Record identifier generation.

use directory_core::types::RecordId;
use uuid::Uuid;

/// Issues fresh record identifiers.
///
/// Ids are UUIDv7 strings: time-ordered with 74 random bits, so rapid
/// successive creations and coarse clocks cannot collide in practice.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn next_id(&self) -> RecordId {
        Uuid::now_v7().to_string()
    }

    /// Issue an id not accepted by `taken`, retrying on collision.
    pub fn next_unique(&self, mut taken: impl FnMut(&str) -> bool) -> RecordId {
        loop {
            let id = self.next_id();
            if !taken(&id) {
                return id;
            }
            tracing::warn!(%id, "Generated id already in use, retrying");
        }
    }
}
