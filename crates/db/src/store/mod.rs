//! Storage abstraction for user records.

mod memory;

pub use memory::InMemoryUserStore;

use async_trait::async_trait;
use directory_core::error::CoreError;

use crate::models::user::{CreateUser, UpdateUser, User};

/// The authoritative holder of user records.
///
/// Implementations assign identity and creation time, and must serialize
/// the operations against each other. They do not validate attributes;
/// callers run the schema check first.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<User>;

    /// The record with `id`, or [`CoreError::NotFound`].
    async fn get(&self, id: &str) -> Result<User, CoreError>;

    /// Insert a new record with a fresh id and `created_at`, returning it.
    async fn create(&self, input: &CreateUser) -> User;

    /// Overlay `input` onto the record with `id`, keeping its position.
    async fn update(&self, id: &str, input: &UpdateUser) -> Result<User, CoreError>;

    /// Remove the record with `id`.
    async fn delete(&self, id: &str) -> Result<(), CoreError>;

    /// Number of records currently held.
    async fn len(&self) -> usize;
}
