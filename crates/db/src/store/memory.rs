use async_trait::async_trait;
use directory_core::error::CoreError;
use tokio::sync::RwLock;

use super::UserStore;
use crate::id::IdGenerator;
use crate::models::user::{CreateUser, UpdateUser, User};

/// Process-local user store.
///
/// One `RwLock` guards the whole collection and each operation holds it for
/// its full duration, so reads share and mutations are exclusive. Records
/// keep insertion order.
#[derive(Debug)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
    ids: IdGenerator,
}

impl InMemoryUserStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            ids: IdGenerator::new(),
        }
    }

    /// Create a store pre-populated with `users`, in the given order.
    pub fn with_users(users: Vec<User>) -> Result<Self, CoreError> {
        for (i, user) in users.iter().enumerate() {
            if users[..i].iter().any(|u| u.id == user.id) {
                return Err(CoreError::Validation(format!(
                    "Duplicate user id '{}' in initial records",
                    user.id
                )));
            }
        }
        Ok(Self {
            users: RwLock::new(users),
            ids: IdGenerator::new(),
        })
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn get(&self, id: &str) -> Result<User, CoreError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| CoreError::user_not_found(id))
    }

    async fn create(&self, input: &CreateUser) -> User {
        let mut users = self.users.write().await;
        let id = self
            .ids
            .next_unique(|candidate| users.iter().any(|u| u.id == candidate));
        let user = User::from_create(id, chrono::Utc::now(), input);
        users.push(user.clone());
        tracing::info!(user_id = %user.id, total = users.len(), "User created");
        user
    }

    async fn update(&self, id: &str, input: &UpdateUser) -> Result<User, CoreError> {
        let mut users = self.users.write().await;
        let slot = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| CoreError::user_not_found(id))?;
        let updated = input.apply(slot);
        *slot = updated.clone();
        tracing::info!(user_id = %id, "User updated");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let mut users = self.users.write().await;
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| CoreError::user_not_found(id))?;
        users.remove(index);
        tracing::info!(user_id = %id, total = users.len(), "User deleted");
        Ok(())
    }

    async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use assert_matches::assert_matches;

    use super::*;
    use crate::seed::demo_users;

    fn input(first: &str, email: &str) -> CreateUser {
        CreateUser {
            first_name: Some(first.into()),
            last_name: Some("Lee".into()),
            email: Some(email.into()),
            phone: Some("555-000-1111".into()),
            role: Some("guest".into()),
        }
    }

    fn seeded() -> InMemoryUserStore {
        InMemoryUserStore::with_users(demo_users(chrono::Utc::now())).unwrap()
    }

    #[tokio::test]
    async fn list_returns_insertion_order() {
        let store = seeded();
        let created = store.create(&input("Bo", "bo@x.com")).await;
        let ids: Vec<_> = store.list().await.into_iter().map(|u| u.id).collect();
        assert_eq!(ids, ["1".to_string(), "2".to_string(), created.id]);
    }

    #[tokio::test]
    async fn create_then_get_returns_identical_record() {
        let store = InMemoryUserStore::new();
        let created = store.create(&input("Bo", "bo@x.com")).await;
        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.first_name, "Bo");
        assert_eq!(fetched.role.as_deref(), Some("guest"));
    }

    #[tokio::test]
    async fn created_record_appears_exactly_once() {
        let store = seeded();
        let created = store.create(&input("Bo", "bo@x.com")).await;
        let count = store
            .list()
            .await
            .iter()
            .filter(|u| u.id == created.id)
            .count();
        assert_eq!(count, 1);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn update_overlays_and_keeps_position() {
        let store = seeded();
        let patch = UpdateUser {
            email: Some("johnny@example.com".into()),
            ..Default::default()
        };
        let updated = store.update("1", &patch).await.unwrap();
        assert_eq!(updated.email, "johnny@example.com");
        assert_eq!(updated.first_name, "John");

        let users = store.list().await;
        assert_eq!(users[0], updated);
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn update_never_changes_identity_or_creation_time() {
        let store = InMemoryUserStore::new();
        let created = store.create(&input("Bo", "bo@x.com")).await;
        let patch: UpdateUser = serde_json::from_value(serde_json::json!({
            "id": "x",
            "createdAt": "2000-01-01T00:00:00Z",
            "firstName": "Bob"
        }))
        .unwrap();

        let updated = store.update(&created.id, &patch).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.first_name, "Bob");
        assert_matches!(store.get("x").await, Err(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = seeded();
        store.delete("2").await.unwrap();
        assert_matches!(
            store.get("2").await,
            Err(CoreError::NotFound { entity: "User", id }) if id == "2"
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_everywhere() {
        let store = seeded();
        assert_matches!(store.get("nope").await, Err(CoreError::NotFound { .. }));
        assert_matches!(
            store.update("nope", &UpdateUser::default()).await,
            Err(CoreError::NotFound { .. })
        );
        assert_matches!(store.delete("nope").await, Err(CoreError::NotFound { .. }));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let store = seeded();
        store.delete("1").await.unwrap();
        assert_matches!(store.delete("1").await, Err(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn with_users_rejects_duplicate_ids() {
        let mut users = demo_users(chrono::Utc::now());
        users[1].id = "1".into();
        assert_matches!(
            InMemoryUserStore::with_users(users),
            Err(CoreError::Validation(_))
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_issue_distinct_ids() {
        let store = Arc::new(InMemoryUserStore::new());
        let handles: Vec<_> = (0..100)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .create(&input(&format!("U{i}"), &format!("u{i}@x.com")))
                        .await
                        .id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }
        assert_eq!(ids.len(), 100);
        assert_eq!(store.len().await, 100);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_update_and_delete_leave_no_ghost() {
        for _ in 0..50 {
            let store = Arc::new(InMemoryUserStore::new());
            let id = store.create(&input("Bo", "bo@x.com")).await.id;

            let update = {
                let store = Arc::clone(&store);
                let id = id.clone();
                tokio::spawn(async move {
                    let patch = UpdateUser {
                        first_name: Some("Ghost".into()),
                        ..Default::default()
                    };
                    store.update(&id, &patch).await
                })
            };
            let delete = {
                let store = Arc::clone(&store);
                let id = id.clone();
                tokio::spawn(async move { store.delete(&id).await })
            };

            let _ = update.await.unwrap();
            delete.await.unwrap().unwrap();

            assert_matches!(store.get(&id).await, Err(CoreError::NotFound { .. }));
            assert!(store.list().await.is_empty());
        }
    }
}
