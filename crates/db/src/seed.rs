//! Demo records loaded at startup when seeding is enabled.

use directory_core::types::Timestamp;

use crate::models::user::User;

/// The two records the directory starts with.
pub fn demo_users(now: Timestamp) -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            phone: "123-456-7890".into(),
            role: Some("admin".into()),
            created_at: now,
        },
        User {
            id: "2".into(),
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane@example.com".into(),
            phone: "987-654-3210".into(),
            role: Some("user".into()),
            created_at: now,
        },
    ]
}
