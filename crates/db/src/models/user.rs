//! User entity model and DTOs.

use directory_core::types::{RecordId, Timestamp};
use directory_core::validation::Candidate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub created_at: Timestamp,
}

impl User {
    /// Build a new record from create input. Absent text attributes become
    /// empty strings; `role` stays unset.
    pub fn from_create(id: RecordId, created_at: Timestamp, input: &CreateUser) -> Self {
        Self {
            id,
            first_name: input.first_name.clone().unwrap_or_default(),
            last_name: input.last_name.clone().unwrap_or_default(),
            email: input.email.clone().unwrap_or_default(),
            phone: input.phone.clone().unwrap_or_default(),
            role: input.role.clone(),
            created_at,
        }
    }

    /// Editable attributes as a validation candidate.
    pub fn to_candidate(&self) -> Candidate {
        candidate_from([
            ("firstName", Some(&self.first_name)),
            ("lastName", Some(&self.last_name)),
            ("email", Some(&self.email)),
            ("phone", Some(&self.phone)),
            ("role", self.role.as_ref()),
        ])
    }
}

/// DTO for creating a user. `id` and `createdAt` are assigned by the store
/// and ignored if present in the payload.
///
/// The derive expresses the minimal boundary check: a create must carry a
/// non-empty first name and email.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(required, length(min = 1))]
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

impl CreateUser {
    /// Present attributes as a validation candidate.
    pub fn to_candidate(&self) -> Candidate {
        candidate_from([
            ("firstName", self.first_name.as_ref()),
            ("lastName", self.last_name.as_ref()),
            ("email", self.email.as_ref()),
            ("phone", self.phone.as_ref()),
            ("role", self.role.as_ref()),
        ])
    }
}

/// DTO for updating a user. All fields are optional; protected fields
/// (`id`, `createdAt`) have no counterpart here and are dropped on decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

impl UpdateUser {
    /// Overlay the present attributes onto `existing`, producing a new
    /// record. `id` and `created_at` always come from `existing`.
    pub fn apply(&self, existing: &User) -> User {
        User {
            id: existing.id.clone(),
            first_name: overlay(&self.first_name, &existing.first_name),
            last_name: overlay(&self.last_name, &existing.last_name),
            email: overlay(&self.email, &existing.email),
            phone: overlay(&self.phone, &existing.phone),
            role: self.role.clone().or_else(|| existing.role.clone()),
            created_at: existing.created_at,
        }
    }

    /// Present attributes as a validation candidate.
    pub fn to_candidate(&self) -> Candidate {
        candidate_from([
            ("firstName", self.first_name.as_ref()),
            ("lastName", self.last_name.as_ref()),
            ("email", self.email.as_ref()),
            ("phone", self.phone.as_ref()),
            ("role", self.role.as_ref()),
        ])
    }
}

fn overlay(patch: &Option<String>, current: &str) -> String {
    patch.clone().unwrap_or_else(|| current.to_string())
}

fn candidate_from<const N: usize>(pairs: [(&str, Option<&String>); N]) -> Candidate {
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v.clone())))
        .collect()
}
