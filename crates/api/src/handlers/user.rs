//! Handlers for the `/users` resource.
//!
//! Records are selected with the `?id=` query parameter. Payloads are checked
//! here, before the store is called; the store itself never validates.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use directory_core::error::CoreError;
use directory_core::schema::FieldSchema;
use directory_core::validation::{self, Candidate, ValidationResult};
use directory_db::models::user::{CreateUser, UpdateUser, User};
use validator::Validate;

use crate::config::ValidationMode;
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::IdParams;
use crate::response::DeleteResponse;
use crate::state::AppState;

/// Message returned when a create lacks a first name or email.
pub const CREATE_REQUIRED_MESSAGE: &str = "First name and Email are required";

/// GET /api/users and GET /api/users?id={id}
///
/// Without a selector, lists every user in insertion order.
pub async fn list_or_get(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<IdParams>,
) -> AppResult<Response> {
    match params.id() {
        Some(id) => {
            let user = state.store.get(id).await?;
            Ok(Json(user).into_response())
        }
        None => {
            let users = state.store.list().await;
            Ok(Json(users).into_response())
        }
    }
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    check_create(&input, &state.schema, state.config.validation_mode)?;
    let user = state.store.create(&input).await;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users?id={id}
///
/// Applies the present attributes; `id` and `createdAt` in the body are ignored.
/// An unknown id answers 404 before the attributes are checked.
pub async fn update(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<IdParams>,
    AppJson(input): AppJson<UpdateUser>,
) -> AppResult<Json<User>> {
    let id = params.require_id()?;
    state.store.get(id).await?;
    check_update(&input, &state.schema, state.config.validation_mode)?;
    let user = state.store.update(id, &input).await?;
    Ok(Json(user))
}

/// DELETE /api/users?id={id}
pub async fn delete(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<IdParams>,
) -> AppResult<Json<DeleteResponse>> {
    let id = params.require_id()?;
    state.store.delete(id).await?;
    Ok(Json(DeleteResponse::user_deleted()))
}

/// GET /api/users/schema
///
/// The field schema the form UI renders from.
pub async fn schema(State(state): State<AppState>) -> Json<FieldSchema> {
    Json(state.schema.as_ref().clone())
}

/// POST /api/users/validate
///
/// Dry-run the full schema check against a candidate without touching the store.
pub async fn validate(
    State(state): State<AppState>,
    AppJson(candidate): AppJson<Candidate>,
) -> Json<ValidationResult> {
    Json(validation::validate(&candidate, &state.schema))
}

// ---------------------------------------------------------------------------
// Payload checks
// ---------------------------------------------------------------------------

fn check_create(
    input: &CreateUser,
    schema: &FieldSchema,
    mode: ValidationMode,
) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|_| CoreError::Validation(CREATE_REQUIRED_MESSAGE.into()))?;

    match mode {
        ValidationMode::Schema => validation::validate(&input.to_candidate(), schema).into_result(),
        ValidationMode::Boundary => Ok(()),
    }
}

fn check_update(
    input: &UpdateUser,
    schema: &FieldSchema,
    mode: ValidationMode,
) -> Result<(), CoreError> {
    match mode {
        ValidationMode::Schema => {
            validation::validate_partial(&input.to_candidate(), schema).into_result()
        }
        ValidationMode::Boundary => Ok(()),
    }
}
