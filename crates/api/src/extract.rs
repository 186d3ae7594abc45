//! Request extractors with the API's error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor whose rejection is [`AppError::MalformedInput`].
///
/// Behaves like [`axum::Json`] but answers undecodable payloads (bad syntax,
/// wrong shape, missing `Content-Type`) with a 400 in the usual
/// `{ "error", "code" }` form.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor whose rejection is [`AppError::MalformedQuery`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
