//! Request handlers.
//!
//! Handlers delegate to the [`UserStore`](directory_db::UserStore) held in
//! [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod user;
