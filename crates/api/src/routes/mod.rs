pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /users                  list, get (?id=), create, update (?id=), delete (?id=)
/// /users/schema           field schema
/// /users/validate         dry-run validation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/users", user::router())
}
