//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /            -> list_or_get
/// POST   /            -> create
/// PUT    /?id={id}    -> update
/// DELETE /?id={id}    -> delete
/// GET    /schema      -> schema
/// POST   /validate    -> validate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(user::list_or_get)
                .post(user::create)
                .put(user::update)
                .delete(user::delete),
        )
        .route("/schema", get(user::schema))
        .route("/validate", post(user::validate))
}
