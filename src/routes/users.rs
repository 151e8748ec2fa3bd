//! User CRUD routes and the HTML index.

use crate::handlers::pages::index;
use crate::handlers::users::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/users", get(list).post(create))
        .route("/users/:id", put(update).delete(delete_handler))
        .with_state(state)
}
