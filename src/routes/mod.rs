//! Router assembly.

mod ready;
mod users;

pub use ready::ready_routes;
pub use users::user_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// The complete service: all routes plus request tracing. Oversized bodies surface
/// as a `JsonRejection` in the handler, whether or not `Content-Length` was sent.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(ready_routes(state.clone()))
        .merge(user_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
}
