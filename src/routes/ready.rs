//! Readiness: the service is usable only while the users store answers a ping.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match state.users.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Readiness { status: "ok", database: "ok" }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "users store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness { status: "degraded", database: "unavailable" }),
            )
        }
    }
}

/// GET /ready.
pub fn ready_routes(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
