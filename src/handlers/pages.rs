//! HTML listing page.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Html};

const LOAD_FAILED: &str = "Unable to load users. Please try again later.";
const RENDER_FAILED: &str = "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Users</title></head>\
<body><h1>Users</h1><p>Internal server error.</p></body></html>\n";

/// `GET /`. Always answers with HTML: a listing failure renders the page with a generic
/// message, and a rendering failure falls back to a static page. Both are 500s.
pub async fn index(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let (status, rendered) = match state.users.list().await {
        Ok(users) => (StatusCode::OK, state.templates.index(&users, None)),
        Err(err) => {
            tracing::error!(error = %err, "failed to list users for index page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                state.templates.index(&[], Some(LOAD_FAILED)),
            )
        }
    };
    match rendered {
        Ok(page) => (status, Html(page)),
        Err(err) => {
            tracing::error!(error = %err, "failed to render index page");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(RENDER_FAILED.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::model::{User, UserPayload};
    use crate::render::Templates;
    use crate::service::UserRepository;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct NoUsers;

    #[async_trait]
    impl UserRepository for NoUsers {
        async fn list(&self) -> Result<Vec<User>, AppError> {
            Ok(Vec::new())
        }
        async fn create(&self, _: &UserPayload) -> Result<i64, AppError> {
            Ok(1)
        }
        async fn update(&self, _: i64, _: &UserPayload) -> Result<u64, AppError> {
            Ok(0)
        }
        async fn delete(&self, _: i64) -> Result<u64, AppError> {
            Ok(0)
        }
        async fn ping(&self) -> Result<(), AppError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn render_failure_still_answers_html() {
        // Parses, but fails at render time on the undefined variable.
        let templates = Templates::with_index("<p>{{ not_in_context }}</p>").unwrap();
        let state = AppState::new(Arc::new(NoUsers), templates);

        let (status, Html(body)) = index(State(state)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("Internal server error."));
        assert!(!body.contains("not_in_context"));
    }

    #[tokio::test]
    async fn empty_store_renders_ok() {
        let state = AppState::new(Arc::new(NoUsers), Templates::new().unwrap());
        let (status, Html(body)) = index(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No users yet."));
    }
}
