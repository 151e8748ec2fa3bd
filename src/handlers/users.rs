//! JSON user handlers: list, create, update, delete.

use crate::error::AppError;
use crate::model::{User, UserPayload};
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn payload(body: Result<Json<UserPayload>, JsonRejection>) -> Result<UserPayload, AppError> {
    match body {
        Ok(Json(p)) => Ok(p),
        Err(rejection) => {
            let text = rejection.body_text();
            tracing::debug!(error = %text, "rejected request body");
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                Err(AppError::PayloadTooLarge(text))
            } else {
                Err(AppError::BadRequest(text))
            }
        }
    }
}

fn user_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = payload(body)?;
    let id = state.users.create(&body).await?;
    tracing::info!(id, "user created");
    Ok(response::created(id))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = user_id(path)?;
    let body = payload(body)?;
    let affected = state.users.update(id, &body).await?;
    if affected == 0 {
        tracing::debug!(id, "update matched no row");
    }
    Ok(response::message("User updated"))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = user_id(path)?;
    let affected = state.users.delete(id).await?;
    if affected == 0 {
        tracing::debug!(id, "delete matched no row");
    }
    Ok(response::message("User deleted"))
}
