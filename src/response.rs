//! Success response bodies.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

pub fn created(id: i64) -> (StatusCode, Json<CreatedId>) {
    (StatusCode::OK, Json(CreatedId { id }))
}

pub fn message(message: &'static str) -> (StatusCode, Json<Message>) {
    (StatusCode::OK, Json(Message { message }))
}
