//! In-memory `UserRepository` and request helpers for driving the router in-process.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use users_api::{app, AppError, AppState, Templates, User, UserPayload, UserRepository};

#[derive(Default)]
pub struct MemoryUsers {
    rows: Mutex<Vec<User>>,
    next_id: Mutex<i64>,
    failing: AtomicBool,
}

impl MemoryUsers {
    /// Make every subsequent call fail the way a dropped connection would.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::Protocol(
                "connection reset by peer at 10.0.0.5:5432".into(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, payload: &UserPayload) -> Result<i64, AppError> {
        self.check()?;
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        self.rows
            .lock()
            .unwrap()
            .push(User::from_payload(*next, payload.clone()));
        Ok(*next)
    }

    async fn update(&self, id: i64, payload: &UserPayload) -> Result<u64, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|u| u.id == id) {
            Some(row) => {
                *row = User::from_payload(id, payload.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn test_app() -> (Router, Arc<MemoryUsers>) {
    let users = Arc::new(MemoryUsers::default());
    let state = AppState::new(users.clone(), Templates::new().unwrap());
    (app(state), users)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn with_json(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
