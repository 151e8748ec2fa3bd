//! Shared application state, built once at startup and cloned into every handler.

use crate::render::Templates;
use crate::service::UserRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, templates: Templates) -> Self {
        Self {
            users,
            templates: Arc::new(templates),
        }
    }
}
