//! Users API: CRUD over a PostgreSQL `users` table plus an HTML listing page.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod render;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{DatabaseSettings, Settings};
pub use error::{AppError, ConfigError};
pub use model::{User, UserPayload};
pub use render::Templates;
pub use routes::{app, ready_routes, user_routes};
pub use service::{PgUserRepository, UserRepository};
pub use state::AppState;
