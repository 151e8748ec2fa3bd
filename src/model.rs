//! User record and write payload.

use serde::{Deserialize, Serialize};

/// A row of the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub email: String,
}

/// Body of create and update requests. All three fields are required; unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub department: String,
    pub email: String,
}

impl User {
    pub fn from_payload(id: i64, payload: UserPayload) -> Self {
        User {
            id,
            name: payload.name,
            department: payload.department,
            email: payload.email,
        }
    }
}
