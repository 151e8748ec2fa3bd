//! User repository: one parameterized statement per operation, no transactions.

use crate::error::AppError;
use crate::model::{User, UserPayload};
use crate::store;
use async_trait::async_trait;
use sqlx::PgPool;

// `id` may be SERIAL or BIGSERIAL; widen it so decoding into i64 works for both.
const LIST_SQL: &str = "SELECT CAST(id AS BIGINT) AS id, name, department, email FROM users ORDER BY id";
const INSERT_SQL: &str =
    "INSERT INTO users (name, department, email) VALUES ($1, $2, $3) RETURNING CAST(id AS BIGINT)";
const UPDATE_SQL: &str = "UPDATE users SET name = $1, department = $2, email = $3 WHERE id = $4";
const DELETE_SQL: &str = "DELETE FROM users WHERE id = $1";

/// Persistence port for users. Update and delete return the affected row count;
/// zero is not an error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn create(&self, payload: &UserPayload) -> Result<i64, AppError>;
    async fn update(&self, id: i64, payload: &UserPayload) -> Result<u64, AppError>;
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
    async fn ping(&self) -> Result<(), AppError>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        tracing::debug!(sql = %LIST_SQL, "query");
        let users = sqlx::query_as::<_, User>(LIST_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create(&self, payload: &UserPayload) -> Result<i64, AppError> {
        tracing::debug!(sql = %INSERT_SQL, params = ?payload, "query");
        let id = sqlx::query_scalar::<_, i64>(INSERT_SQL)
            .bind(&payload.name)
            .bind(&payload.department)
            .bind(&payload.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, id: i64, payload: &UserPayload) -> Result<u64, AppError> {
        tracing::debug!(sql = %UPDATE_SQL, id, params = ?payload, "query");
        let result = sqlx::query(UPDATE_SQL)
            .bind(&payload.name)
            .bind(&payload.department)
            .bind(&payload.email)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        tracing::debug!(sql = %DELETE_SQL, id, "query");
        let result = sqlx::query(DELETE_SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        store::ping(&self.pool).await?;
        Ok(())
    }
}
