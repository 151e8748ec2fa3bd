//! Database gateway: one shared PostgreSQL pool, verified at startup.

use crate::config::DatabaseSettings;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};

const MAX_CONNECTIONS: u32 = 5;

/// Open the pool and ping the server once. Callers treat any error as fatal.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        host = %settings.host,
        port = settings.port,
        database = %settings.name,
        "connecting to database"
    );
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(settings.connect_options())
        .await?;
    ping(&pool).await?;
    tracing::info!("database connection verified");
    Ok(pool)
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}
