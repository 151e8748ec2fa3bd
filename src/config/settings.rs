//! Process settings read from the environment.

use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::fmt;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PORT: u16 = 5432;

/// Database connection settings. `DB_HOST`, `DB_USER`, `DB_PASSWORD` and `DB_NAME` are required.
#[derive(Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub bind_addr: SocketAddr,
}

impl Settings {
    /// Load from the process environment (after `.env`, if the caller loaded one).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Values are taken as-is; the driver rejects bad ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let host = required("DB_HOST")?;
        let user = required("DB_USER")?;
        let password = required("DB_PASSWORD")?;
        let name = required("DB_NAME")?;

        let port: u16 = match lookup("DB_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "DB_PORT",
                reason: format!("'{}' is not a port number", raw),
            })?,
            None => DEFAULT_DB_PORT,
        };
        let ssl_mode: PgSslMode = match lookup("DB_SSLMODE") {
            Some(raw) => raw.parse().map_err(|e: sqlx::Error| ConfigError::Invalid {
                var: "DB_SSLMODE",
                reason: e.to_string(),
            })?,
            None => PgSslMode::Require,
        };
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "BIND_ADDR",
            reason: format!("'{}' is not a socket address", bind_raw),
        })?;

        Ok(Settings {
            database: DatabaseSettings {
                host,
                port,
                user,
                password,
                name,
                ssl_mode,
            },
            bind_addr,
        })
    }
}
