use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

/// Which database a process is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Enforces the `_test` database-name suffix.
    Test,
}

/// Storage backend behind the connection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    /// Private in-memory SQLite database, one per pool.
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(Self::SqliteMemory),
            other => Err(AppError::config(format!("Unknown database kind '{other}'"))),
        }
    }
}

/// Database role used for the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application role (DML only)
    App,
    /// Owner role, used for migrations
    Owner,
}

/// Pool sizing read from `DB_POOL_MIN`, `DB_POOL_MAX` and `DB_ACQUIRE_TIMEOUT_MS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            min_connections: 2,
            max_connections: 10,
            acquire_timeout: Duration::from_millis(5_000),
        }
    }
}

impl PoolSettings {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let min_connections = parse_or(&lookup, "DB_POOL_MIN", defaults.min_connections)?;
        let max_connections = parse_or(&lookup, "DB_POOL_MAX", defaults.max_connections)?;
        let acquire_ms = parse_or(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_MS",
            defaults.acquire_timeout.as_millis() as u64,
        )?;

        if max_connections == 0 || min_connections > max_connections {
            return Err(AppError::config(format!(
                "Invalid pool bounds: min={min_connections} max={max_connections}"
            )));
        }

        Ok(Self {
            min_connections,
            max_connections,
            acquire_timeout: Duration::from_millis(acquire_ms),
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, AppError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::config(format!("Environment variable '{name}' has invalid value '{raw}'"))
        }),
    }
}

/// Builds the Postgres URL for the given environment and role.
pub fn db_url(env: RuntimeEnv, owner: DbOwner) -> Result<String, AppError> {
    db_url_from(env, owner, |name| env::var(name).ok())
}

fn db_url_from(
    runtime: RuntimeEnv,
    owner: DbOwner,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, AppError> {
    let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());

    let db_name = match runtime {
        RuntimeEnv::Prod => must_var(&lookup, "PROD_DB")?,
        RuntimeEnv::Test => {
            let db_name = must_var(&lookup, "TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test environment requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            db_name
        }
    };

    let (username, password) = match owner {
        DbOwner::App => (
            must_var(&lookup, "APP_DB_USER")?,
            must_var(&lookup, "APP_DB_PASSWORD")?,
        ),
        DbOwner::Owner => (
            must_var(&lookup, "SCOUTING_OWNER_USER")?,
            must_var(&lookup, "SCOUTING_OWNER_PASSWORD")?,
        ),
    };

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

fn must_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, AppError> {
    lookup(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
