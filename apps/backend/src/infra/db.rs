//! Connection pools and startup migrations.

use std::str::FromStr;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, DbOwner, PoolSettings, RuntimeEnv};
use crate::error::AppError;

const APPLICATION_NAME: &str = "scouting-backend";
const STATEMENT_TIMEOUT: &str = "15s";
const LOCK_TIMEOUT: &str = "5s";

/// Session statements run on every new Postgres connection.
fn postgres_session_statements() -> Vec<String> {
    vec![
        format!("SET application_name = '{APPLICATION_NAME}';"),
        "SET timezone = 'UTC';".to_string(),
        format!("SET statement_timeout = '{STATEMENT_TIMEOUT}';"),
        format!("SET lock_timeout = '{LOCK_TIMEOUT}';"),
    ]
}

async fn build_postgres_pool(
    env: RuntimeEnv,
    owner: DbOwner,
    settings: &PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(env, owner)?;

    let pool = PgPoolOptions::new()
        .min_connections(settings.min_connections)
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                for stmt in postgres_session_statements() {
                    sqlx::query(&stmt).execute(&mut *conn).await?;
                }
                Ok(())
            })
        })
        .connect(&url)
        .await
        .map_err(|e| {
            warn!(error = %e, env = ?env, owner = ?owner, "postgres connection failed");
            AppError::db_unavailable()
        })?;

    info!(
        engine = "postgresql",
        env = ?env,
        owner = ?owner,
        max_connections = settings.max_connections,
        "database pool ready"
    );
    Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
}

/// Private in-memory database. Every connection to `sqlite::memory:` is a
/// separate database, so the pool is pinned to a single connection that is
/// never recycled; concurrent transactions queue on it.
async fn build_sqlite_memory_pool() -> Result<DatabaseConnection, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| AppError::config(format!("invalid sqlite options: {e}")))?
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
        .map_err(|e| {
            warn!(error = %e, "sqlite connection failed");
            AppError::db_unavailable()
        })?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Open a pool without running migrations.
///
/// `SqliteMemory` ignores `env` and `owner`: the database only lives inside
/// the returned pool.
pub async fn connect_db(
    env: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    match kind {
        DbKind::Postgres => build_postgres_pool(env, owner, &PoolSettings::from_env()?).await,
        DbKind::SqliteMemory => build_sqlite_memory_pool().await,
    }
}

async fn migrate_up(conn: &DatabaseConnection) -> Result<(), AppError> {
    migration::migrate(conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))
}

/// Single entry point used by the binary and tests: migrate, then hand back
/// an application-role pool.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    match kind {
        DbKind::Postgres => {
            let owner_conn = connect_db(env, kind, DbOwner::Owner).await?;
            migrate_up(&owner_conn).await?;
            if let Err(e) = owner_conn.close().await {
                warn!(error = %e, "closing owner pool failed");
            }
            connect_db(env, kind, DbOwner::App).await
        }
        DbKind::SqliteMemory => {
            let conn = connect_db(env, kind, DbOwner::App).await?;
            migrate_up(&conn).await?;
            Ok(conn)
        }
    }
}
