use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;

/// Shared handles for request handlers.
// Not `Clone`: `DatabaseConnection` loses `Clone` under sea-orm's `mock`
// feature (enabled for tests); share via `web::Data` instead.
#[derive(Debug)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// JWT verification settings
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self { db, security }
    }
}
