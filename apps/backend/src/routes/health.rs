use actix_web::{web, HttpResponse};
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::warn;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    migrations: Option<usize>,
    time: String,
}

/// GET /api/health
///
/// Always 200; `db` reports whether a trivial query and the migration
/// table lookup succeeded.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = &app_state.db;
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());

    let (db_status, migrations) = match db.query_one(ping).await {
        Ok(_) => match migration::count_applied_migrations(db).await {
            Ok(count) => ("ok", Some(count)),
            Err(e) => {
                warn!(error = %e, "migration status lookup failed");
                ("ok", None)
            }
        },
        Err(e) => {
            warn!(error = %e, "health check query failed");
            ("error", None)
        }
    };

    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db: db_status,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
