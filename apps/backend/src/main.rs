use actix_web::{web, App, HttpServer};
use scouting_backend::config::db::{DbKind, RuntimeEnv};
use scouting_backend::infra::state::build_state;
use scouting_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use scouting_backend::routes;
use scouting_backend::state::security_config::SecurityConfig;
use scouting_backend::telemetry;
use tracing::{error, info};

fn db_kind_from_env() -> Result<DbKind, String> {
    match std::env::var("BACKEND_DB").as_deref() {
        Err(_) | Ok("postgres") => Ok(DbKind::Postgres),
        Ok("sqlite-memory") => Ok(DbKind::SqliteMemory),
        Ok(other) => Err(format!(
            "BACKEND_DB must be 'postgres' or 'sqlite-memory', got '{other}'"
        )),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let jwt = match std::env::var("BACKEND_JWT_SECRET") {
        Ok(jwt) if !jwt.is_empty() => jwt,
        _ => {
            error!("BACKEND_JWT_SECRET must be set");
            std::process::exit(1);
        }
    };

    let db_kind = match db_kind_from_env() {
        Ok(kind) => kind,
        Err(msg) => {
            error!("{msg}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .with_security(SecurityConfig::new(jwt.as_bytes()))
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(%host, port, db = ?db_kind, "starting scouting backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .service(web::scope("/api").configure(routes::configure))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
