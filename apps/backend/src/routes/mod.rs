use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod accounts;
pub mod health;
pub mod leagues;
pub mod matches;
pub mod organizations;
pub mod teams;

/// Register every route. `main.rs` mounts this under `/api`; tests mount
/// it the same way so paths match production.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, err.to_string()).into()
    }))
    .configure(health::configure_routes)
    .configure(organizations::configure_routes)
    .configure(accounts::configure_routes)
    .configure(teams::configure_routes)
    .configure(leagues::configure_routes)
    .configure(matches::configure_routes);
}
