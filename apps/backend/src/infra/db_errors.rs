//! SeaORM -> DomainError translation.
//!
//! Adapters return raw `DbErr`; repos convert through `From<DbErr> for
//! DomainError`, which lands here.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Unique violations with a domain meaning, keyed on either the Postgres
/// constraint name or the SQLite `table.column` list.
fn map_unique_violation(error_msg: &str) -> Option<DomainError> {
    if error_msg.contains("pk_match_scouts")
        || error_msg.contains("match_scouts_pkey")
        || error_msg.contains("match_scouts.match_id") {
        return Some(DomainError::validation(
            ValidationKind::AlreadyScouting,
            "account already scouting this match",
        ));
    }
    if error_msg.contains("organizations_pkey") || error_msg.contains("organizations.id") {
        return Some(DomainError::validation_other("organization already exists"));
    }
    if error_msg.contains("league_teams_pkey") || error_msg.contains("league_teams.league_id") {
        return Some(DomainError::validation_other("team listed twice in league"));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` whose detail is safe to return.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        return map_unique_violation(&error_msg)
            .unwrap_or_else(|| DomainError::validation_other("Unique constraint violation"));
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Check constraint violation");
        return DomainError::validation_other("Check constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("canceling statement") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
