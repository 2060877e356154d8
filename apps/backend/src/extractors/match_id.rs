use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// `{match_id}` path segment parsed as a UUID. Existence and organization
/// scope are checked by the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchId(pub Uuid);

fn parse(raw: Option<&str>) -> Result<MatchId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidMatchId, "Missing match_id parameter")
    })?;
    Uuid::parse_str(raw).map(MatchId).map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidMatchId, format!("Invalid match id: {raw}"))
    })
}

impl FromRequest for MatchId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req.match_info().get("match_id")))
    }
}
