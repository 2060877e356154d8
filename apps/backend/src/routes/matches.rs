//! Match lifecycle routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::domain::coverage::Coverage;
use crate::domain::lifecycle::{MatchStatus, Score};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{CurrentScout, MatchId, ValidatedJson};
use crate::services::matches::{MatchService, NewMatch};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct ListMatchesQuery {
    status: Option<String>,
}

/// POST /api/matches
async fn create_match(
    http_req: HttpRequest,
    scout: CurrentScout,
    body: ValidatedJson<NewMatch>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CurrentScout {
        account_id,
        organization_id,
        ..
    } = scout;
    let new = body.into_inner();
    let now = OffsetDateTime::now_utc();

    let created = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(MatchService::new()
                .create_match(txn, &organization_id, &account_id, new, now)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(created))
}

/// GET /api/matches?status=active|finished|any
///
/// `status` is required.
async fn list_matches(
    http_req: HttpRequest,
    scout: CurrentScout,
    query: web::Query<ListMatchesQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let status: MatchStatus = query
        .into_inner()
        .status
        .ok_or_else(|| {
            AppError::bad_request(ErrorCode::BadRequest, "status query parameter is required")
        })?
        .parse()?;
    let organization_id = scout.organization_id;

    let matches = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(MatchService::new()
                .list_matches(txn, &organization_id, status)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(matches))
}

/// POST /api/matches/{match_id}/finish
async fn finish_match(
    http_req: HttpRequest,
    scout: CurrentScout,
    match_id: MatchId,
    body: ValidatedJson<Score>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let organization_id = scout.organization_id;
    let score = body.into_inner();
    let now = OffsetDateTime::now_utc();

    let finished = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(MatchService::new()
                .finish_match(txn, &organization_id, match_id.0, score, now)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(finished))
}

/// GET /api/matches/{match_id}/scouts
async fn list_scouts(
    http_req: HttpRequest,
    scout: CurrentScout,
    match_id: MatchId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let organization_id = scout.organization_id;

    let scouts = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(MatchService::new()
                .list_assignments(txn, &organization_id, match_id.0)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(scouts))
}

/// POST /api/matches/{match_id}/scouts
///
/// Claims `{mode, submode}` for the caller.
async fn claim_assignment(
    http_req: HttpRequest,
    scout: CurrentScout,
    match_id: MatchId,
    body: ValidatedJson<Coverage>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CurrentScout {
        account_id,
        organization_id,
        ..
    } = scout;
    let coverage = body.into_inner();

    let assignment = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(MatchService::new()
                .claim_assignment(txn, &organization_id, match_id.0, &account_id, coverage)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(assignment))
}

/// POST /api/matches/{match_id}/scouts/me/complete
async fn complete_assignment(
    http_req: HttpRequest,
    scout: CurrentScout,
    match_id: MatchId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CurrentScout {
        account_id,
        organization_id,
        ..
    } = scout;
    let now = OffsetDateTime::now_utc();

    let assignment = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(MatchService::new()
                .complete_assignment(txn, &organization_id, match_id.0, &account_id, now)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(assignment))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/matches")
            .route(web::post().to(create_match))
            .route(web::get().to(list_matches)),
    )
    .route("/matches/{match_id}/finish", web::post().to(finish_match))
    .service(
        web::resource("/matches/{match_id}/scouts")
            .route(web::get().to(list_scouts))
            .route(web::post().to(claim_assignment)),
    )
    .route(
        "/matches/{match_id}/scouts/me/complete",
        web::post().to(complete_assignment),
    );
}
