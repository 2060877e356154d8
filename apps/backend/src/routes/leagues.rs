//! League routes and the organization's league selection.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::current_scout::PERM_MANAGE_LEAGUES;
use crate::extractors::{CurrentScout, ValidatedJson};
use crate::services::leagues::{LeagueService, NewLeague};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct OrganizationLeaguesRequest {
    league_ids: Vec<Uuid>,
}

/// POST /api/leagues
async fn create_league(
    http_req: HttpRequest,
    scout: CurrentScout,
    body: ValidatedJson<NewLeague>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    scout.require_permission(PERM_MANAGE_LEAGUES)?;
    let new = body.into_inner();

    let league = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(LeagueService::new().create_league(txn, new).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(league))
}

/// GET /api/leagues
async fn list_leagues(
    http_req: HttpRequest,
    scout: CurrentScout,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let organization_id = scout.organization_id;

    let leagues = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(LeagueService::new()
                .list_leagues(txn, &organization_id)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(leagues))
}

/// PUT /api/organization-leagues
///
/// Replaces the whole selection; returns the resulting league list.
async fn update_organization_leagues(
    http_req: HttpRequest,
    scout: CurrentScout,
    body: ValidatedJson<OrganizationLeaguesRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    scout.require_permission(PERM_MANAGE_LEAGUES)?;
    let organization_id = scout.organization_id;
    let league_ids = body.into_inner().league_ids;

    let leagues = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(LeagueService::new()
                .update_organization_leagues(txn, &organization_id, league_ids)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(leagues))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/leagues")
            .route(web::post().to(create_league))
            .route(web::get().to(list_leagues)),
    )
    .route(
        "/organization-leagues",
        web::put().to(update_organization_leagues),
    );
}
