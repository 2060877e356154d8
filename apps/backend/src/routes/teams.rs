//! Team routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::current_scout::PERM_MANAGE_TEAMS;
use crate::extractors::{CurrentScout, ValidatedJson};
use crate::services::teams::{NewTeam, TeamService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct ListTeamsQuery {
    league_id: Option<Uuid>,
}

/// POST /api/teams
async fn create_team(
    http_req: HttpRequest,
    scout: CurrentScout,
    body: ValidatedJson<NewTeam>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    scout.require_permission(PERM_MANAGE_TEAMS)?;
    let new = body.into_inner();

    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(TeamService::new().create_team(txn, new).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(team))
}

/// GET /api/teams?league_id=
///
/// Teams of the organization's leagues.
async fn list_teams(
    http_req: HttpRequest,
    scout: CurrentScout,
    query: web::Query<ListTeamsQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let organization_id = scout.organization_id;
    let league_id = query.into_inner().league_id;

    let teams = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(TeamService::new()
                .list_teams(txn, &organization_id, league_id)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(teams))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/teams")
            .route(web::post().to(create_team))
            .route(web::get().to(list_teams)),
    );
}
