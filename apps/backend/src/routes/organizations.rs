//! Organization onboarding.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{CurrentScout, ValidatedJson};
use crate::services::accounts::AccountService;
use crate::services::organizations::OrganizationService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateOrganizationRequest {
    name: String,
}

/// POST /api/organizations
///
/// Registers the caller's active organization (the token's `org` claim)
/// and onboards the caller into it.
async fn create_organization(
    http_req: HttpRequest,
    scout: CurrentScout,
    body: ValidatedJson<CreateOrganizationRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CurrentScout {
        account_id,
        organization_id,
        ..
    } = scout;
    let name = body.into_inner().name;

    let organization = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let organization = OrganizationService::new()
                .create_organization(txn, &organization_id, &name)
                .await?;
            AccountService::new()
                .onboard_account(txn, &organization.id, &account_id, OffsetDateTime::now_utc())
                .await?;
            Ok(organization)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(organization))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/organizations", web::post().to(create_organization));
}
