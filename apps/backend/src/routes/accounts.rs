//! Account routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::CurrentScout;
use crate::services::accounts::AccountService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct ListAccountsQuery {
    /// Only the caller's own account
    #[serde(rename = "self", default)]
    only_self: bool,
}

/// GET /api/accounts?self=
///
/// Accounts of the caller's organization.
async fn list_accounts(
    http_req: HttpRequest,
    scout: CurrentScout,
    query: web::Query<ListAccountsQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let only_self = query.into_inner().only_self;
    let CurrentScout {
        account_id,
        organization_id,
        ..
    } = scout;

    let accounts = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = AccountService::new();
            if only_self {
                let own = service
                    .find_account(txn, &organization_id, &account_id)
                    .await?;
                Ok(vec![own])
            } else {
                Ok(service.list_accounts(txn, &organization_id).await?)
            }
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(accounts))
}

/// PUT /api/accounts/me
///
/// Registers the token subject with the active organization. Idempotent.
async fn onboard_me(
    http_req: HttpRequest,
    scout: CurrentScout,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CurrentScout {
        account_id,
        organization_id,
        ..
    } = scout;

    let account = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(AccountService::new()
                .onboard_account(txn, &organization_id, &account_id, OffsetDateTime::now_utc())
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(account))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/accounts", web::get().to(list_accounts))
        .route("/accounts/me", web::put().to(onboard_me));
}
