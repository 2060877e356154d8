use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, Span};

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Create teams.
pub const PERM_MANAGE_TEAMS: &str = "org:teams:manage";
/// Create leagues and choose the organization's leagues.
pub const PERM_MANAGE_LEAGUES: &str = "org:leagues:manage";

/// Authenticated caller acting inside their active organization.
///
/// Built from a verified Bearer token; tokens without an `org` claim are
/// rejected, since every operation is organization-scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentScout {
    pub account_id: String,
    pub organization_id: String,
    pub permissions: Vec<String>,
}

impl CurrentScout {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    pub fn require_permission(&self, permission: &str) -> Result<(), AppError> {
        if self.has_permission(permission) {
            Ok(())
        } else {
            debug!(account_id = %self.account_id, permission, "permission denied");
            Err(AppError::missing_permission(permission))
        }
    }
}

fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let value = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(AppError::unauthorized_missing_bearer)?
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    match value.split_once(' ') {
        Some(("Bearer", token)) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AppError::unauthorized_missing_bearer()),
    }
}

impl FromRequest for CurrentScout {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = bearer_token(&req)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let claims = verify_access_token(&token, &app_state.security)?;
            let organization_id = claims
                .org
                .filter(|org| !org.is_empty())
                .ok_or_else(AppError::no_active_organization)?;

            let span = Span::current();
            span.record("organization_id", organization_id.as_str());
            span.record("account_id", claims.sub.as_str());

            Ok(CurrentScout {
                account_id: claims.sub,
                organization_id,
                permissions: claims.permissions,
            })
        })
    }
}
