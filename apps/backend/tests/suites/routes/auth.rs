use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use scouting_backend::infra::state::build_state;
use scouting_backend::state::security_config::SecurityConfig;
use serde_json::json;

use crate::support::app_builder::build_test_app;
use crate::support::auth::{bearer, expired_bearer};

#[actix_web::test]
async fn missing_bearer_is_401() -> Result<(), Box<dyn std::error::Error>> {
    let app = build_test_app(build_state().build().await?).await;

    let req = test::TestRequest::get()
        .uri("/api/matches?status=active")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_MISSING_BEARER",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn token_signed_with_other_secret_is_401() -> Result<(), Box<dyn std::error::Error>> {
    let app = build_test_app(build_state().build().await?).await;
    let foreign = SecurityConfig::new("someone-elses-secret".as_bytes());

    let req = test::TestRequest::get()
        .uri("/api/leagues")
        .insert_header((AUTHORIZATION, bearer("acc", Some("org"), &[], &foreign)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_INVALID_JWT",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn expired_token_is_401() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let header = expired_bearer("acc", "org", &state.security);
    let app = build_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/leagues")
        .insert_header((AUTHORIZATION, header))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_EXPIRED_JWT",
        StatusCode::UNAUTHORIZED,
        Some("expired"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn token_without_organization_is_401() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let header = bearer("acc", None, &[], &state.security);
    let app = build_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/leagues")
        .insert_header((AUTHORIZATION, header))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "NO_ACTIVE_ORGANIZATION",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn managing_teams_needs_permission() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let header = bearer("acc", Some("org"), &[], &state.security);
    let app = build_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/api/teams")
        .insert_header((AUTHORIZATION, header))
        .set_json(json!({ "name": "Hawks" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "MISSING_PERMISSION",
        StatusCode::FORBIDDEN,
        Some("org:teams:manage"),
    )
    .await;
    Ok(())
}
