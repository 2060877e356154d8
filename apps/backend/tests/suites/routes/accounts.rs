use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use backend_test_support::unique_helpers::{unique_account_id, unique_org_id};
use scouting_backend::infra::state::build_state;
use serde_json::{json, Value};

use crate::support::app_builder::build_test_app;
use crate::support::auth::bearer;

#[actix_web::test]
async fn accounts_are_onboarded_per_organization() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let org = unique_org_id();
    let (founder_id, scout_id) = (unique_account_id(), unique_account_id());
    let founder = bearer(&founder_id, Some(&org), &[], &state.security);
    let scout = bearer(&scout_id, Some(&org), &[], &state.security);
    let outsider = bearer(&unique_account_id(), Some(&unique_org_id()), &[], &state.security);
    let app = build_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/api/organizations")
        .insert_header((AUTHORIZATION, founder.clone()))
        .set_json(json!({"name": "Club"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    // Not onboarded yet.
    let req = test::TestRequest::get()
        .uri("/api/accounts?self=true")
        .insert_header((AUTHORIZATION, scout.clone()))
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "ACCOUNT_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    for _ in 0..2 {
        let req = test::TestRequest::put()
            .uri("/api/accounts/me")
            .insert_header((AUTHORIZATION, scout.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let account: Value = test::read_body_json(resp).await;
        assert_eq!(account["id"], scout_id.as_str());
    }

    let req = test::TestRequest::get()
        .uri("/api/accounts")
        .insert_header((AUTHORIZATION, scout.clone()))
        .to_request();
    let listed: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let mut ids: Vec<&str> = listed
        .as_array()
        .expect("account list")
        .iter()
        .filter_map(|a| a["id"].as_str())
        .collect();
    ids.sort_unstable();
    let mut expected = vec![founder_id.as_str(), scout_id.as_str()];
    expected.sort_unstable();
    assert_eq!(ids, expected);

    let req = test::TestRequest::get()
        .uri("/api/accounts?self=true")
        .insert_header((AUTHORIZATION, scout))
        .to_request();
    let own: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(own.as_array().map(Vec::len), Some(1));
    assert_eq!(own[0]["id"], scout_id.as_str());

    // The outsider's organization was never registered.
    let req = test::TestRequest::put()
        .uri("/api/accounts/me")
        .insert_header((AUTHORIZATION, outsider))
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "ORGANIZATION_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    Ok(())
}
