use actix_web::test;
use backend_test_support::assert_error_body;

use crate::support::app_builder::{create_test_app, test_state, test_state_without_db};
use crate::support::auth::{bearer, mint_test_token};
use crate::support::factory::{seed_chefs, CHEF_ALICE_ID, UNKNOWN_ID};

#[actix_web::test]
async fn malformed_id_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await?).build().await;

    for id in ["123", "zzzzzzzzzzzzzzzzzzzzzzzz", "64b7f0c2a1d3e4f5a6b7c80100"] {
        let req = test::TestRequest::get()
            .uri(&format!("/bestChef/{id}"))
            .insert_header(bearer(&mint_test_token("a@b.com")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_body(resp, 400, "invalid document id").await;
    }
    Ok(())
}

#[actix_web::test]
async fn uppercase_id_finds_document() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    seed_chefs(&state).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/bestChef/{}", CHEF_ALICE_ID.to_ascii_uppercase()))
        .insert_header(bearer(&mint_test_token("a@b.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    Ok(())
}

#[actix_web::test]
async fn unknown_id_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await?).build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/bestChef/{UNKNOWN_ID}"))
        .insert_header(bearer(&mint_test_token("a@b.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 404, "document not found").await;
    Ok(())
}

#[actix_web::test]
async fn storage_failure_is_generic_500() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state_without_db().await?).build().await;

    for uri in ["/bestChefs", "/mealCategories"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_body(resp, 500, "internal server error").await;
    }

    let req = test::TestRequest::get()
        .uri(&format!("/bestChef/{CHEF_ALICE_ID}"))
        .insert_header(bearer(&mint_test_token("a@b.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, 500, "internal server error").await;
    Ok(())
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state_without_db().await?).build().await;

    let req = test::TestRequest::get().uri("/bestChef/whatever").to_request();
    let resp = test::call_service(&app, req).await;

    let trace_id = resp.headers().get("x-trace-id").cloned();
    let request_id = resp.headers().get("x-request-id").cloned();
    assert!(trace_id.is_some());
    assert_eq!(trace_id, request_id);
    Ok(())
}

#[actix_web::test]
async fn unknown_route_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state_without_db().await?).build().await;

    for uri in ["/bestChef", "/nowhere", "/bestChefs/extra"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_body(resp, 404, "route not found").await;
    }
    Ok(())
}

#[actix_web::test]
async fn wrong_method_is_method_not_allowed() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state_without_db().await?).build().await;

    let cases = [
        test::TestRequest::get().uri("/access-token"),
        test::TestRequest::post().uri("/bestChefs"),
        test::TestRequest::delete().uri("/mealCategories"),
        test::TestRequest::put().uri("/health"),
        test::TestRequest::post().uri("/"),
    ];
    for req in cases {
        let resp = test::call_service(&app, req.to_request()).await;

        assert_error_body(resp, 405, "method not allowed").await;
    }
    Ok(())
}

#[actix_web::test]
async fn wrong_method_on_gated_route() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state_without_db().await?).build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/bestChef/{CHEF_ALICE_ID}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, 401, "unauthorization access").await;

    let req = test::TestRequest::post()
        .uri(&format!("/bestChef/{CHEF_ALICE_ID}"))
        .insert_header(bearer(&mint_test_token("a@b.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, 405, "method not allowed").await;
    Ok(())
}
