use actix_web::test;
use serde_json::{json, Value};

use crate::support::app_builder::{create_test_app, test_state};
use crate::support::factory::{alice, bruno, seed_chefs, with_id, CHEF_ALICE_ID, CHEF_BRUNO_ID};

#[actix_web::test]
async fn best_chefs_is_public_and_ordered_by_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    seed_chefs(&state).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/bestChefs").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!([
            with_id(CHEF_ALICE_ID, alice()),
            with_id(CHEF_BRUNO_ID, bruno()),
        ])
    );
    Ok(())
}

#[actix_web::test]
async fn best_chefs_empty_collection() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await?).build().await;

    let req = test::TestRequest::get().uri("/bestChefs").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!([]));
    Ok(())
}

#[actix_web::test]
async fn best_chefs_ignores_authorization() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    seed_chefs(&state).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get()
        .uri("/bestChefs")
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    Ok(())
}

#[actix_web::test]
async fn embedded_id_is_replaced_by_row_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let db = state.db().expect("test state should have a database");
    backend::repos::chefs::insert_best_chef(
        db,
        CHEF_ALICE_ID,
        json!({ "_id": "spoofed", "name": "Alice Waters" }),
    )
    .await?;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/bestChefs").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!([{ "_id": CHEF_ALICE_ID, "name": "Alice Waters" }]));
    Ok(())
}
