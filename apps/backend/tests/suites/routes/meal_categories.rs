use actix_web::test;
use serde_json::Value;

use crate::support::app_builder::{create_test_app, test_state};
use crate::support::factory::{seed_meal_categories, CATEGORY_DESSERT_ID, CATEGORY_SEAFOOD_ID};

#[actix_web::test]
async fn meal_categories_lists_all_in_id_order() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    seed_meal_categories(&state).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/mealCategories").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    let items = body.as_array().expect("list should be an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["_id"], CATEGORY_DESSERT_ID);
    assert_eq!(items[0]["title"], "Dessert");
    assert_eq!(items[1]["_id"], CATEGORY_SEAFOOD_ID);
    assert_eq!(items[1]["image"], "seafood.png");
    Ok(())
}

#[actix_web::test]
async fn meal_categories_needs_no_credential() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await?).build().await;

    let req = test::TestRequest::get().uri("/mealCategories").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    Ok(())
}
