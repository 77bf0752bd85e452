use backend::repos::{chefs, meal_categories};
use backend::state::AppState;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

pub const CHEF_ALICE_ID: &str = "64b7f0c2a1d3e4f5a6b7c801";
pub const CHEF_BRUNO_ID: &str = "64b7f0c2a1d3e4f5a6b7c802";
pub const UNKNOWN_ID: &str = "64b7f0c2a1d3e4f5a6b7c8ff";

pub const CATEGORY_DESSERT_ID: &str = "65a0c1d2e3f4a5b6c7d8e901";
pub const CATEGORY_SEAFOOD_ID: &str = "65a0c1d2e3f4a5b6c7d8e902";

pub fn alice() -> Value {
    json!({
        "name": "Alice Waters",
        "specialty": "Californian",
        "rating": 4.9,
        "recipes": ["Chez Panisse salad", "Galette"]
    })
}

pub fn bruno() -> Value {
    json!({
        "name": "Bruno Barbieri",
        "specialty": "Italian",
        "rating": 4.7
    })
}

fn db(state: &AppState) -> &DatabaseConnection {
    state.db().expect("test state should have a database")
}

pub async fn seed_chefs(state: &AppState) {
    // Inserted out of order so list ordering is observable
    chefs::insert_best_chef(db(state), CHEF_BRUNO_ID, bruno())
        .await
        .expect("seed bruno");
    chefs::insert_best_chef(db(state), CHEF_ALICE_ID, alice())
        .await
        .expect("seed alice");
}

pub async fn seed_meal_categories(state: &AppState) {
    meal_categories::insert_meal_category(
        db(state),
        CATEGORY_SEAFOOD_ID,
        json!({ "title": "Seafood", "image": "seafood.png" }),
    )
    .await
    .expect("seed seafood");
    meal_categories::insert_meal_category(
        db(state),
        CATEGORY_DESSERT_ID,
        json!({ "title": "Dessert", "image": "dessert.png" }),
    )
    .await
    .expect("seed dessert");
}

/// Expected wire form: the stored body with `_id` merged in.
pub fn with_id(id: &str, body: Value) -> Value {
    let mut doc = body;
    if let Value::Object(map) = &mut doc {
        map.insert("_id".to_string(), Value::String(id.to_string()));
    }
    doc
}
