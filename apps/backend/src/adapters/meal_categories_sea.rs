//! SeaORM adapter for the `mealCategories` collection.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::entities::meal_categories;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<meal_categories::Model>, sea_orm::DbErr> {
    meal_categories::Entity::find()
        .order_by_asc(meal_categories::Column::Id)
        .all(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    document: serde_json::Value,
) -> Result<meal_categories::Model, sea_orm::DbErr> {
    meal_categories::ActiveModel {
        id: Set(id.to_string()),
        document: Set(document),
    }
    .insert(conn)
    .await
}
