//! SeaORM adapter for the `bestChefs` collection.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::entities::best_chefs;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<best_chefs::Model>, sea_orm::DbErr> {
    best_chefs::Entity::find()
        .order_by_asc(best_chefs::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<best_chefs::Model>, sea_orm::DbErr> {
    best_chefs::Entity::find_by_id(id.to_string()).one(conn).await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    document: serde_json::Value,
) -> Result<best_chefs::Model, sea_orm::DbErr> {
    best_chefs::ActiveModel {
        id: Set(id.to_string()),
        document: Set(document),
    }
    .insert(conn)
    .await
}
