//! Meal category repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::meal_categories_sea as categories_adapter;
use crate::errors::domain::DomainError;
use crate::repos::documents::Document;

pub async fn list_meal_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Document>, DomainError> {
    categories_adapter::list_all(conn)
        .await?
        .into_iter()
        .map(|row| Document::from_stored(row.id, row.document))
        .collect()
}

pub async fn insert_meal_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    document: serde_json::Value,
) -> Result<Document, DomainError> {
    let row = categories_adapter::insert(conn, id, document).await?;
    Document::from_stored(row.id, row.document)
}
