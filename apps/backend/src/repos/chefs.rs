//! Chef repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::best_chefs_sea as chefs_adapter;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::documents::Document;

pub async fn list_best_chefs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Document>, DomainError> {
    chefs_adapter::list_all(conn)
        .await?
        .into_iter()
        .map(|row| Document::from_stored(row.id, row.document))
        .collect()
}

pub async fn find_best_chef<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Document, DomainError> {
    let row = chefs_adapter::find_by_id(conn, id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Chef, format!("best chef {id}")))?;
    Document::from_stored(row.id, row.document)
}

pub async fn insert_best_chef<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    document: serde_json::Value,
) -> Result<Document, DomainError> {
    let row = chefs_adapter::insert(conn, id, document).await?;
    Document::from_stored(row.id, row.document)
}
