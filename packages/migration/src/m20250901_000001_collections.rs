use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum BestChefs {
    Table,
    Id,
    Document,
}

#[derive(Iden)]
enum MealCategories {
    Table,
    Id,
    Document,
}

/// Both collections share one layout: a 24-hex object id and an opaque JSON body.
fn collection_table<T>(table: T, id: T, document: T) -> TableCreateStatement
where
    T: IntoIden + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(id)
                .string_len(24)
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(document).json_binary().not_null())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(collection_table(
                BestChefs::Table,
                BestChefs::Id,
                BestChefs::Document,
            ))
            .await?;

        manager
            .create_table(collection_table(
                MealCategories::Table,
                MealCategories::Id,
                MealCategories::Document,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MealCategories::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(BestChefs::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
