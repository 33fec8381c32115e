//! Create dishes table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_restaurants::Restaurants;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dishes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Dishes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Dishes::RestaurantId).integer().not_null())
                    .col(ColumnDef::new(Dishes::Name).string().not_null())
                    .col(ColumnDef::new(Dishes::Description).string())
                    .col(ColumnDef::new(Dishes::Price).decimal_len(10, 2).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dishes_restaurant")
                            .from(Dishes::Table, Dishes::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dishes_restaurant")
                    .table(Dishes::Table)
                    .col(Dishes::RestaurantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dishes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Dishes {
    Table,
    Id,
    RestaurantId,
    Name,
    Description,
    Price,
}
