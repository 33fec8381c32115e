//! Create restaurants table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restaurants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurants::CreatedById).string().not_null())
                    .col(ColumnDef::new(Restaurants::Name).string_len(25).not_null())
                    .col(ColumnDef::new(Restaurants::Description).string())
                    .col(ColumnDef::new(Restaurants::Category).string())
                    .col(
                        ColumnDef::new(Restaurants::HasDelivery)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Restaurants::ContactEmail).string())
                    .col(ColumnDef::new(Restaurants::ContactNumber).string())
                    .col(ColumnDef::new(Restaurants::City).string_len(50).not_null())
                    .col(ColumnDef::new(Restaurants::Street).string_len(50).not_null())
                    .col(ColumnDef::new(Restaurants::PostalCode).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurants_created_by")
                    .table(Restaurants::Table)
                    .col(Restaurants::CreatedById)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurants::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Restaurants {
    Table,
    Id,
    CreatedById,
    Name,
    Description,
    Category,
    HasDelivery,
    ContactEmail,
    ContactNumber,
    City,
    Street,
    PostalCode,
}
