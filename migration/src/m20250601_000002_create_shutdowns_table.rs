use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shutdowns::Table)
                    .if_not_exists()
                    .col(pk_auto(Shutdowns::Id))
                    .col(date(Shutdowns::StartDate))
                    .col(date(Shutdowns::EndDate))
                    .col(text(Shutdowns::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shutdowns::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Shutdowns {
    Table,
    Id,
    StartDate,
    EndDate,
    Description,
}
