use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deck::Table)
                    .if_not_exists()
                    .col(pk_uuid(Deck::Id))
                    .col(string(Deck::Name))
                    .col(text_null(Deck::Description))
                    .col(timestamp_with_time_zone(Deck::CreatedAt))
                    .col(timestamp_with_time_zone(Deck::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deck::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Deck {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
