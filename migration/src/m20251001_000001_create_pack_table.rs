use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pack::Table)
                    .if_not_exists()
                    .col(pk_uuid(Pack::Id))
                    .col(string(Pack::Name))
                    .col(string_null(Pack::SetCode))
                    .col(text_null(Pack::Description))
                    .col(date_null(Pack::ReleaseDate))
                    .col(integer_null(Pack::CardCount))
                    .col(timestamp_with_time_zone(Pack::CreatedAt))
                    .col(timestamp_with_time_zone(Pack::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pack_name")
                    .table(Pack::Table)
                    .col(Pack::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pack::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pack {
    Table,
    Id,
    Name,
    SetCode,
    Description,
    ReleaseDate,
    CardCount,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
