use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000001_create_pack_table::Pack;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_uuid(Card::Id))
                    .col(uuid_null(Card::PackId))
                    .col(string(Card::Name))
                    .col(string_null(Card::CardNumber))
                    .col(string_null(Card::Rarity))
                    .col(string_null(Card::CardType))
                    .col(text_null(Card::Description))
                    .col(timestamp_with_time_zone(Card::CreatedAt))
                    .col(timestamp_with_time_zone(Card::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_pack_id")
                            .from(Card::Table, Card::PackId)
                            .to(Pack::Table, Pack::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_card_pack_id")
                    .table(Card::Table)
                    .col(Card::PackId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    Table,
    Id,
    PackId,
    Name,
    CardNumber,
    Rarity,
    CardType,
    Description,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
