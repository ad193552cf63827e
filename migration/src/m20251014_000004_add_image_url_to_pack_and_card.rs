use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251001_000001_create_pack_table::Pack, m20251001_000002_create_card_table::Card,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Pack::Table)
                    .add_column(string_null(Pack::ImageUrl))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Card::Table)
                    .add_column(string_null(Card::ImageUrl))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Card::Table)
                    .drop_column(Card::ImageUrl)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Pack::Table)
                    .drop_column(Pack::ImageUrl)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
