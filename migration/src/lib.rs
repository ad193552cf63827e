pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_pack_table;
mod m20251001_000002_create_card_table;
mod m20251001_000003_create_deck_table;
mod m20251014_000004_add_image_url_to_pack_and_card;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_pack_table::Migration),
            Box::new(m20251001_000002_create_card_table::Migration),
            Box::new(m20251001_000003_create_deck_table::Migration),
            Box::new(m20251014_000004_add_image_url_to_pack_and_card::Migration),
        ]
    }
}
