//! Card data repository for database operations
//!
//! Provides the `CardRepository` for managing cards in the database, including listing the
//! cards of a single pack.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::card::{Card, CreateCardParam, UpdateCardParam};

/// Repository providing database operations for card management.
pub struct CardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets cards ordered by name, then ID
    ///
    /// # Arguments
    /// - `pack_id` - When set, only cards of this pack are returned
    ///
    /// # Returns
    /// - `Ok(Vec<Card>)` - Matching cards, possibly empty
    /// - `Err(DbErr)` - Database error during select
    pub async fn get_all(&self, pack_id: Option<Uuid>) -> Result<Vec<Card>, DbErr> {
        let mut query = entity::prelude::Card::find();
        if let Some(pack_id) = pack_id {
            query = query.filter(entity::card::Column::PackId.eq(pack_id));
        }

        let cards = query
            .order_by_asc(entity::card::Column::Name)
            .order_by_asc(entity::card::Column::Id)
            .all(self.db)
            .await?;

        Ok(cards.into_iter().map(Card::from_entity).collect())
    }

    /// Finds a card by ID
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - The requested card if found
    /// - `Ok(None)` - The requested card does not exist
    /// - `Err(DbErr)` - Database error during select
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Card>, DbErr> {
        let card = entity::prelude::Card::find_by_id(id).one(self.db).await?;

        Ok(card.map(Card::from_entity))
    }

    /// Creates a new card with a freshly generated ID
    ///
    /// # Returns
    /// - `Ok(Card)` - The created card
    /// - `Err(DbErr)` - Database error during insert, e.g. a `pack_id` without a pack
    pub async fn create(&self, param: CreateCardParam) -> Result<Card, DbErr> {
        let now = Utc::now();

        let card = entity::card::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            pack_id: ActiveValue::Set(param.pack_id),
            name: ActiveValue::Set(param.name),
            card_number: ActiveValue::Set(param.card_number),
            rarity: ActiveValue::Set(param.rarity),
            card_type: ActiveValue::Set(param.card_type),
            description: ActiveValue::Set(param.description),
            image_url: ActiveValue::Set(param.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Card::from_entity(card))
    }

    /// Updates the supplied fields of a card and refreshes `updated_at`
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - The updated card
    /// - `Ok(None)` - No card with the provided ID exists; nothing was written
    /// - `Err(DbErr)` - Database error during select or update
    pub async fn update(&self, id: Uuid, param: UpdateCardParam) -> Result<Option<Card>, DbErr> {
        let Some(card) = entity::prelude::Card::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::card::ActiveModel = card.into();
        if let Some(pack_id) = param.pack_id {
            active_model.pack_id = ActiveValue::Set(pack_id);
        }
        if let Some(Some(name)) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(card_number) = param.card_number {
            active_model.card_number = ActiveValue::Set(card_number);
        }
        if let Some(rarity) = param.rarity {
            active_model.rarity = ActiveValue::Set(rarity);
        }
        if let Some(card_type) = param.card_type {
            active_model.card_type = ActiveValue::Set(card_type);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(image_url) = param.image_url {
            active_model.image_url = ActiveValue::Set(image_url);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let card = active_model.update(self.db).await?;

        Ok(Some(Card::from_entity(card)))
    }

    /// Deletes the card of the provided ID
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of deleted rows, `0` if the card did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Card::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
