use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::server::model::deck::{CreateDeckParam, Deck, UpdateDeckParam};

pub struct DeckRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeckRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every deck ordered by name, then ID
    pub async fn get_all(&self) -> Result<Vec<Deck>, DbErr> {
        let decks = entity::prelude::Deck::find()
            .order_by_asc(entity::deck::Column::Name)
            .order_by_asc(entity::deck::Column::Id)
            .all(self.db)
            .await?;

        Ok(decks.into_iter().map(Deck::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Deck>, DbErr> {
        let deck = entity::prelude::Deck::find_by_id(id).one(self.db).await?;

        Ok(deck.map(Deck::from_entity))
    }

    pub async fn create(&self, param: CreateDeckParam) -> Result<Deck, DbErr> {
        let now = Utc::now();

        let deck = entity::deck::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Deck::from_entity(deck))
    }

    /// Updates the supplied fields of a deck
    ///
    /// Returns `Ok(None)` without writing when the deck does not exist.
    pub async fn update(&self, id: Uuid, param: UpdateDeckParam) -> Result<Option<Deck>, DbErr> {
        let Some(deck) = entity::prelude::Deck::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::deck::ActiveModel = deck.into();
        if let Some(Some(name)) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let deck = active_model.update(self.db).await?;

        Ok(Some(Deck::from_entity(deck)))
    }

    /// Deletes the deck of the provided ID, returning the number of deleted rows
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Deck::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
