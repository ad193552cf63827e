//! Deck factory for creating test deck rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test decks with customizable fields.
pub struct DeckFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> DeckFactory<'a> {
    /// Creates a new DeckFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Deck {id}"` where id is auto-incremented
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Deck {}", id),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the deck row into the database.
    pub async fn build(self) -> Result<entity::deck::Model, DbErr> {
        let now = Utc::now();

        entity::deck::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a deck with default values.
pub async fn create_deck(db: &DatabaseConnection) -> Result<entity::deck::Model, DbErr> {
    DeckFactory::new(db).build().await
}
